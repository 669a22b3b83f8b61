// src/similarity/tokenizer.rs
// Word extraction for similarity scoring

use regex::Regex;
use std::sync::LazyLock;

// A word is a maximal run of word-class characters (letters, digits,
// underscore). Punctuation and whitespace never become tokens.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Split a text into lowercase word tokens.
///
/// Returns an empty vec when the text contains no word-class characters
/// (empty string, pure punctuation, whitespace only).
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
