// src/similarity/scorer.rs
// Cosine similarity between bag-of-words term-frequency vectors

use crate::similarity::tokenizer::tokenize;
use std::collections::HashMap;

/// Similarity between two texts as a percentage in [0, 100].
///
/// Both texts are lowercased and tokenized, a shared vocabulary is built
/// from the union of their tokens, and the cosine of the angle between the
/// two term-frequency vectors is scaled to a percentage. Identical
/// non-empty texts score 100.0; texts with disjoint vocabularies score 0.0.
///
/// A text that yields no tokens at all (empty string, pure punctuation)
/// has a zero-magnitude vector; the score is defined as 0.0 in that case
/// rather than an error.
pub fn score(query: &str, reference: &str) -> f64 {
    score_tokens(&tokenize(query), &tokenize(reference))
}

/// Score pre-tokenized texts. Same contract as [`score`]; callers that
/// already hold token sequences (e.g. to report token counts) avoid
/// tokenizing twice.
pub fn score_tokens(query_tokens: &[String], reference_tokens: &[String]) -> f64 {
    // One map keyed by vocabulary entry holds both frequency vectors, so
    // the two vectors are aligned by construction.
    let mut tf: HashMap<&str, (u64, u64)> = HashMap::new();
    for token in query_tokens {
        tf.entry(token).or_default().0 += 1;
    }
    for token in reference_tokens {
        tf.entry(token).or_default().1 += 1;
    }

    let mut dot: u64 = 0;
    let mut query_sq: u64 = 0;
    let mut reference_sq: u64 = 0;
    for &(q, r) in tf.values() {
        dot += q * r;
        query_sq += q * q;
        reference_sq += r * r;
    }

    // Zero magnitude means one side produced no tokens; guard the division
    // and report no similarity.
    if query_sq == 0 || reference_sq == 0 {
        return 0.0;
    }

    let cosine = dot as f64 / ((query_sq as f64) * (reference_sq as f64)).sqrt();

    // Cauchy-Schwarz bounds the cosine at 1.0; the min guards against
    // rounding nudging an exact match a hair past it.
    (cosine * 100.0).min(100.0)
}
