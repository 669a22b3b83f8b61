// src/similarity/mod.rs
// Pure similarity scoring core: tokenization + cosine similarity over
// bag-of-words term frequencies

pub mod scorer;
pub mod tokenizer;

pub use scorer::score;
pub use tokenizer::tokenize;
