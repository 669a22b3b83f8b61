// src/checker.rs
// Thin adapter wiring a reference source to the pure scorer

use crate::error::{Result, SimcheckError};
use crate::report::MatchReport;
use crate::similarity::scorer::score_tokens;
use crate::similarity::tokenize;
use crate::source::ReferenceSource;
use tracing::info;

/// Runs similarity checks against a single reference document.
///
/// The only async step is acquiring the reference text; scoring itself is
/// pure and synchronous. Source failures surface as errors and are never
/// folded into a 0.0 score.
pub struct Checker {
    source: Box<dyn ReferenceSource>,
}

impl Checker {
    pub fn new(source: Box<dyn ReferenceSource>) -> Self {
        Self { source }
    }

    /// Check a query text against the reference document
    pub async fn check(&self, query: &str) -> Result<MatchReport> {
        if query.trim().is_empty() {
            return Err(SimcheckError::InvalidInput(
                "please enter some text to check".to_string(),
            ));
        }

        let reference = self.source.fetch().await?;

        let query_tokens = tokenize(query);
        let reference_tokens = tokenize(&reference);
        let percentage = score_tokens(&query_tokens, &reference_tokens);

        info!(
            percentage,
            query_tokens = query_tokens.len(),
            reference_tokens = reference_tokens.len(),
            "Similarity check complete"
        );

        Ok(MatchReport {
            percentage,
            query_tokens: query_tokens.len(),
            reference_tokens: reference_tokens.len(),
            source: self.source.describe(),
        })
    }
}
