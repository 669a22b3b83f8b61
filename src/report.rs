// src/report.rs
// Match report and terminal rendering

use serde::Serialize;

/// Default width of the rendered gauge, in cells
pub const DEFAULT_GAUGE_WIDTH: usize = 40;

/// Outcome of a similarity check
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    /// Similarity percentage in [0, 100]
    pub percentage: f64,
    /// Token count of the query text
    pub query_tokens: usize,
    /// Token count of the reference text
    pub reference_tokens: usize,
    /// Where the reference text came from
    pub source: String,
}

impl MatchReport {
    /// One-line summary of the match
    pub fn summary(&self) -> String {
        format!(
            "Input query text matches {:.2}% with the reference document.",
            self.percentage
        )
    }

    /// Render a fixed-width gauge filled proportionally to the percentage,
    /// labeled to one decimal place.
    pub fn gauge(&self, width: usize) -> String {
        let width = width.max(1);
        let filled = ((self.percentage / 100.0) * width as f64).round() as usize;
        let filled = filled.min(width);
        format!(
            "[{}{}] {:.1}%",
            "#".repeat(filled),
            "-".repeat(width - filled),
            self.percentage
        )
    }

    /// Full human-readable rendering: summary, gauge, and token counts
    pub fn render(&self, gauge_width: usize) -> String {
        format!(
            "{}\n{}\n({} query tokens vs {} reference tokens, reference: {})",
            self.summary(),
            self.gauge(gauge_width),
            self.query_tokens,
            self.reference_tokens,
            self.source
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(percentage: f64) -> MatchReport {
        MatchReport {
            percentage,
            query_tokens: 3,
            reference_tokens: 6,
            source: "inline text".to_string(),
        }
    }

    #[test]
    fn test_summary_two_decimals() {
        assert_eq!(
            report(81.64965809).summary(),
            "Input query text matches 81.65% with the reference document."
        );
    }

    #[test]
    fn test_gauge_empty_and_full() {
        assert_eq!(report(0.0).gauge(10), "[----------] 0.0%");
        assert_eq!(report(100.0).gauge(10), "[##########] 100.0%");
    }

    #[test]
    fn test_gauge_proportional_fill() {
        // 50% of 10 cells is 5 filled
        assert_eq!(report(50.0).gauge(10), "[#####-----] 50.0%");
    }

    #[test]
    fn test_gauge_never_overflows_width() {
        let g = report(99.9).gauge(10);
        assert!(g.starts_with("[##########]"));
    }

    #[test]
    fn test_render_mentions_source_and_counts() {
        let r = report(50.0).render(10);
        assert!(r.contains("3 query tokens"));
        assert!(r.contains("6 reference tokens"));
        assert!(r.contains("inline text"));
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(report(81.65)).unwrap();
        assert_eq!(json["percentage"], 81.65);
        assert_eq!(json["query_tokens"], 3);
        assert_eq!(json["source"], "inline text");
    }
}
