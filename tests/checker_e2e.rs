// tests/checker_e2e.rs
// End-to-end similarity checks through the file-backed reference source

use simcheck::checker::Checker;
use simcheck::source::{self, FileSource, InlineSource};
use simcheck::SimcheckError;
use std::io::Write;
use std::path::PathBuf;

fn write_reference(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[tokio::test]
async fn file_sourced_check_end_to_end() {
    let reference = write_reference("The cat sat on the mat.");
    let checker = Checker::new(Box::new(FileSource::new(reference.path().to_path_buf())));

    let report = checker.check("the cat sat").await.unwrap();

    // vocabulary {the, cat, sat, on, mat}: dot 4, |q| sqrt(3), |r| sqrt(8)
    let want = 4.0 / (3.0f64.sqrt() * 8.0f64.sqrt()) * 100.0;
    assert!((report.percentage - want).abs() < 1e-9);
    assert_eq!(report.query_tokens, 3);
    assert_eq!(report.reference_tokens, 6);
    assert!(report.source.starts_with("file "));
}

#[tokio::test]
async fn missing_reference_file_is_an_error_not_a_zero_score() {
    let checker = Checker::new(Box::new(FileSource::new(PathBuf::from(
        "/nonexistent/simcheck-reference.txt",
    ))));

    let err = checker.check("the cat sat").await.unwrap_err();
    assert!(err.is_reference_unavailable());
    assert!(matches!(err, SimcheckError::ReferenceUnavailable(_)));
}

#[tokio::test]
async fn blank_query_is_rejected_before_fetching() {
    // A source pointing nowhere: the query validation must fire first
    let checker = Checker::new(Box::new(FileSource::new(PathBuf::from(
        "/nonexistent/simcheck-reference.txt",
    ))));

    let err = checker.check("").await.unwrap_err();
    assert!(matches!(err, SimcheckError::InvalidInput(_)));
}

#[tokio::test]
async fn identical_file_contents_score_100() {
    let text = "Plagiarism detection compares texts by their word frequencies.";
    let reference = write_reference(text);
    let checker = Checker::new(Box::new(FileSource::new(reference.path().to_path_buf())));

    let report = checker.check(text).await.unwrap();
    assert_eq!(report.percentage, 100.0);
}

#[tokio::test]
async fn spec_built_source_reads_files() {
    let reference = write_reference("alpha beta gamma");
    let spec = reference.path().to_string_lossy().to_string();
    let checker = Checker::new(source::for_spec(&spec));

    let report = checker.check("alpha beta gamma").await.unwrap();
    assert_eq!(report.percentage, 100.0);
}

#[tokio::test]
async fn json_report_shape() {
    let checker = Checker::new(Box::new(InlineSource::new("the cat sat on the mat")));
    let report = checker.check("the cat sat").await.unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["percentage"].is_f64());
    assert_eq!(json["query_tokens"], 3);
    assert_eq!(json["reference_tokens"], 6);
    assert_eq!(json["source"], "inline text");
}
