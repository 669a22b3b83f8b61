// src/source/mod.rs
// Reference document acquisition
//
// The scoring core is pure; everything that can fail lives here. A source
// has one contract: deliver the reference text as a string, or signal that
// it could not be obtained.

pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::HttpSource;

use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use url::Url;

/// Provider of the reference text the query is compared against
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    /// Fetch the reference text, or fail with a reference-unavailable kind
    async fn fetch(&self) -> Result<String>;

    /// Human-readable description of where the text comes from
    fn describe(&self) -> String;
}

/// Reference text held directly in memory (tests, `--text`)
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl ReferenceSource for InlineSource {
    async fn fetch(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "inline text".to_string()
    }
}

/// Build a source from a CLI/env reference spec: an http(s) URL becomes an
/// [`HttpSource`], anything else is treated as a file path.
pub fn for_spec(spec: &str) -> Box<dyn ReferenceSource> {
    if let Ok(parsed) = Url::parse(spec) {
        if parsed.scheme() == "http" || parsed.scheme() == "https" {
            return Box::new(HttpSource::new(parsed));
        }
    }
    Box::new(FileSource::new(PathBuf::from(spec)))
}
