// src/lib.rs
// simcheck - plagiarism similarity checker

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod checker;
pub mod config;
pub mod error;
pub mod report;
pub mod similarity;
pub mod source;

pub use error::{Result, SimcheckError};
