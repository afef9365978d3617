//! Library error type

use crate::AnalyzerKind;
use thiserror::Error;

/// Errors raised at the analyzer boundary. Scoring itself never fails on text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    /// Input was not text (e.g. bytes that are not valid UTF-8)
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Configuration named a category the analyzer cannot extend
    #[error("{analyzer} analyzer has no keyword category named '{category}'")]
    UnknownCategory {
        analyzer: AnalyzerKind,
        category: String,
    },
}
