// File: crates/highlight-core/src/error.rs
// Summary: Error type for parsing annotation options from text.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown label position '{0}' (expected left-top, left-bottom, right-top or right-bottom)")]
    LabelPosition(String),

    #[error("unknown label background '{0}' (expected none, rectangle or polygon)")]
    LabelBackground(String),
}
