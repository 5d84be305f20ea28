//! Error types for model construction
//!
//! Every failure here is a construction-time failure: builders and factories
//! return `Err` instead of ever yielding a partially-valid instance.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A mandatory field was not set before `build()`.
    #[error("missing required element: '{0}'")]
    MissingRequired(&'static str),

    /// A mandatory repeating field was left empty.
    #[error("repeating element '{0}' requires at least one entry")]
    EmptyRequired(&'static str),

    /// ele-1: all FHIR elements must have a @value or children.
    #[error("ele-1 violated: {0} has no value and no children")]
    MissingValueOrChildren(&'static str),

    /// A code string did not match any constant of its value set.
    #[error("unrecognized code '{code}' for value set {value_set}")]
    UnrecognizedCode {
        code: String,
        value_set: &'static str,
    },

    /// A string value violated the FHIR string lexical rules.
    #[error("invalid string value: {0}")]
    InvalidString(String),

    /// A code value violated the FHIR code lexical rules.
    #[error("invalid code value: {0}")]
    InvalidCode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
