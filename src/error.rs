//! All error types for the xliffcodec crate.
//!
//! These are returned from all fatal operations (configuration resolution,
//! serialization, deserialization). Per-unit data issues are not errors;
//! they surface as [`crate::types::Diagnostic`] values instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// An option held a value outside its enumerated domain.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed XML input. The message has tabs normalized to spaces
    /// and leading whitespace trimmed.
    #[error("XLIFF parse error: {0}")]
    Parse(String),

    /// The document's major version is not 1. Carries the raw `version`
    /// attribute value (empty if the attribute was missing).
    #[error("unsupported XLIFF version `{0}`")]
    UnsupportedVersion(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid data: {0}")]
    DataMismatch(String),
}

impl Error {
    /// Creates a parse error with a sanitized message.
    pub(crate) fn parse(message: impl AsRef<str>) -> Self {
        Error::Parse(
            message
                .as_ref()
                .replace('\t', " ")
                .trim_start()
                .to_string(),
        )
    }
}
