//! Breach lookup error types.
//!
//! These cover network, timeout, status, and parse failures when talking
//! to the range API. The evaluator recovers from exactly this type, so
//! unrelated programming errors are never silently masked.

use thiserror::Error;

/// Errors that can occur during a k-anonymity range lookup.
#[derive(Debug, Error)]
pub enum BreachError {
    /// The range request timed out.
    #[error("range request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// The range API returned a non-200 status.
    #[error("range API returned HTTP {0}")]
    UnexpectedStatus(u16),

    /// The range response body was not in `SUFFIX:COUNT` line format.
    #[error("malformed range response: {0}")]
    Malformed(String),
}
