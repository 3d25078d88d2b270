//! Error types for the matching operations.

use thiserror::Error;

/// Errors returned by the career matching engine.
///
/// Job search and course recommendation are total; only skill-gap analysis
/// can fail, and only because the requested job has no profile. The error
/// is not retryable and is meant to be surfaced to the user as text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchingError {
    /// The target job has no skill profile.
    #[error("no skill profile for job title '{job}'")]
    UnknownJob {
        /// The folded job title that was looked up.
        job: String,
    },
}
