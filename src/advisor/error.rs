//! Error types for the advisor context.

use thiserror::Error;

use crate::advisor::ports::ClassifierError;
use crate::catalog::domain::CatalogDomainError;

/// Errors returned by the advisor service.
///
/// An unknown target job is deliberately NOT here: the engine's only
/// failure is user-facing and non-retryable, so it becomes an
/// [`AdviceOutcome::UnknownJob`](crate::advisor::domain::AdviceOutcome)
/// reply instead of an error.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The classifier adapter failed.
    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    /// An extracted argument failed domain validation.
    #[error("invalid query argument: {0}")]
    Query(#[from] CatalogDomainError),

    /// A reply template failed to compile or render.
    #[error("failed to render reply template '{template}': {reason}")]
    Render {
        /// The template that failed.
        template: String,
        /// The renderer's diagnostic.
        reason: String,
    },
}
