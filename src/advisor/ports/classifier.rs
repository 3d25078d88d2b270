//! Intent classification port.

use crate::advisor::domain::AdviceIntent;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for classifier operations.
pub type ClassifierResult<T> = Result<T, ClassifierError>;

/// Contract for turning a free-text utterance into one typed intent.
///
/// How classification happens — keyword rules, an ML model, a remote
/// LLM call — is entirely the adapter's business; the advisor only sees
/// the [`AdviceIntent`] that comes back. An adapter that cannot place an
/// utterance returns [`AdviceIntent::Unhandled`] rather than an error;
/// errors are for the adapter's own failures (e.g. an unreachable
/// classification service).
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Classifies one utterance into exactly one intent.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError`] when the adapter itself fails; an
    /// unclassifiable utterance is `Ok(AdviceIntent::Unhandled)`.
    async fn classify(&self, utterance: &str) -> ClassifierResult<AdviceIntent>;
}

/// Errors returned by classifier adapters.
#[derive(Debug, Clone, Error)]
pub enum ClassifierError {
    /// The classification backend failed.
    #[error("classifier backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl ClassifierError {
    /// Wraps an adapter-specific backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
