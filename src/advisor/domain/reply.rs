//! The advisor's answer to one utterance.

use serde::Serialize;

use super::AdviceOutcome;

/// A rendered reply together with the structured outcome it came from.
///
/// Front ends that only speak text use [`AdvisorReply::text`]; richer ones
/// can inspect the outcome directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisorReply {
    outcome: AdviceOutcome,
    text: String,
}

impl AdvisorReply {
    /// Creates a reply.
    #[must_use]
    pub const fn new(outcome: AdviceOutcome, text: String) -> Self {
        Self { outcome, text }
    }

    /// Returns the structured outcome.
    #[must_use]
    pub const fn outcome(&self) -> &AdviceOutcome {
        &self.outcome
    }

    /// Returns the human-readable rendering.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
