//! Structured outcome of dispatching one intent.

use serde::Serialize;

use crate::matching::domain::{CourseRecommendations, JobMatch, SkillGapReport};

/// What dispatching an intent produced, before rendering.
///
/// An unknown target job is an outcome rather than an error: the matching
/// engine's failure is non-retryable and user-facing, so the advisor folds
/// it into the reply instead of propagating it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AdviceOutcome {
    /// A computed skill gap.
    SkillGap(SkillGapReport),
    /// The requested job has no skill profile.
    UnknownJob {
        /// The folded job title that was looked up.
        job: String,
    },
    /// Listings matching the user's skills.
    JobMatches {
        /// Matches in catalog order.
        matches: Vec<JobMatch>,
    },
    /// Courses recommended per requested skill.
    Courses {
        /// The recommendation map, keyed by original input strings.
        recommendations: CourseRecommendations,
    },
    /// The utterance matched no handler.
    Unhandled,
}
