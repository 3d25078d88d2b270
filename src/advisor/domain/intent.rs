//! Typed intents a classifier can resolve an utterance to.
//!
//! Each intent carries its own argument record of raw extracted strings;
//! validation into catalog domain types happens at dispatch, so a
//! classifier never needs the domain vocabulary to construct an intent.

use serde::{Deserialize, Serialize};

/// Arguments for a skill-gap analysis request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGapQuery {
    /// Skills the user claims to have.
    pub user_skills: Vec<String>,
    /// The job title the user is aiming for.
    pub target_job: String,
}

/// Arguments for a job search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSearchQuery {
    /// Skills the user wants matched against listings.
    pub user_skills: Vec<String>,
    /// Optional location filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Arguments for a course recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseQuery {
    /// Skills the user wants to improve.
    pub skills: Vec<String>,
}

/// The routing decision for one utterance: exactly one handler, or none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum AdviceIntent {
    /// Route to skill-gap analysis.
    SkillGap(SkillGapQuery),
    /// Route to job search.
    JobSearch(JobSearchQuery),
    /// Route to course recommendation.
    CourseRecommendation(CourseQuery),
    /// No handler applies to the utterance.
    Unhandled,
}
