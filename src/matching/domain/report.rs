//! Skill-gap analysis result.

use crate::catalog::domain::{JobTitle, SkillName};
use serde::Serialize;

/// The skills a user is missing for a target job.
///
/// `missing_skills` holds the profile's required skills minus the user's,
/// compared case-insensitively, in profile definition order with no
/// duplicates. An empty list means the user already covers the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGapReport {
    target_job: JobTitle,
    missing_skills: Vec<SkillName>,
}

impl SkillGapReport {
    /// Creates a skill-gap report.
    #[must_use]
    pub const fn new(target_job: JobTitle, missing_skills: Vec<SkillName>) -> Self {
        Self {
            target_job,
            missing_skills,
        }
    }

    /// Returns the job title the gap was computed against.
    #[must_use]
    pub const fn target_job(&self) -> &JobTitle {
        &self.target_job
    }

    /// Returns the missing skills in profile definition order.
    #[must_use]
    pub fn missing_skills(&self) -> &[SkillName] {
        &self.missing_skills
    }

    /// Returns `true` when the user already has every required skill.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.missing_skills.is_empty()
    }
}
