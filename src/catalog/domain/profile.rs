//! Job skill profile: the skills a job title requires.

use super::{CatalogDomainError, JobTitle, SkillName};
use serde::Serialize;

/// The required-skill set for one job title.
///
/// Skills are unique under case-insensitive comparison; a profile listing
/// the same skill twice is rejected at construction rather than silently
/// deduplicated, since repeated entries in the source data indicate a data
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobSkillProfile {
    job: JobTitle,
    required_skills: Vec<SkillName>,
}

impl JobSkillProfile {
    /// Creates a validated job skill profile.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::DuplicateProfileSkill`] when two
    /// skills in the profile compare equal case-insensitively.
    pub fn new(
        job: JobTitle,
        required_skills: impl IntoIterator<Item = SkillName>,
    ) -> Result<Self, CatalogDomainError> {
        let mut skills: Vec<SkillName> = Vec::new();
        for skill in required_skills {
            if skills.contains(&skill) {
                return Err(CatalogDomainError::DuplicateProfileSkill {
                    job: job.as_str().to_owned(),
                    skill: skill.as_str().to_owned(),
                });
            }
            skills.push(skill);
        }
        Ok(Self {
            job,
            required_skills: skills,
        })
    }

    /// Returns the job title this profile describes.
    #[must_use]
    pub const fn job(&self) -> &JobTitle {
        &self.job
    }

    /// Returns the required skills in profile definition order.
    #[must_use]
    pub fn required_skills(&self) -> &[SkillName] {
        &self.required_skills
    }
}
