//! Error types for catalog domain validation.

use thiserror::Error;

/// Errors returned while constructing catalog domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogDomainError {
    /// The skill name is empty after trimming.
    #[error("skill name must not be empty")]
    EmptySkillName,

    /// The job title is empty after trimming.
    #[error("job title must not be empty")]
    EmptyJobTitle,

    /// The course title is empty after trimming.
    #[error("course title must not be empty")]
    EmptyCourseTitle,

    /// The course platform is empty after trimming.
    #[error("course platform must not be empty")]
    EmptyCoursePlatform,

    /// The course link is empty after trimming.
    #[error("course link must not be empty")]
    EmptyCourseLink,

    /// The listing company is empty after trimming.
    #[error("listing company must not be empty")]
    EmptyCompany,

    /// The listing location is empty after trimming.
    #[error("listing location must not be empty")]
    EmptyLocation,

    /// A skill appears more than once in one profile under case-insensitive
    /// comparison.
    #[error("profile for '{job}' lists skill '{skill}' more than once")]
    DuplicateProfileSkill {
        /// The job title whose profile repeats a skill.
        job: String,
        /// The repeated skill name.
        skill: String,
    },
}
