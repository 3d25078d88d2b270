//! Course record for the skill-indexed catalog.

use super::CatalogDomainError;
use serde::Serialize;

/// A recommendable course: title, hosting platform, and link.
///
/// Constructed through [`Course::new`] so every stored record has trimmed,
/// non-empty fields; the raw configuration shape lives in
/// [`crate::catalog::config::CourseConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    title: String,
    platform: String,
    link: String,
}

impl Course {
    /// Creates a validated course record.
    ///
    /// All three fields are trimmed and must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptyCourseTitle`],
    /// [`CatalogDomainError::EmptyCoursePlatform`], or
    /// [`CatalogDomainError::EmptyCourseLink`] when the corresponding field
    /// is empty after trimming.
    pub fn new(
        title: impl Into<String>,
        platform: impl Into<String>,
        link: impl Into<String>,
    ) -> Result<Self, CatalogDomainError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(CatalogDomainError::EmptyCourseTitle);
        }
        let platform = platform.into().trim().to_owned();
        if platform.is_empty() {
            return Err(CatalogDomainError::EmptyCoursePlatform);
        }
        let link = link.into().trim().to_owned();
        if link.is_empty() {
            return Err(CatalogDomainError::EmptyCourseLink);
        }
        Ok(Self {
            title,
            platform,
            link,
        })
    }

    /// Returns the course title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the platform hosting the course.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Returns the course link.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }
}
