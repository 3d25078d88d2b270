//! Job listing and listing identifier types.

use super::{CatalogDomainError, SkillName};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a job listing.
///
/// Listings have positional identity in the source data; a UUID is assigned
/// at catalog construction so individual listings remain addressable in
/// results and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ListingId(Uuid);

impl ListingId {
    /// Creates a new random listing identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a listing identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ListingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single job opening with its required-skill set.
///
/// Listing titles are free text (`Software Engineer (Backend)`) rather
/// than profile keys, so they stay trimmed strings instead of
/// [`JobTitle`](super::JobTitle) values. Required skills are deduplicated
/// case-insensitively at construction, first occurrence winning, and are
/// NOT validated against any job skill profile or the course catalog; the
/// skill vocabulary is intentionally loose across tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobListing {
    id: ListingId,
    title: String,
    company: String,
    location: String,
    required_skills: Vec<SkillName>,
}

impl JobListing {
    /// Creates a validated job listing with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptyJobTitle`],
    /// [`CatalogDomainError::EmptyCompany`], or
    /// [`CatalogDomainError::EmptyLocation`] when the corresponding field is
    /// empty after trimming.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        required_skills: impl IntoIterator<Item = SkillName>,
    ) -> Result<Self, CatalogDomainError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(CatalogDomainError::EmptyJobTitle);
        }
        let company = company.into().trim().to_owned();
        if company.is_empty() {
            return Err(CatalogDomainError::EmptyCompany);
        }
        let location = location.into().trim().to_owned();
        if location.is_empty() {
            return Err(CatalogDomainError::EmptyLocation);
        }

        let mut skills: Vec<SkillName> = Vec::new();
        for skill in required_skills {
            if !skills.contains(&skill) {
                skills.push(skill);
            }
        }

        Ok(Self {
            id: ListingId::new(),
            title,
            company,
            location,
            required_skills: skills,
        })
    }

    /// Returns the listing identifier.
    #[must_use]
    pub const fn id(&self) -> ListingId {
        self.id
    }

    /// Returns the listing title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the hiring company.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns the listing location (free text, e.g. `New York, NY`).
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the required skills in listing order.
    #[must_use]
    pub fn required_skills(&self) -> &[SkillName] {
        &self.required_skills
    }
}
