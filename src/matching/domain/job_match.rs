//! Job search result entry.

use crate::catalog::domain::{JobListing, SkillName};
use serde::Serialize;

/// A listing that shares at least one skill with the searching user.
///
/// `matched_skills` carries the overlap (in listing order) so callers can
/// rank matches if they choose to; the engine itself returns matches in
/// catalog order without re-ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobMatch {
    listing: JobListing,
    matched_skills: Vec<SkillName>,
}

impl JobMatch {
    /// Creates a job match.
    #[must_use]
    pub const fn new(listing: JobListing, matched_skills: Vec<SkillName>) -> Self {
        Self {
            listing,
            matched_skills,
        }
    }

    /// Returns the matched listing.
    #[must_use]
    pub const fn listing(&self) -> &JobListing {
        &self.listing
    }

    /// Returns the skills shared between the user and the listing, in
    /// listing order.
    #[must_use]
    pub fn matched_skills(&self) -> &[SkillName] {
        &self.matched_skills
    }

    /// Returns the number of overlapping skills.
    #[must_use]
    pub fn score(&self) -> usize {
        self.matched_skills.len()
    }
}
