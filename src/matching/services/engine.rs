//! The career matching engine.
//!
//! Provides [`CareerMatchingEngine`], the stateless facade over the three
//! matching operations. The engine borrows nothing mutable and holds the
//! catalog behind an `Arc`, so clones are cheap and any number of callers
//! may run operations concurrently without coordination.

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::CareerCatalog;
use crate::catalog::domain::{JobTitle, SkillName};
use crate::matching::MatchingError;
use crate::matching::domain::{CourseRecommendations, JobMatch, SkillGapReport};

/// Pure, stateless matching operations over a shared career catalog.
#[derive(Debug, Clone)]
pub struct CareerMatchingEngine {
    catalog: Arc<CareerCatalog>,
}

impl CareerMatchingEngine {
    /// Creates an engine over a shared catalog.
    #[must_use]
    pub const fn new(catalog: Arc<CareerCatalog>) -> Self {
        Self { catalog }
    }

    /// Returns the catalog the engine operates over.
    #[must_use]
    pub fn catalog(&self) -> &CareerCatalog {
        &self.catalog
    }

    /// Computes the skills missing for a target job.
    ///
    /// The result is the profile's required skills minus `user_skills`,
    /// compared case-insensitively, in profile definition order. Supplying
    /// every required skill yields an empty gap; supplying no skills yields
    /// the full required set.
    ///
    /// # Errors
    ///
    /// Returns [`MatchingError::UnknownJob`] when no profile exists for
    /// `target_job`.
    pub fn missing_skills(
        &self,
        user_skills: &[SkillName],
        target_job: &JobTitle,
    ) -> Result<SkillGapReport, MatchingError> {
        let profile = self
            .catalog
            .profile(target_job)
            .ok_or_else(|| MatchingError::UnknownJob {
                job: target_job.folded().to_owned(),
            })?;

        let held: HashSet<&str> = user_skills.iter().map(SkillName::folded).collect();
        let missing = profile
            .required_skills()
            .iter()
            .filter(|skill| !held.contains(skill.folded()))
            .cloned()
            .collect();

        Ok(SkillGapReport::new(profile.job().clone(), missing))
    }

    /// Finds listings sharing at least one skill with the user.
    ///
    /// A listing matches when the case-insensitive intersection of its
    /// required skills with `user_skills` is non-empty. A non-empty
    /// `location` additionally requires a case-insensitive substring match
    /// on the listing location; `None` or an empty string applies no
    /// location filter. Matches come back in catalog order.
    #[must_use]
    pub fn find_jobs(&self, user_skills: &[SkillName], location: Option<&str>) -> Vec<JobMatch> {
        let held: HashSet<&str> = user_skills.iter().map(SkillName::folded).collect();
        let needle = location
            .map(str::trim)
            .filter(|wanted| !wanted.is_empty())
            .map(str::to_lowercase);

        self.catalog
            .listings()
            .iter()
            .filter_map(|listing| {
                let matched: Vec<SkillName> = listing
                    .required_skills()
                    .iter()
                    .filter(|skill| held.contains(skill.folded()))
                    .cloned()
                    .collect();
                if matched.is_empty() {
                    return None;
                }
                if let Some(wanted) = &needle
                    && !listing.location().to_lowercase().contains(wanted)
                {
                    return None;
                }
                Some(JobMatch::new(listing.clone(), matched))
            })
            .collect()
    }

    /// Recommends courses for each requested skill.
    ///
    /// Input skills are processed in order; the result is keyed by the
    /// original strings while lookup folds case and trims. Skills without
    /// a catalog entry are omitted from the result.
    #[must_use]
    pub fn recommend_courses(&self, skills: &[String]) -> CourseRecommendations {
        let mut recommendations = CourseRecommendations::new();
        for raw in skills {
            let Ok(skill) = SkillName::new(raw.as_str()) else {
                // Blank input cannot name a catalog entry; skip it.
                continue;
            };
            if let Some(courses) = self.catalog.courses_for(&skill) {
                recommendations.insert(raw.clone(), courses.to_vec());
            }
        }
        recommendations
    }
}
