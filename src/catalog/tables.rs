//! The assembled career catalog: three validated, read-only tables.

use std::collections::HashMap;

use crate::catalog::config::CatalogConfig;
use crate::catalog::domain::{
    CatalogDomainError, Course, JobListing, JobSkillProfile, JobTitle, SkillName,
};
use thiserror::Error;

/// Errors returned while building a [`CareerCatalog`] from configuration.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A field failed domain validation.
    #[error(transparent)]
    Domain(#[from] CatalogDomainError),

    /// The configuration document was not valid JSON of the expected shape.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two profile keys fold to the same job title.
    #[error("duplicate job skill profile for '{job}'")]
    DuplicateProfile {
        /// The colliding job title, folded.
        job: String,
    },

    /// Two course catalog keys fold to the same skill.
    #[error("duplicate course catalog entry for skill '{skill}'")]
    DuplicateCourseSkill {
        /// The colliding skill name, folded.
        skill: String,
    },
}

/// The three reference tables behind the matching operations.
///
/// Built once from a [`CatalogConfig`], immutable afterwards, and safe to
/// share across threads without synchronization. Profile and course lookup
/// go through folded-key indexes; listings keep their catalog order.
///
/// The tables deliberately do not cross-validate: a listing may require
/// skills no profile mentions, and a profile skill may have no courses.
#[derive(Debug, Clone)]
pub struct CareerCatalog {
    profiles: Vec<JobSkillProfile>,
    profile_index: HashMap<String, usize>,
    listings: Vec<JobListing>,
    courses: HashMap<String, Vec<Course>>,
    skill_vocabulary: Vec<SkillName>,
}

impl CareerCatalog {
    /// Builds a catalog from its configuration shape, validating every
    /// field through the domain types.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Domain`] when a name or course field fails
    /// validation, [`CatalogError::DuplicateProfile`] or
    /// [`CatalogError::DuplicateCourseSkill`] when two keys collide under
    /// case folding.
    pub fn from_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        let CatalogConfig {
            job_skills,
            job_listings,
            course_catalog,
        } = config;

        let mut profiles = Vec::with_capacity(job_skills.len());
        let mut profile_index = HashMap::with_capacity(job_skills.len());
        for (raw_title, raw_skills) in job_skills {
            let job = JobTitle::new(raw_title)?;
            let skills = parse_skills(raw_skills)?;
            let profile = JobSkillProfile::new(job, skills)?;
            let key = profile.job().folded().to_owned();
            if profile_index.contains_key(&key) {
                return Err(CatalogError::DuplicateProfile { job: key });
            }
            profile_index.insert(key, profiles.len());
            profiles.push(profile);
        }

        let mut listings = Vec::with_capacity(job_listings.len());
        for raw in job_listings {
            let skills = parse_skills(raw.skills)?;
            listings.push(JobListing::new(
                raw.title,
                raw.company,
                raw.location,
                skills,
            )?);
        }

        let mut courses: HashMap<String, Vec<Course>> =
            HashMap::with_capacity(course_catalog.len());
        for (raw_skill, raw_courses) in course_catalog {
            let skill = SkillName::new(raw_skill)?;
            let entries = raw_courses
                .into_iter()
                .map(|c| Course::new(c.title, c.platform, c.link))
                .collect::<Result<Vec<_>, _>>()?;
            if courses.contains_key(skill.folded()) {
                return Err(CatalogError::DuplicateCourseSkill {
                    skill: skill.folded().to_owned(),
                });
            }
            courses.insert(skill.folded().to_owned(), entries);
        }

        let skill_vocabulary = collect_vocabulary(&profiles, &listings, &courses)?;

        Ok(Self {
            profiles,
            profile_index,
            listings,
            courses,
            skill_vocabulary,
        })
    }

    /// Parses and builds a catalog from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] when the document cannot be parsed,
    /// or any [`CatalogError`] from [`Self::from_config`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::from_config(CatalogConfig::from_json_str(json)?)
    }

    /// Builds the catalog from the built-in sample dataset.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] only if the embedded dataset is internally
    /// inconsistent, which the test suite guards against.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_config(CatalogConfig::sample())
    }

    /// Finds the skill profile for a job title, case-insensitively.
    #[must_use]
    pub fn profile(&self, job: &JobTitle) -> Option<&JobSkillProfile> {
        self.profile_index
            .get(job.folded())
            .and_then(|&index| self.profiles.get(index))
    }

    /// Returns all job skill profiles.
    #[must_use]
    pub fn profiles(&self) -> &[JobSkillProfile] {
        &self.profiles
    }

    /// Returns all job listings in catalog order.
    #[must_use]
    pub fn listings(&self) -> &[JobListing] {
        &self.listings
    }

    /// Finds the courses for a skill, case-insensitively.
    ///
    /// Returns `None` when the catalog has no entry for the skill; an
    /// absent entry is distinct from an entry with an empty course list.
    #[must_use]
    pub fn courses_for(&self, skill: &SkillName) -> Option<&[Course]> {
        self.courses.get(skill.folded()).map(Vec::as_slice)
    }

    /// Returns every distinct skill named anywhere in the catalog, first
    /// occurrence's casing preserved, in profile → listing → course order.
    ///
    /// Classifier adapters use this as the recognizable vocabulary.
    #[must_use]
    pub fn skill_vocabulary(&self) -> &[SkillName] {
        &self.skill_vocabulary
    }
}

fn parse_skills(raw: Vec<String>) -> Result<Vec<SkillName>, CatalogDomainError> {
    raw.into_iter().map(SkillName::new).collect()
}

fn collect_vocabulary(
    profiles: &[JobSkillProfile],
    listings: &[JobListing],
    courses: &HashMap<String, Vec<Course>>,
) -> Result<Vec<SkillName>, CatalogDomainError> {
    let mut vocabulary: Vec<SkillName> = Vec::new();

    let profile_skills = profiles.iter().flat_map(JobSkillProfile::required_skills);
    let listing_skills = listings.iter().flat_map(JobListing::required_skills);
    for skill in profile_skills.chain(listing_skills) {
        if !vocabulary.contains(skill) {
            vocabulary.push(skill.clone());
        }
    }

    // Course keys are stored folded; sort for a deterministic tail order.
    let mut course_keys: Vec<&String> = courses.keys().collect();
    course_keys.sort();
    for key in course_keys {
        let skill = SkillName::new(key.clone())?;
        if !vocabulary.contains(&skill) {
            vocabulary.push(skill);
        }
    }

    Ok(vocabulary)
}
