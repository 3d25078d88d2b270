//! Rule-based intent classifier over the catalog vocabulary.

use std::sync::Arc;

use async_trait::async_trait;

use crate::advisor::domain::{AdviceIntent, CourseQuery, JobSearchQuery, SkillGapQuery};
use crate::advisor::ports::{ClassifierResult, IntentClassifier};
use crate::catalog::CareerCatalog;

/// Keyword cues that mark a course recommendation request.
///
/// Cues match on word boundaries, so `learning` (as in the skill
/// `Machine Learning`) does not trip the `learn` cue.
const COURSE_CUES: &[&str] = &["course", "courses", "learn", "study"];

/// Keyword cues that mark a job search request.
const JOB_CUES: &[&str] = &[
    "job",
    "jobs",
    "opening",
    "openings",
    "position",
    "positions",
    "opportunity",
    "opportunities",
    "hiring",
];

/// Keyword cues that, together with `skill`, mark a skill-gap request.
const GAP_CUES: &[&str] = &["need", "become", "missing", "gap", "require", "required"];

/// Demo-quality classifier driven by keyword cues and catalog vocabulary.
///
/// Intent selection checks course cues first, then job cues, then gap
/// cues, mirroring how the cues overlap in practice ("improve my skills
/// ... what courses ..." must not land on skill-gap). Arguments are
/// extracted by scanning the utterance for known skill names, profile job
/// titles, and listing location segments, matched case-insensitively on
/// word boundaries. Anything this adapter cannot place classifies as
/// [`AdviceIntent::Unhandled`]; it never fails.
///
/// This stands in for a model-backed router; production deployments would
/// put an LLM adapter behind the same [`IntentClassifier`] port.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    catalog: Arc<CareerCatalog>,
}

impl KeywordClassifier {
    /// Creates a classifier recognizing the given catalog's vocabulary.
    #[must_use]
    pub const fn new(catalog: Arc<CareerCatalog>) -> Self {
        Self { catalog }
    }

    fn classify_folded(&self, folded: &str) -> AdviceIntent {
        if contains_any_word(folded, COURSE_CUES) {
            return AdviceIntent::CourseRecommendation(CourseQuery {
                skills: self.skills_in(folded),
            });
        }

        if contains_any_word(folded, JOB_CUES) {
            return AdviceIntent::JobSearch(JobSearchQuery {
                user_skills: self.skills_in(folded),
                location: self.location_in(folded),
            });
        }

        if contains_any_word(folded, &["skill", "skills"]) && contains_any_word(folded, GAP_CUES) {
            let Some(target_job) = self.job_title_in(folded) else {
                // A gap needs a concrete job; guessing one would be worse
                // than admitting defeat.
                return AdviceIntent::Unhandled;
            };
            return AdviceIntent::SkillGap(SkillGapQuery {
                user_skills: self.skills_in(folded),
                target_job,
            });
        }

        AdviceIntent::Unhandled
    }

    /// Returns known skills mentioned in the utterance, ordered by where
    /// they first appear, with catalog casing.
    fn skills_in(&self, folded: &str) -> Vec<String> {
        let mut found: Vec<(usize, &str)> = self
            .catalog
            .skill_vocabulary()
            .iter()
            .filter_map(|skill| {
                find_word(folded, skill.folded()).map(|position| (position, skill.as_str()))
            })
            .collect();
        found.sort_by_key(|&(position, _)| position);
        found.into_iter().map(|(_, name)| name.to_owned()).collect()
    }

    /// Returns the first profile job title mentioned in the utterance.
    fn job_title_in(&self, folded: &str) -> Option<String> {
        self.catalog
            .profiles()
            .iter()
            .filter_map(|profile| {
                find_word(folded, profile.job().folded())
                    .map(|position| (position, profile.job().as_str()))
            })
            .min_by_key(|&(position, _)| position)
            .map(|(_, title)| title.to_owned())
    }

    /// Returns the first listing location segment mentioned in the
    /// utterance (e.g. `New York` out of `New York, NY`).
    fn location_in(&self, folded: &str) -> Option<String> {
        let mut best: Option<(usize, &str)> = None;
        for listing in self.catalog.listings() {
            for raw_segment in listing.location().split(',') {
                let segment = raw_segment.trim();
                if segment.len() < 3 {
                    continue;
                }
                if let Some(position) = find_word(folded, &segment.to_lowercase())
                    && best.is_none_or(|(best_position, _)| position < best_position)
                {
                    best = Some((position, segment));
                }
            }
        }
        best.map(|(_, segment)| segment.to_owned())
    }
}

#[async_trait]
impl IntentClassifier for KeywordClassifier {
    async fn classify(&self, utterance: &str) -> ClassifierResult<AdviceIntent> {
        Ok(self.classify_folded(&utterance.to_lowercase()))
    }
}

fn contains_any_word(haystack: &str, needles: &[&str]) -> bool {
    needles
        .iter()
        .any(|needle| find_word(haystack, needle).is_some())
}

/// Finds `needle` in `haystack` at a word boundary on both sides.
fn find_word(haystack: &str, needle: &str) -> Option<usize> {
    haystack.match_indices(needle).find_map(|(index, matched)| {
        let before_ok = haystack
            .get(..index)
            .and_then(|prefix| prefix.chars().next_back())
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = haystack
            .get(index + matched.len()..)
            .and_then(|suffix| suffix.chars().next())
            .is_none_or(|c| !c.is_alphanumeric());
        (before_ok && after_ok).then_some(index)
    })
}
