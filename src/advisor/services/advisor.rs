//! The advisor service: classify, dispatch, render.

use std::sync::Arc;

use crate::advisor::AdvisorError;
use crate::advisor::domain::{AdviceIntent, AdviceOutcome, AdvisorReply};
use crate::advisor::ports::IntentClassifier;
use crate::advisor::services::ReplyRenderer;
use crate::catalog::domain::{CatalogDomainError, JobTitle, SkillName};
use crate::matching::{CareerMatchingEngine, MatchingError};

/// Routes utterances through a classifier to the matching engine and
/// renders the outcome as text.
///
/// The service is generic over the classifier port, so the keyword adapter
/// used in the demo and a model-backed adapter are interchangeable. All
/// shared state is immutable; one service instance serves any number of
/// concurrent callers.
#[derive(Clone)]
pub struct AdvisorService<C>
where
    C: IntentClassifier,
{
    classifier: Arc<C>,
    engine: CareerMatchingEngine,
    renderer: Arc<ReplyRenderer>,
}

impl<C> AdvisorService<C>
where
    C: IntentClassifier,
{
    /// Creates an advisor service.
    #[must_use]
    pub const fn new(
        classifier: Arc<C>,
        engine: CareerMatchingEngine,
        renderer: Arc<ReplyRenderer>,
    ) -> Self {
        Self {
            classifier,
            engine,
            renderer,
        }
    }

    /// Answers one utterance.
    ///
    /// The utterance is classified into exactly one intent, the intent is
    /// dispatched to its matching operation, and the structured outcome is
    /// rendered to text. An unknown target job and an unclassifiable
    /// utterance both come back as ordinary replies.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::Classifier`] when the classifier adapter
    /// fails, [`AdvisorError::Query`] when an extracted argument fails
    /// domain validation, or [`AdvisorError::Render`] when rendering
    /// fails.
    pub async fn advise(&self, utterance: &str) -> Result<AdvisorReply, AdvisorError> {
        let intent = self.classifier.classify(utterance).await?;
        let outcome = self.dispatch(intent)?;
        let text = self.renderer.render(&outcome)?;
        Ok(AdvisorReply::new(outcome, text))
    }

    /// Dispatches one typed intent to its matching operation.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::Query`] when an extracted argument fails
    /// domain validation.
    pub fn dispatch(&self, intent: AdviceIntent) -> Result<AdviceOutcome, AdvisorError> {
        match intent {
            AdviceIntent::SkillGap(query) => {
                let user_skills = parse_skills(&query.user_skills)?;
                let target_job = JobTitle::new(query.target_job)?;
                match self.engine.missing_skills(&user_skills, &target_job) {
                    Ok(report) => Ok(AdviceOutcome::SkillGap(report)),
                    Err(MatchingError::UnknownJob { job }) => {
                        Ok(AdviceOutcome::UnknownJob { job })
                    }
                }
            }
            AdviceIntent::JobSearch(query) => {
                let user_skills = parse_skills(&query.user_skills)?;
                let matches = self
                    .engine
                    .find_jobs(&user_skills, query.location.as_deref());
                Ok(AdviceOutcome::JobMatches { matches })
            }
            AdviceIntent::CourseRecommendation(query) => Ok(AdviceOutcome::Courses {
                recommendations: self.engine.recommend_courses(&query.skills),
            }),
            AdviceIntent::Unhandled => Ok(AdviceOutcome::Unhandled),
        }
    }
}

fn parse_skills(raw: &[String]) -> Result<Vec<SkillName>, CatalogDomainError> {
    raw.iter().map(|skill| SkillName::new(skill.as_str())).collect()
}
