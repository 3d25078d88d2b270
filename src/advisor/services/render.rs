//! Reply rendering via minijinja templates.
//!
//! Each [`AdviceOutcome`] variant has one template, compiled once when the
//! renderer is built. Templates see the outcome's serde representation, so
//! the rendered text stays in lockstep with the structured result.

use minijinja::{Environment, context};

use crate::advisor::AdvisorError;
use crate::advisor::domain::AdviceOutcome;

const SKILL_GAP_TEMPLATE: &str = "\
{% if report.missing_skills %}\
To become a {{ report.target_job }} you still need: \
{{ report.missing_skills | join(\", \") }}.\
{% else %}\
You already cover every skill we track for {{ report.target_job }}.\
{% endif %}";

const UNKNOWN_JOB_TEMPLATE: &str =
    "Sorry, we don't have any information about the job title '{{ job }}'.";

const JOB_MATCHES_TEMPLATE: &str = "\
{% if matches %}\
Openings matching your skills:
{% for m in matches %}\
- {{ m.listing.title }} at {{ m.listing.company }} ({{ m.listing.location }}); \
requires {{ m.listing.required_skills | join(\", \") }}
{% endfor %}\
{% else %}\
No openings match those skills.\
{% endif %}";

const COURSES_TEMPLATE: &str = "\
{% if recommendations %}\
Recommended courses:
{% for skill, courses in recommendations | items %}\
{{ skill }}:
{% for course in courses %}\
- {{ course.title }} ({{ course.platform }}): {{ course.link }}
{% endfor %}\
{% endfor %}\
{% else %}\
No course recommendations for those skills.\
{% endif %}";

const UNHANDLED_TEMPLATE: &str = "Sorry, I can't assist with that.";

/// Renders structured advice outcomes into human-readable text.
#[derive(Debug)]
pub struct ReplyRenderer {
    environment: Environment<'static>,
}

impl ReplyRenderer {
    /// Builds a renderer with all reply templates compiled.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::Render`] when a template fails to compile,
    /// which only happens if the embedded sources are broken.
    pub fn new() -> Result<Self, AdvisorError> {
        let mut environment = Environment::new();
        let templates = [
            ("skill_gap", SKILL_GAP_TEMPLATE),
            ("unknown_job", UNKNOWN_JOB_TEMPLATE),
            ("job_matches", JOB_MATCHES_TEMPLATE),
            ("courses", COURSES_TEMPLATE),
            ("unhandled", UNHANDLED_TEMPLATE),
        ];
        for (name, source) in templates {
            environment
                .add_template(name, source)
                .map_err(|error| AdvisorError::Render {
                    template: name.to_owned(),
                    reason: error.to_string(),
                })?;
        }
        Ok(Self { environment })
    }

    /// Renders one outcome to text.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::Render`] when template evaluation fails.
    pub fn render(&self, outcome: &AdviceOutcome) -> Result<String, AdvisorError> {
        let (name, template_context) = match outcome {
            AdviceOutcome::SkillGap(report) => ("skill_gap", context! { report }),
            AdviceOutcome::UnknownJob { job } => ("unknown_job", context! { job }),
            AdviceOutcome::JobMatches { matches } => ("job_matches", context! { matches }),
            AdviceOutcome::Courses { recommendations } => ("courses", context! { recommendations }),
            AdviceOutcome::Unhandled => ("unhandled", context! {}),
        };

        let template =
            self.environment
                .get_template(name)
                .map_err(|error| AdvisorError::Render {
                    template: name.to_owned(),
                    reason: error.to_string(),
                })?;
        let rendered = template
            .render(template_context)
            .map_err(|error| AdvisorError::Render {
                template: name.to_owned(),
                reason: error.to_string(),
            })?;
        Ok(rendered.trim_end().to_owned())
    }
}
