//! Domain model for intent routing.

mod intent;
mod outcome;
mod reply;

pub use intent::{AdviceIntent, CourseQuery, JobSearchQuery, SkillGapQuery};
pub use outcome::AdviceOutcome;
pub use reply::AdvisorReply;
