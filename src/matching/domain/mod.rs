//! Result types for the matching operations.

mod job_match;
mod recommendations;
mod report;

pub use job_match::JobMatch;
pub use recommendations::CourseRecommendations;
pub use report::SkillGapReport;
