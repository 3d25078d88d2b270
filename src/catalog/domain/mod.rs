//! Domain model for career reference data.
//!
//! The catalog domain models skill and job-title vocabulary, course
//! records, job listings, and job skill profiles. All values validate at
//! construction and are immutable afterwards. Skill and job-title
//! comparisons are case-insensitive throughout, while original casing is
//! preserved for display.

mod course;
mod error;
mod job_title;
mod listing;
mod profile;
mod skill;

pub use course::Course;
pub use error::CatalogDomainError;
pub use job_title::JobTitle;
pub use listing::{JobListing, ListingId};
pub use profile::JobSkillProfile;
pub use skill::SkillName;
