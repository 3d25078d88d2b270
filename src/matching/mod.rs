//! Career matching operations for Waypost.
//!
//! This module implements the three decision operations a career advisor
//! dispatches to: skill-gap analysis, job search, and course
//! recommendation. All three are pure functions over the read-only
//! [`CareerCatalog`](crate::catalog::CareerCatalog); the only failure mode
//! in the whole context is asking for the skill gap of an unknown job.
//!
//! - Result types in [`domain`]
//! - The engine service in [`services`]

pub mod domain;
pub mod services;

mod error;

pub use error::MatchingError;
pub use services::CareerMatchingEngine;

#[cfg(test)]
mod tests;
