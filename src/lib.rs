//! Waypost: career-advice decision engine.
//!
//! This crate provides the matching logic behind a career-advice assistant:
//! skill-gap analysis against job profiles, job search over listings, and
//! course recommendation from a skill-indexed catalog, plus the typed
//! intent-routing seam a conversational front end dispatches through.
//!
//! # Architecture
//!
//! Waypost follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (classifiers, etc.)
//!
//! # Modules
//!
//! - [`catalog`]: Validated reference tables (profiles, listings, courses)
//! - [`matching`]: The three pure matching operations over the catalog
//! - [`advisor`]: Intent classification, dispatch, and reply rendering

pub mod advisor;
pub mod catalog;
pub mod matching;
