//! Career reference data for Waypost.
//!
//! This module holds the three read-only reference tables the matching
//! operations consume: job skill profiles, job listings, and the
//! skill-indexed course catalog. The tables are populated once from
//! configuration, validated through the domain types, and never mutated.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Configuration shapes in [`config`]
//! - The assembled tables in [`tables`]

pub mod config;
pub mod domain;
pub mod tables;

pub use config::{CatalogConfig, CourseConfig, ListingConfig};
pub use tables::{CareerCatalog, CatalogError};

#[cfg(test)]
mod tests;
