//! Service layer for the matching operations.

mod engine;

pub use engine::CareerMatchingEngine;
