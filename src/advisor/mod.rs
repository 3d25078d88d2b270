//! Intent routing and reply rendering for Waypost.
//!
//! The advisor is the conversational seam around the matching engine: a
//! free-text utterance is classified into exactly one typed
//! [`AdviceIntent`](domain::AdviceIntent), dispatched to the matching
//! operation it names, and the structured outcome is rendered back into
//! human-readable text. Classification is a port so the rule-based
//! adapter shipped here can be swapped for an LLM-backed one without the
//! engine noticing. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

mod error;

pub use error::AdvisorError;
pub use services::{AdvisorService, ReplyRenderer};

#[cfg(test)]
mod tests;
