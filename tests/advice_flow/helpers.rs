//! Shared helpers for the end-to-end advice tests.

use std::sync::Arc;

use eyre::{Result, WrapErr};
use rstest::fixture;
use waypost::advisor::adapters::KeywordClassifier;
use waypost::advisor::{AdvisorService, ReplyRenderer};
use waypost::catalog::CareerCatalog;
use waypost::catalog::domain::{JobTitle, SkillName};
use waypost::matching::CareerMatchingEngine;

/// Provides the engine over the built-in sample dataset.
#[fixture]
pub fn engine() -> CareerMatchingEngine {
    let catalog = CareerCatalog::sample().expect("sample catalog builds");
    CareerMatchingEngine::new(Arc::new(catalog))
}

/// Provides the full advisor stack with the keyword classifier.
///
/// # Errors
///
/// Returns an error when the reply templates fail to compile.
#[fixture]
pub fn advisor() -> Result<AdvisorService<KeywordClassifier>> {
    let catalog = Arc::new(CareerCatalog::sample().wrap_err("build sample catalog")?);
    let classifier = Arc::new(KeywordClassifier::new(Arc::clone(&catalog)));
    let renderer = Arc::new(ReplyRenderer::new().wrap_err("compile reply templates")?);
    Ok(AdvisorService::new(
        classifier,
        CareerMatchingEngine::new(catalog),
        renderer,
    ))
}

/// Builds validated skill names from string literals.
pub fn skills(names: &[&str]) -> Vec<SkillName> {
    names
        .iter()
        .map(|name| SkillName::new(*name).expect("valid skill name"))
        .collect()
}

/// Builds a validated job title.
pub fn job(name: &str) -> JobTitle {
    JobTitle::new(name).expect("valid job title")
}
