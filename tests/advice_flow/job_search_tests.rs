//! Skill-overlap and location filtering over the sample listings.

use super::helpers::{engine, skills};
use rstest::rstest;
use waypost::matching::CareerMatchingEngine;

#[rstest]
fn python_and_sql_match_the_documented_listings(engine: CareerMatchingEngine) {
    let matches = engine.find_jobs(&skills(&["Python", "SQL"]), None);

    let titles: Vec<&str> = matches.iter().map(|m| m.listing().title()).collect();
    assert!(titles.contains(&"Data Scientist"));
    assert!(titles.contains(&"Senior Data Scientist"));
    assert!(titles.contains(&"Software Engineer (Backend)"));
    assert!(!titles.contains(&"Product Manager"));
}

#[rstest]
fn matches_preserve_catalog_order(engine: CareerMatchingEngine) {
    let matches = engine.find_jobs(&skills(&["Python", "SQL"]), None);

    let titles: Vec<&str> = matches.iter().map(|m| m.listing().title()).collect();
    assert_eq!(
        titles,
        vec![
            "Data Scientist",
            "Senior Data Scientist",
            "Data Analyst",
            "Software Engineer (Backend)",
        ]
    );
}

#[rstest]
fn location_filter_keeps_only_matching_locations(engine: CareerMatchingEngine) {
    let matches = engine.find_jobs(&skills(&["Python", "SQL"]), Some("New York"));

    assert_eq!(matches.len(), 1);
    let senior = matches.first().expect("one match");
    assert_eq!(senior.listing().title(), "Senior Data Scientist");
    assert_eq!(senior.listing().location(), "New York, NY");
}

#[rstest]
fn location_filter_is_case_insensitive(engine: CareerMatchingEngine) {
    let lower = engine.find_jobs(&skills(&["Python", "SQL"]), Some("new york"));
    let upper = engine.find_jobs(&skills(&["Python", "SQL"]), Some("NEW YORK"));

    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 1);
}

#[rstest]
fn zero_overlap_yields_no_matches(engine: CareerMatchingEngine) {
    let matches = engine.find_jobs(&skills(&["Wireframing", "Usability Testing"]), None);

    assert!(matches.is_empty());
}

#[rstest]
fn repeated_searches_are_identical(engine: CareerMatchingEngine) {
    let user = skills(&["Java", "Git"]);

    assert_eq!(
        engine.find_jobs(&user, Some("San Francisco")),
        engine.find_jobs(&user, Some("San Francisco"))
    );
}
