//! Unit tests for the career matching engine.

use std::sync::Arc;

use crate::catalog::CareerCatalog;
use crate::catalog::domain::{JobTitle, SkillName};
use crate::matching::{CareerMatchingEngine, MatchingError};
use rstest::{fixture, rstest};

#[fixture]
fn engine() -> CareerMatchingEngine {
    let catalog = CareerCatalog::sample().expect("sample catalog builds");
    CareerMatchingEngine::new(Arc::new(catalog))
}

fn skills(names: &[&str]) -> Vec<SkillName> {
    names
        .iter()
        .map(|name| SkillName::new(*name).expect("valid skill name"))
        .collect()
}

fn job(name: &str) -> JobTitle {
    JobTitle::new(name).expect("valid job title")
}

#[rstest]
fn gap_subtracts_user_skills_case_insensitively(engine: CareerMatchingEngine) {
    let report = engine
        .missing_skills(&skills(&["python", "sql", "PANDAS"]), &job("Data Scientist"))
        .expect("profile exists");

    let missing: Vec<&str> = report
        .missing_skills()
        .iter()
        .map(SkillName::as_str)
        .collect();
    assert_eq!(missing, vec!["Machine Learning", "Statistics", "Communication"]);
    assert_eq!(report.target_job().as_str(), "data scientist");
}

#[rstest]
fn full_skill_set_closes_the_gap(engine: CareerMatchingEngine) {
    for profile in engine.catalog().profiles().to_vec() {
        let report = engine
            .missing_skills(profile.required_skills(), profile.job())
            .expect("profile exists");

        assert!(report.is_closed(), "gap open for {}", profile.job());
    }
}

#[rstest]
fn empty_skill_set_yields_full_requirement(engine: CareerMatchingEngine) {
    for profile in engine.catalog().profiles().to_vec() {
        let report = engine
            .missing_skills(&[], profile.job())
            .expect("profile exists");

        assert_eq!(report.missing_skills(), profile.required_skills());
    }
}

#[rstest]
fn unknown_job_fails_with_folded_title(engine: CareerMatchingEngine) {
    let result = engine.missing_skills(&[], &job("  Astronaut "));

    assert_eq!(
        result,
        Err(MatchingError::UnknownJob {
            job: "astronaut".to_owned(),
        })
    );
}

#[rstest]
fn find_jobs_requires_skill_overlap(engine: CareerMatchingEngine) {
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
fn find_jobs_excludes_zero_overlap_listings(engine: CareerMatchingEngine) {
    let matches = engine.find_jobs(&skills(&["Figma"]), None);

    assert!(matches.is_empty());
}

#[rstest]
fn location_filters_as_case_insensitive_substring(engine: CareerMatchingEngine) {
    let matches = engine.find_jobs(&skills(&["Python", "SQL"]), Some("new york"));

    let titles: Vec<&str> = matches.iter().map(|m| m.listing().title()).collect();
    assert_eq!(titles, vec!["Senior Data Scientist"]);
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
fn blank_location_applies_no_filter(
    engine: CareerMatchingEngine,
    #[case] location: Option<&str>,
) {
    let matches = engine.find_jobs(&skills(&["Market Research"]), location);

    assert_eq!(matches.len(), 1);
}

#[rstest]
fn match_carries_overlapping_skills(engine: CareerMatchingEngine) {
    let matches = engine.find_jobs(&skills(&["Python", "Pandas"]), Some("New York"));

    let senior = matches.first().expect("one match");
    let overlap: Vec<&str> = senior
        .matched_skills()
        .iter()
        .map(SkillName::as_str)
        .collect();
    assert_eq!(overlap, vec!["Python", "Pandas"]);
    assert_eq!(senior.score(), 2);
}

#[rstest]
fn recommendations_keep_original_casing_and_input_order(engine: CareerMatchingEngine) {
    let recommendations =
        engine.recommend_courses(&["SQL".to_owned(), "python".to_owned()]);

    let keys: Vec<&str> = recommendations.keys().collect();
    assert_eq!(keys, vec!["SQL", "python"]);
    let sql_courses = recommendations.get("SQL").expect("entry exists");
    assert_eq!(sql_courses.len(), 1);
}

#[rstest]
fn unknown_skills_are_omitted_not_empty(engine: CareerMatchingEngine) {
    let recommendations = engine.recommend_courses(&[
        "python".to_owned(),
        "underwater basket weaving".to_owned(),
        String::new(),
    ]);

    assert_eq!(recommendations.len(), 1);
    assert!(recommendations.get("underwater basket weaving").is_none());
}

#[rstest]
fn distinct_casings_become_distinct_keys(engine: CareerMatchingEngine) {
    let recommendations = engine.recommend_courses(&[
        "Python".to_owned(),
        "PYTHON".to_owned(),
        "Python".to_owned(),
    ]);

    let keys: Vec<&str> = recommendations.keys().collect();
    assert_eq!(keys, vec!["Python", "PYTHON"]);
}

#[rstest]
fn operations_are_deterministic(engine: CareerMatchingEngine) {
    let user = skills(&["Python", "SQL"]);

    let first = engine.find_jobs(&user, Some("Remote"));
    let second = engine.find_jobs(&user, Some("Remote"));
    assert_eq!(first, second);

    let gap_a = engine.missing_skills(&user, &job("data analyst"));
    let gap_b = engine.missing_skills(&user, &job("data analyst"));
    assert_eq!(gap_a, gap_b);
}
