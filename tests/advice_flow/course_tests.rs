//! Recommendation mapping semantics over the sample course catalog.

use super::helpers::engine;
use rstest::rstest;
use waypost::matching::CareerMatchingEngine;

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|&name| name.to_owned()).collect()
}

#[rstest]
fn known_skills_map_to_their_catalog_entries(engine: CareerMatchingEngine) {
    let recommendations = engine.recommend_courses(&owned(&["python", "sql"]));

    let keys: Vec<&str> = recommendations.keys().collect();
    assert_eq!(keys, vec!["python", "sql"]);

    let python = recommendations.get("python").expect("entry exists");
    assert_eq!(python.len(), 1);
    let course = python.first().expect("one course");
    assert_eq!(course.title(), "Python for Everybody");
    assert_eq!(course.platform(), "Coursera");
}

#[rstest]
fn unknown_skill_yields_an_empty_mapping(engine: CareerMatchingEngine) {
    let recommendations = engine.recommend_courses(&owned(&["unknown-skill"]));

    assert!(recommendations.is_empty());
}

#[rstest]
fn original_casing_is_the_mapping_key(engine: CareerMatchingEngine) {
    let recommendations = engine.recommend_courses(&owned(&["Machine Learning"]));

    assert!(recommendations.get("Machine Learning").is_some());
    assert!(recommendations.get("machine learning").is_none());
}

#[rstest]
fn mixed_known_and_unknown_skills_keep_only_known(engine: CareerMatchingEngine) {
    let recommendations =
        engine.recommend_courses(&owned(&["pandas", "quantum basket weaving", "java"]));

    let keys: Vec<&str> = recommendations.keys().collect();
    assert_eq!(keys, vec!["pandas", "java"]);
}

#[rstest]
fn repeated_requests_are_identical(engine: CareerMatchingEngine) {
    let input = owned(&["statistics", "product strategy"]);

    assert_eq!(
        engine.recommend_courses(&input),
        engine.recommend_courses(&input)
    );
}
