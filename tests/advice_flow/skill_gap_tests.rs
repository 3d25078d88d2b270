//! Gap computation across every sample profile.

use super::helpers::{engine, job, skills};
use rstest::rstest;
use waypost::matching::{CareerMatchingEngine, MatchingError};

#[rstest]
fn supplying_every_required_skill_closes_the_gap(engine: CareerMatchingEngine) {
    let profiles = engine.catalog().profiles().to_vec();
    for profile in profiles {
        let report = engine
            .missing_skills(profile.required_skills(), profile.job())
            .expect("profile exists");

        assert!(
            report.is_closed(),
            "expected closed gap for '{}'",
            profile.job()
        );
    }
}

#[rstest]
fn empty_skill_set_reports_the_full_requirement(engine: CareerMatchingEngine) {
    let profiles = engine.catalog().profiles().to_vec();
    for profile in profiles {
        let report = engine
            .missing_skills(&[], profile.job())
            .expect("profile exists");

        assert_eq!(report.missing_skills(), profile.required_skills());
    }
}

#[rstest]
fn unknown_job_is_a_not_found_error(engine: CareerMatchingEngine) {
    let result = engine.missing_skills(&skills(&["Python"]), &job("astronaut"));

    assert_eq!(
        result,
        Err(MatchingError::UnknownJob {
            job: "astronaut".to_owned(),
        })
    );
}

#[rstest]
fn partial_skills_leave_a_partial_gap(engine: CareerMatchingEngine) {
    let report = engine
        .missing_skills(&skills(&["sql", "excel", "TABLEAU"]), &job("Data Analyst"))
        .expect("profile exists");

    let missing: Vec<&str> = report
        .missing_skills()
        .iter()
        .map(AsRef::as_ref)
        .collect();
    assert_eq!(missing, vec!["R", "Statistics", "Communication"]);
}
