//! Classify → dispatch → render round trips with the keyword classifier.

use super::helpers::advisor;
use eyre::Result;
use rstest::rstest;
use waypost::advisor::AdvisorService;
use waypost::advisor::adapters::KeywordClassifier;
use waypost::advisor::domain::AdviceOutcome;

type Advisor = AdvisorService<KeywordClassifier>;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn gap_question_reports_the_full_requirement(advisor: Result<Advisor>) -> Result<()> {
    let reply = advisor?
        .advise("I want to become a Data Scientist. What skills do I need?")
        .await?;

    let AdviceOutcome::SkillGap(report) = reply.outcome() else {
        panic!("expected skill-gap outcome, got {:?}", reply.outcome());
    };
    assert_eq!(report.missing_skills().len(), 6);
    assert!(reply.text().contains("Python"));
    assert!(reply.text().contains("Communication"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn job_question_lists_overlapping_openings(advisor: Result<Advisor>) -> Result<()> {
    let reply = advisor?
        .advise("I have skills in Python and SQL. What jobs can I apply for?")
        .await?;

    let AdviceOutcome::JobMatches { matches } = reply.outcome() else {
        panic!("expected job matches, got {:?}", reply.outcome());
    };
    assert_eq!(matches.len(), 4);
    assert!(reply.text().contains("Senior Data Scientist at Future Corp"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn located_job_question_filters_to_new_york(advisor: Result<Advisor>) -> Result<()> {
    let reply = advisor?
        .advise("I am looking for jobs in New York that require Python and SQL skills.")
        .await?;

    let AdviceOutcome::JobMatches { matches } = reply.outcome() else {
        panic!("expected job matches, got {:?}", reply.outcome());
    };
    assert_eq!(matches.len(), 1);
    let senior = matches.first().expect("one match");
    assert_eq!(senior.listing().location(), "New York, NY");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn course_question_recommends_from_the_catalog(advisor: Result<Advisor>) -> Result<()> {
    let reply = advisor?
        .advise("I want to improve my skills in Machine Learning. What courses do you recommend?")
        .await?;

    let AdviceOutcome::Courses { recommendations } = reply.outcome() else {
        panic!("expected courses, got {:?}", reply.outcome());
    };
    assert!(recommendations.get("Machine Learning").is_some());
    assert!(reply.text().contains("Machine Learning by Andrew Ng"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn off_topic_question_gets_the_apology(advisor: Result<Advisor>) -> Result<()> {
    let reply = advisor?.advise("Book me a table for two tonight.").await?;

    assert_eq!(reply.outcome(), &AdviceOutcome::Unhandled);
    assert_eq!(reply.text(), "Sorry, I can't assist with that.");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn same_question_twice_gets_the_same_reply(advisor: Result<Advisor>) -> Result<()> {
    let service = advisor?;
    let question = "I have skills in Python and SQL. What jobs can I apply for?";

    let first = service.advise(question).await?;
    let second = service.advise(question).await?;

    assert_eq!(first.text(), second.text());
    assert_eq!(first.outcome(), second.outcome());
    Ok(())
}
