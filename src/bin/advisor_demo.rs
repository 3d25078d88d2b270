//! Runs the canonical sample queries through the career advisor.
//!
//! Builds the sample catalog, wires the keyword classifier to the matching
//! engine, and prints the advisor's reply for each query:
//!
//! ```text
//! advisor_demo
//! ```

use std::sync::Arc;

use waypost::advisor::adapters::KeywordClassifier;
use waypost::advisor::{AdvisorService, ReplyRenderer};
use waypost::catalog::CareerCatalog;
use waypost::matching::CareerMatchingEngine;

const SAMPLE_QUERIES: &[&str] = &[
    "I want to become a Data Scientist. What skills do I need?",
    "I have skills in Python and SQL. What jobs can I apply for?",
    "I am looking for jobs in New York that require Python and SQL skills.",
    "I want to improve my skills in Machine Learning. What courses do you recommend?",
];

#[expect(
    clippy::print_stdout,
    reason = "demo binary reports replies on stdout"
)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Arc::new(CareerCatalog::sample()?);
    let classifier = Arc::new(KeywordClassifier::new(Arc::clone(&catalog)));
    let engine = CareerMatchingEngine::new(catalog);
    let renderer = Arc::new(ReplyRenderer::new()?);
    let advisor = AdvisorService::new(classifier, engine, renderer);

    for query in SAMPLE_QUERIES {
        let reply = advisor.advise(query).await?;
        println!("{}", "=".repeat(50));
        println!("QUERY: {query}");
        println!("{}", reply.text());
    }

    Ok(())
}
