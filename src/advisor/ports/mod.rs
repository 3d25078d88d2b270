//! Port contracts for the advisor context.

mod classifier;

pub use classifier::{ClassifierError, ClassifierResult, IntentClassifier};
