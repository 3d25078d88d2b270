//! Adapter implementations for the advisor ports.

mod keyword;

pub use keyword::KeywordClassifier;
