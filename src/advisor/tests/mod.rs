//! Unit tests for the advisor context.
