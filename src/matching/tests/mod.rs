//! Unit tests for the matching context.

mod engine_tests;
