//! Property test suite entry point.

mod score_tests;
