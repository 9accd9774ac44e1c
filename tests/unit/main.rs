//! Unit test suite entry point.

mod keyword_tests;
mod taxonomy_tests;
