//! Crate-level tests for the ID generator


mod edge_case_tests;
mod extraction_tests;
