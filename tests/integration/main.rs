//! Integration test entry point.
//!
//! Single binary for all integration suites so the mocks compile once.

mod mock_hw;

mod acquisition_tests;
