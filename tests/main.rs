/*!
 * Main test entry point for camlex test suite
 */

// Import common test utilities
pub mod common;

// Import integration tests
mod integration {
    // End-to-end database build tests
    pub mod build_pipeline_tests;
}
