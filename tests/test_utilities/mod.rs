/// Shared helpers for the integration and end-to-end tests
#[allow(dead_code)]
pub mod mocks;
#[allow(dead_code)]
pub mod stub_server;
#[allow(dead_code)]
pub mod sample_reports;
