/// Scan reporting domain: report data as produced by the scanning service
/// and the client-side rules for presenting it.
pub mod domain;
pub mod services;
