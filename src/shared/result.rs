/// Crate-wide result type; typed failures are [`crate::shared::error::ScanError`]
/// values carried inside the `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
