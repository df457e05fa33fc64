use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest file the scanning service will analyse (1 MB).
/// Bigger files found while walking a directory are skipped.
pub const MAX_UPLOAD_FILE_SIZE: u64 = 1_000_000;

/// Rejects symbolic links.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path) -> Result<()> {
    validate_not_symlink(path, "upload")?;

    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read metadata for {}: {}", path.display(), e))?;
    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Returns true when `file_size` fits within `max_size`.
pub fn within_size_limit(file_size: u64, max_size: u64) -> bool {
    file_size <= max_size
}
