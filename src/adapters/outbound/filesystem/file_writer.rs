use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ScanError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing rendered reports to a file
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        ScanError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Rejects a missing parent directory and an existing symlink target
    fn validate_target(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(self.write_error(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        if fs::symlink_metadata(&self.output_path).is_ok() {
            validate_not_symlink(&self.output_path, "write")
                .map_err(|e| self.write_error(e.to_string()))?;
        }

        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_target()?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        eprintln!("✅ Output written to {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing rendered reports to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
