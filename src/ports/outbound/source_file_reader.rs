use crate::scan_reporting::domain::SourceFile;
use crate::shared::Result;
use std::path::PathBuf;

/// SourceFileReader port for selecting and reading files to upload
pub trait SourceFileReader {
    /// Expands the given paths into the list of files to upload.
    ///
    /// Plain files are taken as given; directories are walked and filtered
    /// down to files the service can scan.
    fn collect(&self, paths: &[PathBuf]) -> Result<Vec<SourceFile>>;

    /// Reads the raw bytes of a selected file
    fn read(&self, file: &SourceFile) -> Result<Vec<u8>>;
}
