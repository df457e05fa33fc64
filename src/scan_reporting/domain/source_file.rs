use std::path::PathBuf;

/// A local file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Name sent as the multipart filename; relative paths use `/`
    pub upload_name: String,
    /// Location on disk
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(upload_name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            upload_name: upload_name.into(),
            path,
        }
    }
}
