use sentinel_scan::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// Mock SourceFileReader serving in-memory files
#[derive(Default)]
pub struct MockSourceFileReader {
    pub files: Vec<(String, Vec<u8>)>,
    pub unreadable: Option<String>,
}

impl MockSourceFileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, upload_name: &str, content: &str) -> Self {
        self.files
            .push((upload_name.to_string(), content.as_bytes().to_vec()));
        self
    }

    pub fn with_unreadable(mut self, upload_name: &str) -> Self {
        self.unreadable = Some(upload_name.to_string());
        self
    }

    fn contents(&self) -> HashMap<&str, &Vec<u8>> {
        self.files
            .iter()
            .map(|(name, content)| (name.as_str(), content))
            .collect()
    }
}

impl SourceFileReader for MockSourceFileReader {
    fn collect(&self, _paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
        Ok(self
            .files
            .iter()
            .map(|(name, _)| SourceFile::new(name.clone(), PathBuf::from("/mock").join(name)))
            .collect())
    }

    fn read(&self, file: &SourceFile) -> Result<Vec<u8>> {
        if self.unreadable.as_deref() == Some(file.upload_name.as_str()) {
            anyhow::bail!("Mock read failure for {}", file.upload_name);
        }
        self.contents()
            .get(file.upload_name.as_str())
            .map(|content| content.to_vec())
            .ok_or_else(|| anyhow::anyhow!("Unknown file {}", file.upload_name))
    }
}
