use std::path::PathBuf;

/// UploadRequest - files and directories selected for an upload scan
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub paths: Vec<PathBuf>,
}

impl UploadRequest {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

/// RepositoryScanRequest - a repository URL as typed by the user
#[derive(Debug, Clone)]
pub struct RepositoryScanRequest {
    pub repo_url: String,
}

impl RepositoryScanRequest {
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
        }
    }
}
