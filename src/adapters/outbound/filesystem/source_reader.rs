use crate::ports::outbound::SourceFileReader;
use crate::scan_reporting::domain::SourceFile;
use crate::shared::error::ScanError;
use crate::shared::security::{
    validate_not_symlink, validate_regular_file, within_size_limit, MAX_UPLOAD_FILE_SIZE,
};
use crate::shared::Result;
use std::collections::{HashMap, HashSet};
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Extensions the scanning service knows how to analyse
const SCANNABLE_EXTENSIONS: &[&str] = &[
    "py", "js", "ts", "jsx", "tsx", "html", "htm", "php", "rb", "java", "go", "rs", "c", "cpp",
    "cs", "yml", "yaml", "json", "xml", "env", "cfg", "ini", "toml", "sh", "bash", "sql",
];

/// Directory names never descended into
const SKIPPED_DIRECTORIES: &[&str] = &["node_modules", "__pycache__", "venv"];

/// FileSystemSourceReader adapter for picking upload files from disk
///
/// Explicitly named files are uploaded whatever their extension. Directories
/// are walked without following symlinks and reduced to scannable files,
/// skipping hidden entries, vendored directories and files over the size limit.
pub struct FileSystemSourceReader {
    max_file_size: u64,
}

impl FileSystemSourceReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_UPLOAD_FILE_SIZE,
        }
    }

    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    fn is_scannable(path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .map(|ext| SCANNABLE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }

    fn is_skipped(entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || SKIPPED_DIRECTORIES.contains(&name.as_ref())
    }

    /// Upload name for a file found under `root`: relative path with `/`
    fn relative_upload_name(root: &Path, path: &Path) -> String {
        let relative = path.strip_prefix(root).unwrap_or(path);
        relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Last component of a walked root, used to keep names from several
    /// roots apart. `.` and `..` are resolved first.
    fn root_label(root: &Path) -> Option<String> {
        let resolved = root.canonicalize().ok()?;
        resolved
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    fn explicit_file(path: &Path) -> Result<SourceFile> {
        validate_regular_file(path).map_err(|e| ScanError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(SourceFile::new(name, path.to_path_buf()))
    }

    fn walk_directory(&self, root: &Path, label: Option<&str>) -> Vec<SourceFile> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !Self::is_skipped(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || !Self::is_scannable(entry.path()) {
                continue;
            }

            let size = match entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(e) => {
                    log::warn!("skipping {}: {}", entry.path().display(), e);
                    continue;
                }
            };
            if !within_size_limit(size, self.max_file_size) {
                log::info!(
                    "skipping {} ({} bytes exceeds {} byte limit)",
                    entry.path().display(),
                    size,
                    self.max_file_size
                );
                continue;
            }

            let relative = Self::relative_upload_name(root, entry.path());
            let upload_name = match label {
                Some(label) => format!("{}/{}", label, relative),
                None => relative,
            };
            files.push(SourceFile::new(upload_name, entry.path().to_path_buf()));
        }

        files
    }
}

impl Default for FileSystemSourceReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceFileReader for FileSystemSourceReader {
    fn collect(&self, paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut names: HashMap<String, PathBuf> = HashMap::new();
        let mut selected = Vec::new();
        // With several roots, walked names start with their root's name
        let label_roots = paths.len() > 1;

        for path in paths {
            validate_not_symlink(path, "upload").map_err(|e| ScanError::FileReadError {
                path: path.clone(),
                details: e.to_string(),
            })?;

            let found = if path.is_dir() {
                let label = if label_roots {
                    Self::root_label(path)
                } else {
                    None
                };
                self.walk_directory(path, label.as_deref())
            } else {
                vec![Self::explicit_file(path)?]
            };

            for file in found {
                if !seen.insert(file.path.clone()) {
                    continue;
                }
                // The service stores parts by file name; equal names overwrite each other
                if let Some(first) = names.get(&file.upload_name) {
                    return Err(ScanError::DuplicateUploadName {
                        name: file.upload_name.clone(),
                        first: first.clone(),
                        second: file.path.clone(),
                    }
                    .into());
                }
                names.insert(file.upload_name.clone(), file.path.clone());
                selected.push(file);
            }
        }

        Ok(selected)
    }

    fn read(&self, file: &SourceFile) -> Result<Vec<u8>> {
        fs::read(&file.path).map_err(|e| {
            ScanError::FileReadError {
                path: file.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
