use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where rendered output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// Maps the `--output` option: no path means stdout
    pub fn from_output(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => PresenterType::File(path),
            None => PresenterType::Stdout,
        }
    }

    pub fn is_terminal_candidate(&self) -> bool {
        matches!(self, PresenterType::Stdout)
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use sentinel_scan::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
