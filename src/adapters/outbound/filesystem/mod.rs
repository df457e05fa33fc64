/// Filesystem adapters for file I/O operations
mod file_writer;
mod source_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use source_reader::FileSystemSourceReader;
