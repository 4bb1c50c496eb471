//! Filesystem access used by the converter and report generator

pub mod local;
pub mod memory;

pub use local::LocalFileSystem;
pub use memory::MemoryFileSystem;

use std::io;
use std::path::{Path, PathBuf};

pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn file_size(&self, path: &Path) -> io::Result<u64>;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Files directly inside `dir` whose extension equals `extension`
    /// (case-insensitive), sorted by file name.
    fn list_files(&self, dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>>;

    /// Creates or truncates `path`
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

pub(crate) fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}
