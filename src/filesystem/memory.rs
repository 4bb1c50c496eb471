use super::{has_extension, FileSystem};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory filesystem for driving the converter and report generator
/// without touching disk.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    read_only: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, creating its parent directories
    pub fn add_file(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dirs(parent);
        }
        self.files.borrow_mut().insert(path, contents.into());
    }

    pub fn remove_file(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow_mut().remove(path)
    }

    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    /// Makes every later write to `path` fail with `PermissionDenied`
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        self.read_only.borrow_mut().insert(path.into());
    }

    /// Names of all files directly inside `dir`, sorted
    pub fn file_names(&self, dir: &Path) -> Vec<String> {
        self.files
            .borrow()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .collect()
    }

    fn add_dirs(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        self.files
            .borrow()
            .get(path)
            .map(|c| c.len() as u64)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        if self.files.borrow().contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} is a file", path.display()),
            ));
        }
        self.add_dirs(path);
        Ok(())
    }

    fn list_files(&self, dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
        if !self.is_dir(dir) {
            return Err(io::Error::new(io::ErrorKind::NotFound, dir.display().to_string()));
        }
        // BTreeMap keys under one parent are already ordered by file name
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|p| p.parent() == Some(dir) && has_extension(p, extension))
            .cloned()
            .collect())
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if self.read_only.borrow().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", path.display()),
            ));
        }
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.is_dir(parent) => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} does not exist", parent.display()),
                ));
            }
            _ => {}
        }
        self.files.borrow_mut().insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_requires_parent() {
        let fs = MemoryFileSystem::new();
        let out = Path::new("images/a.png");
        assert!(fs.write(out, b"png").is_err());

        fs.create_dir_all(Path::new("images")).unwrap();
        fs.write(out, b"png").unwrap();
        assert!(fs.exists(out));
        assert_eq!(fs.file_size(out).unwrap(), 3);
    }

    #[test]
    fn test_list_files_only_direct_children() {
        let fs = MemoryFileSystem::new();
        fs.add_file("images/b.png", "bb");
        fs.add_file("images/a.png", "a");
        fs.add_file("images/index.html", "<html>");
        fs.add_file("images/sub/c.png", "c");

        let listed = fs.list_files(Path::new("images"), "png").unwrap();
        assert_eq!(
            listed,
            vec![PathBuf::from("images/a.png"), PathBuf::from("images/b.png")]
        );
        assert!(fs.is_dir(Path::new("images/sub")));
    }

    #[test]
    fn test_deny_writes() {
        let fs = MemoryFileSystem::new();
        fs.create_dir_all(Path::new("out")).unwrap();
        fs.deny_writes("out/index.html");
        let err = fs.write(Path::new("out/index.html"), b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
