//! Filesystem access used by discovery and assembly

use std::io;
use std::path::Path;

/// File access used for single-file discovery and project reading
///
/// Recursive discovery walks the real filesystem; see [`super::Locator`].
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem: Send + Sync {
    /// Read a whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Whether `path` exists
    fn exists(&self, path: &Path) -> bool;
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_os_read_to_string() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".cproject");
        fs::write(&path, "<cproject/>").unwrap();

        assert_eq!(OsFileSystem.read_to_string(&path).unwrap(), "<cproject/>");
        assert!(OsFileSystem.exists(&path));
        assert!(!OsFileSystem.exists(&dir.path().join("nope")));
    }
}
