//! Project file discovery
//!
//! Finds Eclipse CDT `.cproject` files below a root directory. A single
//! unreadable entry never stops the walk: it is reported and skipped.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::DiscoveryMode;
use crate::error::{ProviderError, Warning};
use crate::notify::Notifier;

use super::fs::FileSystem;

/// File name of an Eclipse CDT project descriptor
pub const PROJECT_FILE: &str = ".cproject";

/// Locates project descriptor files
pub struct Locator<'a> {
    fs: &'a dyn FileSystem,
    notifier: &'a dyn Notifier,
}

impl<'a> Locator<'a> {
    pub fn new(fs: &'a dyn FileSystem, notifier: &'a dyn Notifier) -> Self {
        Self { fs, notifier }
    }

    /// Find project files below `root`
    ///
    /// Results follow directory listing order, which is not sorted.
    pub fn locate(&self, root: &Path, mode: DiscoveryMode) -> Vec<PathBuf> {
        let found = match mode {
            DiscoveryMode::Single => {
                let candidate = root.join(PROJECT_FILE);
                if self.fs.exists(&candidate) {
                    vec![candidate]
                } else {
                    Vec::new()
                }
            }
            DiscoveryMode::Recursive => self.walk(root),
        };

        tracing::debug!(
            "Found {} project file(s) under {}",
            found.len(),
            root.display()
        );
        found
    }

    fn walk(&self, root: &Path) -> Vec<PathBuf> {
        let mut found = Vec::new();

        // Symlinked directories are followed; walkdir stops at loops
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    self.report_walk_error(root, err);
                    continue;
                }
            };

            if entry.file_type().is_file() && entry.file_name() == PROJECT_FILE {
                tracing::debug!("Found project file: {}", entry.path().display());
                found.push(entry.into_path());
            }
        }

        found
    }

    fn report_walk_error(&self, root: &Path, err: walkdir::Error) {
        if let Some(ancestor) = err.loop_ancestor() {
            tracing::debug!(
                "Symlink loop back to {}, skipping",
                ancestor.display()
            );
            return;
        }

        let path = err.path().unwrap_or(root).to_path_buf();
        let message = err.to_string();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));

        let err = ProviderError::Traversal { path, source };
        self.notifier.warn(Warning::from(&err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::CollectingNotifier;
    use crate::project::fs::{MockFileSystem, OsFileSystem};
    use std::fs;
    use tempfile::TempDir;

    fn touch_project(dir: &Path) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(PROJECT_FILE);
        fs::write(&path, "<cproject/>").unwrap();
        path
    }

    fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths.sort();
        paths
    }

    #[test]
    fn test_locate_finds_files_at_depth_0_1_and_3() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let expected = sorted(vec![
            touch_project(root),
            touch_project(&root.join("app")),
            touch_project(&root.join("libs/core/driver")),
        ]);
        fs::write(root.join("app/Makefile"), "all:").unwrap();
        fs::create_dir_all(root.join("docs")).unwrap();

        let notifier = CollectingNotifier::new();
        let locator = Locator::new(&OsFileSystem, &notifier);
        let found = locator.locate(root, DiscoveryMode::Recursive);

        assert_eq!(sorted(found), expected);
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_locate_ignores_similar_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".cproject.bak"), "").unwrap();
        fs::write(dir.path().join("cproject"), "").unwrap();
        fs::write(dir.path().join(".project"), "").unwrap();

        let notifier = CollectingNotifier::new();
        let found = Locator::new(&OsFileSystem, &notifier).locate(dir.path(), DiscoveryMode::Recursive);

        assert!(found.is_empty());
    }

    #[test]
    fn test_locate_single_mode_only_checks_root() {
        let dir = TempDir::new().unwrap();
        let top = touch_project(dir.path());
        touch_project(&dir.path().join("nested"));

        let notifier = CollectingNotifier::new();
        let found = Locator::new(&OsFileSystem, &notifier).locate(dir.path(), DiscoveryMode::Single);

        assert_eq!(found, vec![top]);
    }

    #[test]
    fn test_locate_single_mode_empty() {
        let dir = TempDir::new().unwrap();
        touch_project(&dir.path().join("nested"));

        let notifier = CollectingNotifier::new();
        let found = Locator::new(&OsFileSystem, &notifier).locate(dir.path(), DiscoveryMode::Single);

        assert!(found.is_empty());
    }

    #[test]
    fn test_locate_missing_root_is_reported() {
        let notifier = CollectingNotifier::new();
        let found = Locator::new(&OsFileSystem, &notifier)
            .locate(Path::new("/definitely/not/here"), DiscoveryMode::Recursive);

        assert!(found.is_empty());
        assert_eq!(notifier.len(), 1);
        assert_eq!(notifier.warnings()[0].error_type, "traversal_error");
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_skips_broken_symlink_and_continues() {
        let dir = TempDir::new().unwrap();
        let expected = touch_project(&dir.path().join("ok"));
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();

        let notifier = CollectingNotifier::new();
        let found = Locator::new(&OsFileSystem, &notifier).locate(dir.path(), DiscoveryMode::Recursive);

        assert_eq!(found, vec![expected]);
        assert_eq!(notifier.len(), 1);
        assert!(notifier.warnings()[0].title.contains("dangling"));
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_survives_symlink_cycle() {
        let dir = TempDir::new().unwrap();
        let expected = touch_project(&dir.path().join("proj"));
        std::os::unix::fs::symlink(dir.path(), dir.path().join("proj/loop")).unwrap();

        let notifier = CollectingNotifier::new();
        let found = Locator::new(&OsFileSystem, &notifier).locate(dir.path(), DiscoveryMode::Recursive);

        assert_eq!(found, vec![expected]);
        assert!(notifier.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_unreadable_directory_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let expected = touch_project(&dir.path().join("app"));
        let locked = dir.path().join("locked");
        touch_project(&locked.join("hidden"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still list the directory
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let notifier = CollectingNotifier::new();
        let found = Locator::new(&OsFileSystem, &notifier).locate(dir.path(), DiscoveryMode::Recursive);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(found, vec![expected]);
        let warnings = notifier.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].error_type, "traversal_error");
        assert!(warnings[0].title.contains(&locked.display().to_string()));
    }

    #[test]
    fn test_locate_single_mode_asks_filesystem() {
        let mut fs = MockFileSystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("/ws/.cproject"))
            .times(1)
            .return_const(true);

        let notifier = CollectingNotifier::new();
        let found = Locator::new(&fs, &notifier).locate(Path::new("/ws"), DiscoveryMode::Single);

        assert_eq!(found, vec![PathBuf::from("/ws/.cproject")]);
        assert!(notifier.is_empty());
    }
}
