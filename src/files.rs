//! Python module collection.
//!
//! Turns the paths given on the command line into the set of Python
//! modules a tool should check.

use crate::error::{AdapterError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &["__pycache__", "node_modules", "site-packages", "venv"];

/// Extensions treated as Python modules.
const PYTHON_EXTENSIONS: &[&str] = &["py", "pyi"];

/// The set of files handed to a tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundFiles {
    python_modules: BTreeSet<PathBuf>,
}

impl FoundFiles {
    /// Create an empty file set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect Python modules from files and directories.
    ///
    /// Files are taken as given, whatever their extension. Directories are
    /// walked recursively, skipping hidden and well-known non-source
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns `PathNotFound` if a path does not exist, or `Io` if a
    /// directory can't be read.
    pub fn collect<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut found = Self::new();

        for path in paths {
            let path = path.as_ref();
            let metadata = fs::metadata(path).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    AdapterError::PathNotFound {
                        path: path.to_path_buf(),
                    }
                } else {
                    AdapterError::Io(e)
                }
            })?;
            if metadata.is_dir() {
                found.walk(path)?;
            } else {
                found.add(path);
            }
        }

        tracing::debug!("Collected {} python modules", found.len());
        Ok(found)
    }

    /// Rewrite modules under `root` as paths relative to it.
    ///
    /// Modules outside `root` are kept as they are.
    pub fn relative_to(self, root: &Path) -> Self {
        self.python_modules
            .into_iter()
            .map(|path| match path.strip_prefix(root) {
                Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
                _ => path,
            })
            .collect()
    }

    /// Add a single module.
    pub fn add(&mut self, path: impl Into<PathBuf>) {
        self.python_modules.insert(path.into());
    }

    /// Python modules in sorted order.
    pub fn python_modules(&self) -> impl Iterator<Item = &Path> {
        self.python_modules.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.python_modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.python_modules.is_empty()
    }

    fn walk(&mut self, dir: &Path) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let file_type = entry.file_type()?;

            if file_type.is_dir() {
                if !is_skipped_dir(&path) {
                    self.walk(&path)?;
                }
            } else if file_type.is_file() && is_python_module(&path) {
                self.add(path);
            }
        }
        Ok(())
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for FoundFiles {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            python_modules: iter.into_iter().map(Into::into).collect(),
        }
    }
}

fn is_skipped_dir(path: &Path) -> bool {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.starts_with('.') || SKIPPED_DIRS.contains(&name),
        None => false,
    }
}

fn is_python_module(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PYTHON_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn collects_python_files_recursively() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "pkg/__init__.py");
        touch(temp.path(), "pkg/sub/mod.py");
        touch(temp.path(), "pkg/stubs.pyi");
        touch(temp.path(), "README.md");

        let found = FoundFiles::collect(&[temp.path()]).unwrap();

        assert_eq!(found.len(), 3);
        assert!(found
            .python_modules()
            .all(|p| p.extension().unwrap() != "md"));
    }

    #[test]
    fn skips_hidden_and_cache_dirs() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "app.py");
        touch(temp.path(), ".venv/lib/site.py");
        touch(temp.path(), "__pycache__/app.py");
        touch(temp.path(), "venv/lib/x.py");

        let found = FoundFiles::collect(&[temp.path()]).unwrap();

        let modules: Vec<_> = found.python_modules().collect();
        assert_eq!(modules, vec![temp.path().join("app.py").as_path()]);
    }

    #[test]
    fn explicit_files_are_kept_as_given() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "script");

        let found = FoundFiles::collect(&[temp.path().join("script")]).unwrap();

        assert_eq!(found.len(), 1);
    }

    #[test]
    fn modules_are_sorted_and_deduplicated() {
        let found: FoundFiles = ["b.py", "a.py", "b.py"].into_iter().collect();

        let modules: Vec<_> = found.python_modules().collect();
        assert_eq!(modules, vec![Path::new("a.py"), Path::new("b.py")]);
    }

    #[test]
    fn relative_to_strips_root() {
        let found: FoundFiles = ["/proj/pkg/a.py", "/elsewhere/b.py"].into_iter().collect();

        let relative = found.relative_to(Path::new("/proj"));

        let modules: Vec<_> = relative.python_modules().collect();
        assert_eq!(
            modules,
            vec![Path::new("/elsewhere/b.py"), Path::new("pkg/a.py")]
        );
    }

    #[test]
    fn missing_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.py");

        let err = FoundFiles::collect(&[&missing]).unwrap_err();

        assert!(matches!(&err, AdapterError::PathNotFound { path } if path == &missing));
        assert!(err.to_string().contains("missing.py"));
    }
}
