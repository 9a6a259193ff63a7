//! Profile file discovery and loading.

use crate::config::schema::Profile;
use crate::error::{AdapterError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File names searched for in the project root, in priority order.
pub const PROFILE_FILE_NAMES: &[&str] = &[".mypy-adapter.yml", ".mypy-adapter.yaml"];

/// Find the profile in the project root, if any.
pub fn discover_profile(project_root: &Path) -> Option<PathBuf> {
    PROFILE_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Load a single profile file.
///
/// # Errors
///
/// Returns `ProfileNotFound` if the file doesn't exist.
/// Returns `ProfileParseError` if the YAML is invalid.
pub fn load_profile_file(path: &Path) -> Result<Profile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AdapterError::ProfileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AdapterError::Io(e)
        }
    })?;

    let profile = parse_profile(&content, path)?;
    tracing::debug!(
        "Profile {} has sections: [{}]",
        path.display(),
        profile.section_names().collect::<Vec<_>>().join(", ")
    );
    Ok(profile)
}

/// Parse YAML content into a [`Profile`].
///
/// An empty document is an empty profile.
pub fn parse_profile(content: &str, source_path: &Path) -> Result<Profile> {
    if content.trim().is_empty() {
        return Ok(Profile::default());
    }

    serde_yaml::from_str(content).map_err(|e| AdapterError::ProfileParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the profile with optional path override.
///
/// If `profile_override` is provided it must exist. Otherwise the project
/// root is searched, and no profile at all means an empty one.
pub fn load_profile(project_root: &Path, profile_override: Option<&Path>) -> Result<Profile> {
    if let Some(path) = profile_override {
        return load_profile_file(path);
    }

    match discover_profile(project_root) {
        Some(path) => {
            tracing::debug!("Loading profile from {}", path.display());
            load_profile_file(&path)
        }
        None => {
            tracing::debug!("No profile in {}, using defaults", project_root.display());
            Ok(Profile::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OptionValue;
    use tempfile::TempDir;

    #[test]
    fn discover_finds_yml_first() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".mypy-adapter.yml"), "").unwrap();
        fs::write(temp.path().join(".mypy-adapter.yaml"), "").unwrap();

        let found = discover_profile(temp.path()).unwrap();
        assert!(found.ends_with(".mypy-adapter.yml"));
    }

    #[test]
    fn discover_finds_yaml_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".mypy-adapter.yaml"), "").unwrap();

        assert!(discover_profile(temp.path()).is_some());
    }

    #[test]
    fn discover_returns_none_when_missing() {
        let temp = TempDir::new().unwrap();
        assert!(discover_profile(temp.path()).is_none());
    }

    #[test]
    fn load_profile_without_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let profile = load_profile(temp.path(), None).unwrap();

        assert_eq!(profile.section_names().count(), 0);
    }

    #[test]
    fn load_profile_reads_discovered_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".mypy-adapter.yml"),
            "mypy:\n  options:\n    strict: true\n",
        )
        .unwrap();

        let profile = load_profile(temp.path(), None).unwrap();
        let mypy = profile.tool("mypy").unwrap();
        assert_eq!(mypy.options.get("strict"), Some(&OptionValue::Bool(true)));
    }

    #[test]
    fn load_profile_override_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");

        let err = load_profile(temp.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, AdapterError::ProfileNotFound { .. }));
    }

    #[test]
    fn load_profile_override_wins_over_discovery() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".mypy-adapter.yml"), "mypy:\n  run: true\n").unwrap();
        let custom = temp.path().join("custom.yml");
        fs::write(&custom, "mypy:\n  run: false\n").unwrap();

        let profile = load_profile(temp.path(), Some(&custom)).unwrap();
        assert!(!profile.tool("mypy").unwrap().run);
    }

    #[test]
    fn parse_invalid_yaml_reports_path() {
        let err = parse_profile("mypy: [unclosed", Path::new("bad.yml")).unwrap_err();
        match err {
            AdapterError::ProfileParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("bad.yml"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_empty_document_is_empty_profile() {
        let profile = parse_profile("\n", Path::new("empty.yml")).unwrap();
        assert_eq!(profile.section_names().count(), 0);
    }
}
