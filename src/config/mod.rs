//! Profile loading and tool options.
//!
//! This module handles:
//! - Option values and per-tool option maps in [`schema`]
//! - Profile discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use mypy_adapter::config::{load_profile, OptionValue};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(".mypy-adapter.yml"),
//!     "mypy:\n  options:\n    strict: true\n",
//! )
//! .unwrap();
//!
//! let profile = load_profile(temp.path(), None).unwrap();
//! let mypy = profile.tool("mypy").unwrap();
//! assert_eq!(mypy.options.get("strict"), Some(&OptionValue::Bool(true)));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    discover_profile, load_profile, load_profile_file, parse_profile, PROFILE_FILE_NAMES,
};
pub use schema::{OptionValue, Profile, ToolOptions, ToolProfile};
