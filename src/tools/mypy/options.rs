//! mypy option allow-list and flag translation.

use crate::config::{OptionValue, ToolOptions};
use crate::error::{AdapterError, Result};

use super::TOOL_NAME;

/// Where the meaning of each mypy flag is documented.
pub const MYPY_DOCS_URL: &str = "https://mypy.readthedocs.io/en/stable/command_line.html";

/// Options whose value is a list of error-category suffixes.
///
/// Each entry `x` of option `allow` becomes `--allow-x`.
pub const LIST_OPTIONS: &[&str] = &["allow", "check", "disallow", "no-check", "no-warn", "warn"];

/// Shape of an option's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Boolean switch; emits a flag when true.
    Flag,
    /// String value; emits `--name=value`.
    Value,
    /// List of suffixes; emits one `--name-entry` per entry.
    List,
}

impl OptionKind {
    /// Name of the value type this kind expects.
    pub fn expected(self) -> &'static str {
        match self {
            OptionKind::Flag => "boolean",
            OptionKind::Value => "string",
            OptionKind::List => "list",
        }
    }
}

/// A recognized option.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
    pub help: &'static str,
}

/// Every option mypy accepts from a profile.
pub const OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        name: "allow",
        kind: OptionKind::List,
        help: "Emit --allow-<entry> for each entry",
    },
    OptionSpec {
        name: "check",
        kind: OptionKind::List,
        help: "Emit --check-<entry> for each entry",
    },
    OptionSpec {
        name: "disallow",
        kind: OptionKind::List,
        help: "Emit --disallow-<entry> for each entry",
    },
    OptionSpec {
        name: "no-check",
        kind: OptionKind::List,
        help: "Emit --no-check-<entry> for each entry",
    },
    OptionSpec {
        name: "no-warn",
        kind: OptionKind::List,
        help: "Emit --no-warn-<entry> for each entry",
    },
    OptionSpec {
        name: "warn",
        kind: OptionKind::List,
        help: "Emit --warn-<entry> for each entry",
    },
    OptionSpec {
        name: "strict",
        kind: OptionKind::Flag,
        help: "Enable all optional strictness checks",
    },
    OptionSpec {
        name: "follow-imports",
        kind: OptionKind::Value,
        help: "How to treat imports: normal (default), silent, skip, error",
    },
    OptionSpec {
        name: "ignore-missing-imports",
        kind: OptionKind::Flag,
        help: "Silence errors about imports that cannot be resolved",
    },
    OptionSpec {
        name: "implicit-optional",
        kind: OptionKind::Flag,
        help: "Treat a None default as making the argument Optional",
    },
    OptionSpec {
        name: "strict-optional",
        kind: OptionKind::Flag,
        help: "Enable strict None checking",
    },
    OptionSpec {
        name: "platform",
        kind: OptionKind::Value,
        help: "Check as if running on this platform (e.g. linux, win32)",
    },
    OptionSpec {
        name: "python-2-mode",
        kind: OptionKind::Flag,
        help: "Check Python 2 code (--py2)",
    },
    OptionSpec {
        name: "python-version",
        kind: OptionKind::Value,
        help: "Check as if running under this Python version (e.g. \"3.11\")",
    },
    OptionSpec {
        name: "namespace-packages",
        kind: OptionKind::Flag,
        help: "Support namespace packages without __init__.py",
    },
];

/// Default for `follow-imports`.
pub const DEFAULT_FOLLOW_IMPORTS: &str = "normal";

/// Look up an option by name.
pub fn option_spec(name: &str) -> Option<&'static OptionSpec> {
    OPTIONS.iter().find(|spec| spec.name == name)
}

/// Check every key against the allow-list and every value against its kind.
///
/// # Errors
///
/// Returns `BadToolConfig` naming the first offending key.
pub fn validate(options: &ToolOptions) -> Result<()> {
    for key in options.keys() {
        let Some(spec) = option_spec(key) else {
            return Err(AdapterError::bad_config(
                TOOL_NAME,
                format!(
                    "Option {} is not valid. See the list of possible options \
                     (`mypy-adapter options`) or {}",
                    key, MYPY_DOCS_URL
                ),
            ));
        };

        let value = options.get(key).map(OptionValue::kind);
        if value != Some(spec.kind.expected()) {
            return Err(AdapterError::bad_config(
                TOOL_NAME,
                format!(
                    "Option {} expects a {} value, found {}",
                    key,
                    spec.kind.expected(),
                    value.unwrap_or("nothing")
                ),
            ));
        }
    }
    Ok(())
}

/// Translate validated options into mypy flags.
///
/// Flags come out in a fixed order regardless of how the options were
/// written, so the same options always produce the same command line.
pub fn build_flags(options: &ToolOptions) -> Result<Vec<String>> {
    validate(options)?;

    let flag = |key: &str| options.get(key).and_then(OptionValue::as_bool) == Some(true);
    let value = |key: &str| options.get(key).and_then(OptionValue::as_text);

    let mut flags = Vec::new();

    flags.push(format!(
        "--follow-imports={}",
        value("follow-imports").unwrap_or(DEFAULT_FOLLOW_IMPORTS)
    ));

    if flag("strict") {
        flags.push("--strict".to_string());
    }
    if flag("ignore-missing-imports") {
        flags.push("--ignore-missing-imports".to_string());
    }
    if flag("implicit-optional") {
        flags.push("--implicit-optional".to_string());
    }
    if let Some(platform) = value("platform").filter(|v| !v.is_empty()) {
        flags.push(format!("--platform={}", platform));
    }
    if flag("python-2-mode") {
        flags.push("--py2".to_string());
    }
    if let Some(version) = value("python-version").filter(|v| !v.is_empty()) {
        flags.push(format!("--python-version={}", version));
    }
    if flag("strict-optional") {
        flags.push("--strict-optional".to_string());
    }
    if flag("namespace-packages") {
        flags.push("--namespace-packages".to_string());
    }

    for category in LIST_OPTIONS {
        let entries = options.get(category).and_then(OptionValue::as_list);
        for entry in entries.unwrap_or_default() {
            flags.push(format!("--{}-{}", category, entry));
        }
    }

    Ok(flags)
}
