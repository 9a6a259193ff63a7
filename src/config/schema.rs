//! Profile and tool option definitions.
//!
//! A profile is a YAML document with one section per tool. Each tool
//! section may disable the tool and carries a free-form `options` map
//! whose keys the tool itself validates.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{AdapterError, Result};

/// A single option value: boolean, string, or list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_yaml::Value")]
pub enum OptionValue {
    Bool(bool),
    Text(String),
    List(Vec<String>),
}

impl OptionValue {
    /// Name of the value's type, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "boolean",
            OptionValue::Text(_) => "string",
            OptionValue::List(_) => "list",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            OptionValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl TryFrom<serde_yaml::Value> for OptionValue {
    type Error = String;

    fn try_from(value: serde_yaml::Value) -> std::result::Result<Self, Self::Error> {
        use serde_yaml::Value;

        match value {
            Value::Bool(b) => Ok(OptionValue::Bool(b)),
            Value::String(s) => Ok(OptionValue::Text(s)),
            Value::Sequence(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    other => Err(format!(
                        "list entries must be strings, found {}",
                        describe(&other)
                    )),
                })
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(OptionValue::List),
            // Unquoted versions like 3.10 would silently become 3.1.
            Value::Number(n) => Err(format!("numeric value {} must be quoted", n)),
            other => Err(format!(
                "expected a boolean, string or list, found {}",
                describe(&other)
            )),
        }
    }
}

fn describe(value: &serde_yaml::Value) -> &'static str {
    use serde_yaml::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(items: Vec<&str>) -> Self {
        OptionValue::List(items.into_iter().map(String::from).collect())
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Text(s) => write!(f, "{}", s),
            OptionValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// Options for a single tool, keyed by option name.
///
/// Keys are kept sorted so iteration (and therefore the first unknown
/// key reported) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ToolOptions(BTreeMap<String, OptionValue>);

impl ToolOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for ToolOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One tool's section of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToolProfile {
    /// Whether the tool should run at all.
    #[serde(default = "default_run")]
    pub run: bool,

    /// Tool-specific options.
    #[serde(default)]
    pub options: ToolOptions,
}

impl Default for ToolProfile {
    fn default() -> Self {
        Self {
            run: default_run(),
            options: ToolOptions::default(),
        }
    }
}

fn default_run() -> bool {
    true
}

/// A loaded profile.
///
/// Sections are kept as raw YAML until a tool asks for its own, so a
/// profile shared with other tools (whose sections have other shapes)
/// still loads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    sections: BTreeMap<String, serde_yaml::Value>,
}

impl Profile {
    /// Get the section for the named tool, or the default when absent.
    ///
    /// # Errors
    ///
    /// Returns `BadToolConfig` if the section exists but is malformed.
    pub fn tool(&self, name: &str) -> Result<ToolProfile> {
        match self.sections.get(name) {
            None | Some(serde_yaml::Value::Null) => Ok(ToolProfile::default()),
            Some(value) => serde_yaml::from_value(value.clone())
                .map_err(|e| AdapterError::bad_config(name, e.to_string())),
        }
    }

    /// Names of all sections present in the profile.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}
