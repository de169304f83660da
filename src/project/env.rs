//! Environment mapping for build tasks
//!
//! Built from the configured `NAME=value` entries and handed to each task
//! descriptor. The process environment is never touched.

use std::collections::BTreeMap;

use serde::Serialize;

/// Variables passed to a build task
///
/// A value of `None` records a configured entry that had no `=`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Environment(BTreeMap<String, Option<String>>);

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `NAME=value` entries; later duplicates win
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut env = Self::new();
        for entry in entries {
            let entry = entry.as_ref();
            match entry.split_once('=') {
                Some((name, value)) => env.set(name.trim(), Some(value.trim().to_string())),
                None => {
                    tracing::debug!("Environment entry '{}' has no value", entry);
                    env.set(entry.trim(), None)
                }
            }
        }
        env
    }

    pub fn set(&mut self, name: impl Into<String>, value: Option<String>) {
        self.0.insert(name.into(), value);
    }

    /// Value for `name`; `None` when unset or set without a value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|v| v.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_duplicate_wins() {
        let env = Environment::from_entries(["A=1", "B=2", "A=3"]);

        assert_eq!(env.len(), 2);
        assert_eq!(env.get("A"), Some("3"));
        assert_eq!(env.get("B"), Some("2"));
    }

    #[test]
    fn test_splits_on_first_equals_only() {
        let env = Environment::from_entries(["CFLAGS=-DLEVEL=2 -O2"]);
        assert_eq!(env.get("CFLAGS"), Some("-DLEVEL=2 -O2"));
    }

    #[test]
    fn test_trims_name_and_value() {
        let env = Environment::from_entries(["  CC = gcc  "]);
        assert_eq!(env.get("CC"), Some("gcc"));
    }

    #[test]
    fn test_entry_without_equals_keeps_name() {
        let env = Environment::from_entries(["VERBOSE"]);

        assert!(env.contains("VERBOSE"));
        assert_eq!(env.get("VERBOSE"), None);
    }

    #[test]
    fn test_empty_value() {
        let env = Environment::from_entries(["EMPTY="]);
        assert_eq!(env.get("EMPTY"), Some(""));
    }

    #[test]
    fn test_arbitrary_names_accepted() {
        let env = Environment::from_entries(["my var!=x"]);
        assert_eq!(env.get("my var!"), Some("x"));
    }

    #[test]
    fn test_serializes_as_object() {
        let env = Environment::from_entries(["B=2", "A=1", "FLAG"]);

        let json = serde_json::to_string(&env).unwrap();
        assert_eq!(json, r#"{"A":"1","B":"2","FLAG":null}"#);
    }
}
