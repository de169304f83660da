//! Diagnostic patterns attached to every build task
//!
//! The host runs these against build output to find errors and warnings.
//! Named groups follow the usual `file`/`line`/`col`/`message` convention.

use once_cell::sync::Lazy;
use regex::Regex;

/// `main.c:12:5: error: expected ';'` and `fatal error:` lines
pub const GCC_ERROR: &str =
    r"(?<file>([A-Za-z]:[/])?[^:\n]+):(?<line>\d+):(?<col>\d+):\s*(fatal error|error):\s*(?<message>.+)";

/// `File "main.ml", line 3, characters 4-9:` followed by the message line
pub const OCAML_ERROR: &str =
    r#"(?<file>[/0-9a-zA-Z._\-]+)", line (?<line>\d+), characters (?<col>\d+)-(?<col_end>\d+):\n(?<message>.+)"#;

/// `main.go:7: undefined error: foo`
pub const GO_ERROR: &str =
    r"(?<file>([A-Za-z]:[/])?[^:\n]+):(?<line>\d+):\s*(?<message>.*error.+)";

/// `main.c:3:1: warning: unused variable`
pub const GCC_WARNING: &str =
    r"(?<file>([A-Za-z]:[/])?[^:\n]+):(?<line>\d+):(?<col>\d+):\s*(warning):\s*(?<message>.+)";

/// Error patterns in match priority order
pub fn error_patterns() -> Vec<String> {
    [GCC_ERROR, OCAML_ERROR, GO_ERROR]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

/// Warning patterns in match priority order
pub fn warning_patterns() -> Vec<String> {
    vec![GCC_WARNING.to_string()]
}

/// Compile patterns for hosts that match output in Rust
pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>, regex::Error> {
    patterns.iter().map(|p| Regex::new(p.as_ref())).collect()
}

/// Default error patterns, compiled once
pub static ERROR_REGEXES: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&error_patterns()).expect("built-in error patterns are valid"));

/// Default warning patterns, compiled once
pub static WARNING_REGEXES: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&warning_patterns()).expect("built-in warning patterns are valid"));
