//! Whitelist and file-selection policy
//!
//! Matching is prefix based: an import is allowed iff its canonical text
//! starts with one of the allowed prefixes.

use crate::error::PolicyError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Namespace prefixes a submission may import by default
pub const DEFAULT_ALLOWED_PREFIXES: &[&str] = &[
    "javax.vecmath.",
    "javax.imageio.",
    "javax.swing.",
    "java.lang.",
    "java.util.",
    "java.awt.",
    "java.io.",
    "java.nio.",
    "java.text.",
    "javax.xml.",
    "org.w3c.dom.",
    "modeler.",
    "solution.",
    "jgl.",
];

/// File names belonging to the course-provided test files
pub const DEFAULT_IGNORE_PATTERN: &str = r"^Model(?:Test[123]|Helpers)\.java$";

/// Source file suffix, matched case-insensitively
pub const DEFAULT_SOURCE_EXTENSION: &str = ".java";

/// Import scanning policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportPolicy {
    /// Allowed namespace prefixes
    pub allowed_prefixes: Vec<String>,
    /// Regex matched against whole file names; matching files are skipped
    pub ignore_pattern: String,
    /// File name suffix selecting source files
    pub source_extension: String,
}

impl Default for ImportPolicy {
    fn default() -> Self {
        Self {
            allowed_prefixes: DEFAULT_ALLOWED_PREFIXES
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            ignore_pattern: DEFAULT_IGNORE_PATTERN.to_string(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
        }
    }
}

impl ImportPolicy {
    /// Create default policy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With an extra allowed prefix
    #[inline]
    #[must_use]
    pub fn with_allowed_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.allowed_prefixes.push(prefix.into());
        self
    }

    /// With ignore pattern
    #[inline]
    #[must_use]
    pub fn with_ignore_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_pattern = pattern.into();
        self
    }

    /// With source extension
    #[inline]
    #[must_use]
    pub fn with_source_extension(mut self, extension: impl Into<String>) -> Self {
        self.source_extension = extension.into();
        self
    }

    /// Check a canonical import against the whitelist
    #[must_use]
    pub fn allows(&self, import: &str) -> bool {
        self.allowed_prefixes
            .iter()
            .any(|prefix| import.starts_with(prefix.as_str()))
    }

    /// Compile the ignore pattern
    ///
    /// The pattern is anchored on both ends so it must match the whole name.
    pub fn compile(&self) -> Result<CompiledPolicy, PolicyError> {
        if self.source_extension.is_empty() {
            return Err(PolicyError::EmptyExtension);
        }
        let anchored = format!("^(?:{})$", self.ignore_pattern);
        let ignore = Regex::new(&anchored).map_err(|source| PolicyError::InvalidIgnorePattern {
            pattern: self.ignore_pattern.clone(),
            source,
        })?;
        Ok(CompiledPolicy {
            extension: self.source_extension.to_lowercase(),
            ignore,
            policy: self.clone(),
        })
    }
}

/// Policy with its ignore regex compiled
#[derive(Debug, Clone)]
pub struct CompiledPolicy {
    policy: ImportPolicy,
    ignore: Regex,
    extension: String,
}

impl CompiledPolicy {
    /// Get source policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> &ImportPolicy {
        &self.policy
    }

    /// Check whether a file name is a source file subject to scanning
    #[must_use]
    pub fn should_scan(&self, file_name: &str) -> bool {
        file_name.to_lowercase().ends_with(&self.extension) && !self.ignore.is_match(file_name)
    }

    /// Check whether a file name is in the ignore set
    #[inline]
    #[must_use]
    pub fn is_ignored(&self, file_name: &str) -> bool {
        self.ignore.is_match(file_name)
    }

    /// Check a canonical import against the whitelist
    #[inline]
    #[must_use]
    pub fn allows(&self, import: &str) -> bool {
        self.policy.allows(import)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_match_requires_full_segment() {
        let policy = ImportPolicy::default();
        assert!(policy.allows("java.util.List;"));
        assert!(policy.allows("javax.vecmath.Vector3f;"));
        assert!(!policy.allows("java.utilities.Helper;"));
        assert!(!policy.allows("java.net.Socket;"));
    }

    #[test]
    fn extra_prefix() {
        let policy = ImportPolicy::new().with_allowed_prefix("java.net.");
        assert!(policy.allows("java.net.URL;"));
    }

    #[test]
    fn should_scan_filters_extension_and_ignore_set() {
        let compiled = ImportPolicy::default().compile().unwrap();
        assert!(compiled.should_scan("Shape.java"));
        assert!(compiled.should_scan("Shape.JAVA"));
        assert!(compiled.should_scan("ModelTest4.java"));
        assert!(!compiled.should_scan("ModelTest1.java"));
        assert!(!compiled.should_scan("ModelHelpers.java"));
        assert!(!compiled.should_scan("notes.txt"));
        assert!(!compiled.should_scan("Shape.java.bak"));
    }

    #[test]
    fn ignore_pattern_matches_whole_name() {
        let compiled = ImportPolicy::new()
            .with_ignore_pattern("Helpers")
            .compile()
            .unwrap();
        assert!(compiled.is_ignored("Helpers"));
        assert!(!compiled.is_ignored("ModelHelpers.java"));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = ImportPolicy::new().with_ignore_pattern("(").compile().unwrap_err();
        assert!(matches!(err, PolicyError::InvalidIgnorePattern { .. }));

        let err = ImportPolicy::new().with_source_extension("").compile().unwrap_err();
        assert!(matches!(err, PolicyError::EmptyExtension));
    }
}
