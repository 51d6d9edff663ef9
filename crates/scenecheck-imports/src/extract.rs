//! Regex-based import extraction
//!
//! Only single dotted-path imports terminated by a bare semicolon are
//! recognized. Anything else is left alone.

use once_cell::sync::Lazy;
use regex::Regex;

/// Keyword introducing an import declaration
pub const IMPORT_KEYWORD: &str = "import";

static IMPORT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // ASCII whitespace only
    Regex::new(r"(^|(?-u:\s))import(?-u:\s)+([A-Za-z0-9]+((?-u:\s)*\.(?-u:\s)*[A-Za-z0-9]+)+(?-u:\s)*;)")
        .expect("import pattern is a valid regex")
});

/// Extract canonical imports from source text, in order of appearance
///
/// Each result has all whitespace removed and the keyword stripped, e.g.
/// `import java . util . List ;` yields `java.util.List;`.
#[must_use]
pub fn extract_imports(source: &str) -> Vec<String> {
    IMPORT_PATTERN
        .find_iter(source)
        .map(|m| canonicalize(m.as_str()))
        .collect()
}

fn canonicalize(declaration: &str) -> String {
    let compact: String = declaration.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.strip_prefix(IMPORT_KEYWORD) {
        Some(rest) => rest.to_string(),
        None => compact,
    }
}
