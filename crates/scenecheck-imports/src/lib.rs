//! Import compliance scanning for submitted source trees
//!
//! Walks a directory tree, extracts single-statement import declarations
//! with a regex, and checks each one against a whitelist of namespace
//! prefixes. The first disallowed import short-circuits the walk.
//!
//! # Architecture
//!
//! ```text
//! File System → RegexImportScanner → ScanVerdict → ImportGate (memoized)
//!                      ↑
//!                ImportPolicy (whitelist, ignore pattern, extension)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use scenecheck_imports::{ImportGate, ImportPolicy, RegexImportScanner};
//!
//! let scanner = RegexImportScanner::new(&ImportPolicy::default())?;
//! let gate = ImportGate::new(scanner, "submission/");
//! gate.require_pass()?;
//! ```
//!
//! Multi-name forms such as `import java.net.*;` and static imports do not
//! match the pattern and are never flagged.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod extract;
pub mod gate;
pub mod policy;
pub mod scanner;

pub use error::{PolicyError, ScanFailure, ScanVerdict};
pub use extract::extract_imports;
pub use gate::ImportGate;
pub use policy::{CompiledPolicy, ImportPolicy};
pub use scanner::{ImportScan, RegexImportScanner};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
