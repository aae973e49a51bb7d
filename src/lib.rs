//! # Podlint
//!
//! A Rust-based command-line validator for Kubernetes `Pod` manifests.
//!
//! ## Features
//!
//! - **Single pass**: every applicable rule runs, every violation is reported
//! - **Tolerant parsing**: fields with an unexpected shape do not abort validation
//! - **Plain output**: one `<file>: <field> <message>` line per violation
//!
//! ## Example
//!
//! ```rust,no_run
//! use podlint::analyzer::podlint::{LintConfig, format_result, lint_file};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let result = lint_file(Path::new("pod.yaml"), &LintConfig::default())?;
//! print!("{}", format_result(&result));
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod cli;
pub mod error;
pub mod handlers;

// Re-export commonly used types and functions
pub use analyzer::podlint::{Diagnostic, LintConfig, LintResult, lint, lint_file};
pub use error::{PodlintError, Result};
pub use handlers::*;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
