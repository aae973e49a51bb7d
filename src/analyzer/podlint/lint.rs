//! Main linting orchestration for podlint.
//!
//! Ties together parsing, the rule catalog and configuration.

use std::path::Path;

use crate::analyzer::podlint::config::LintConfig;
use crate::analyzer::podlint::parser::{ParseError, parse_manifest};
use crate::analyzer::podlint::rules::{Rule, all_rules, run_rules};
use crate::analyzer::podlint::types::Diagnostic;
use crate::error::{PodlintError, Result};

/// Result of linting a Pod manifest.
#[derive(Debug, Clone)]
pub struct LintResult {
    /// The file path that was linted.
    pub file_path: String,
    /// Rule violations found, in document order.
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    /// Create a new empty result.
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            diagnostics: Vec::new(),
        }
    }

    /// Add a diagnostic unless the same defect is already recorded.
    pub fn push(&mut self, diagnostic: Diagnostic) -> bool {
        if self.diagnostics.iter().any(|d| d.same_defect(&diagnostic)) {
            return false;
        }
        self.diagnostics.push(diagnostic);
        true
    }

    /// Check if there are any diagnostics.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Lint a manifest string.
pub fn lint(content: &str, config: &LintConfig) -> std::result::Result<LintResult, ParseError> {
    lint_with_path(content, "<inline>", config)
}

/// Lint a manifest string with a path for diagnostics.
pub fn lint_with_path(
    content: &str,
    path: &str,
    config: &LintConfig,
) -> std::result::Result<LintResult, ParseError> {
    let parsed = parse_manifest(content)?;

    let rules: Vec<Box<dyn Rule>> = all_rules()
        .into_iter()
        .filter(|rule| !config.is_rule_ignored(rule.code()))
        .collect();
    log::debug!("Running {} rules on {}", rules.len(), path);

    let mut result = LintResult::new(path);
    for diagnostic in run_rules(&parsed, &rules) {
        if !result.push(diagnostic) {
            log::debug!("Dropped repeated diagnostic in {}", path);
        }
    }

    log::info!("{}: {} diagnostic(s)", path, result.diagnostics.len());
    Ok(result)
}

/// Lint a manifest from a file path.
pub fn lint_file(path: &Path, config: &LintConfig) -> Result<LintResult> {
    log::info!("Validating {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| PodlintError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(lint_with_path(&content, &path.display().to_string(), config)?)
}
