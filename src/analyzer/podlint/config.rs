//! Runtime configuration for the podlint validator.
//!
//! There is no configuration file; a `LintConfig` is assembled from
//! command-line flags.

use std::collections::HashSet;

use crate::analyzer::podlint::types::RuleCode;

/// Configuration for a lint run.
#[derive(Debug, Clone, Default)]
pub struct LintConfig {
    /// Rule codes to skip, stored upper-case.
    pub ignored_rules: HashSet<String>,
}

impl LintConfig {
    /// Skip a rule by code (case-insensitive).
    pub fn ignore(mut self, code: impl Into<String>) -> Self {
        self.ignored_rules.insert(code.into().trim().to_uppercase());
        self
    }

    /// Skip every rule in `codes`.
    pub fn ignore_all<I, S>(self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        codes.into_iter().fold(self, |config, code| config.ignore(code))
    }

    /// Check if a rule is ignored.
    pub fn is_rule_ignored(&self, code: &RuleCode) -> bool {
        self.ignored_rules.contains(code.as_str())
    }
}
