//! PL003: metadata-name
//!
//! `metadata.name` is required.

use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope, Violation};

const CODE: &str = "PL003";
const NAME: &str = "metadata-name";
const DESCRIPTION: &str = "metadata.name is required.";

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Document, DESCRIPTION, check)
}

fn check(ctx: &LintContext) -> Vec<Diagnostic> {
    if !ctx.manifest().metadata.name.is_empty() {
        return Vec::new();
    }

    vec![Diagnostic::new(CODE, "metadata.name", Violation::Required).with_subject("name")]
}
