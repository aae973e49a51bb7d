//! PL005: containers-required
//!
//! `spec.containers` must be a non-empty sequence.

use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope, Violation};

const CODE: &str = "PL005";
const NAME: &str = "containers-required";
const DESCRIPTION: &str = "spec.containers must list at least one container.";

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Document, DESCRIPTION, check)
}

fn check(ctx: &LintContext) -> Vec<Diagnostic> {
    if ctx.manifest().spec.containers.is_empty() {
        vec![Diagnostic::new(CODE, "spec.containers", Violation::Required)]
    } else {
        Vec::new()
    }
}
