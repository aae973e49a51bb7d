//! PL002: kind
//!
//! `kind` is required and must be `Pod`.

use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope, Violation};

const CODE: &str = "PL002";
const NAME: &str = "kind";
const DESCRIPTION: &str = "kind is required and must be Pod.";
const FIELD: &str = "kind";
const SUPPORTED: &str = "Pod";

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Document, DESCRIPTION, check)
}

fn check(ctx: &LintContext) -> Vec<Diagnostic> {
    let kind = &ctx.manifest().kind;

    if kind.is_empty() {
        return vec![Diagnostic::new(CODE, FIELD, Violation::Required)];
    }
    if kind != SUPPORTED {
        return vec![Diagnostic::new(
            CODE,
            FIELD,
            Violation::UnsupportedValue(kind.clone()),
        )];
    }
    Vec::new()
}
