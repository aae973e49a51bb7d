//! PL001: api-version
//!
//! `apiVersion` is required and must be `v1`.

use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope, Violation};

const CODE: &str = "PL001";
const NAME: &str = "api-version";
const DESCRIPTION: &str = "apiVersion is required and must be v1.";
const FIELD: &str = "apiVersion";
const SUPPORTED: &str = "v1";

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Document, DESCRIPTION, check)
}

fn check(ctx: &LintContext) -> Vec<Diagnostic> {
    let api_version = &ctx.manifest().api_version;

    if api_version.is_empty() {
        vec![Diagnostic::new(CODE, FIELD, Violation::Required)]
    } else if api_version != SUPPORTED {
        vec![Diagnostic::new(
            CODE,
            FIELD,
            Violation::UnsupportedValue(api_version.clone()),
        )]
    } else {
        Vec::new()
    }
}
