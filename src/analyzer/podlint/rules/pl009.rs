//! PL009: memory-quantity
//!
//! `memory` requests and limits must be a whole number with a binary suffix
//! (`Ki`, `Mi` or `Gi`).

use std::sync::LazyLock;

use regex::Regex;

use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope, Violation};

const CODE: &str = "PL009";
const NAME: &str = "memory-quantity";
const DESCRIPTION: &str = "Memory quantities must look like 512Ki, 500Mi or 1Gi.";

static MEMORY_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(Ki|Mi|Gi)$").expect("valid memory pattern"));

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Container, DESCRIPTION, check)
}

/// Check a rendered memory quantity.
pub fn is_valid_memory(value: &str) -> bool {
    MEMORY_QUANTITY.is_match(value)
}

fn check(ctx: &LintContext) -> Vec<Diagnostic> {
    let Some(target) = ctx.container else {
        return Vec::new();
    };

    target
        .container
        .resources
        .lookup("memory")
        .filter_map(|(list, quantity)| {
            let value = quantity.render();
            (!is_valid_memory(&value)).then(|| {
                Diagnostic::new(
                    CODE,
                    format!("{}.resources.{}.memory", target.path(), list),
                    Violation::InvalidFormat(value),
                )
            })
        })
        .collect()
}
