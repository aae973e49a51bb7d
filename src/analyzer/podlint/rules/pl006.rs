//! PL006: container-name
//!
//! Every container needs a name in lowercase snake case (`web_server`).

use std::sync::LazyLock;

use regex::Regex;

use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope, Violation};

const CODE: &str = "PL006";
const NAME: &str = "container-name";
const DESCRIPTION: &str = "Container names are required and must be lowercase snake case.";

static SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(_[a-z]+)*$").expect("valid snake case pattern"));

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Container, DESCRIPTION, check)
}

fn check(ctx: &LintContext) -> Vec<Diagnostic> {
    let Some(target) = ctx.container else {
        return Vec::new();
    };
    let field = format!("{}.name", target.path());
    let name = &target.container.name;

    if name.is_empty() {
        vec![Diagnostic::new(CODE, field, Violation::Required)]
    } else if !SNAKE_CASE.is_match(name) {
        vec![Diagnostic::new(
            CODE,
            field,
            Violation::InvalidFormat(name.clone()),
        )]
    } else {
        Vec::new()
    }
}
