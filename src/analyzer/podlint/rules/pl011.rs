//! PL011: container-port-range
//!
//! `containerPort` must be between 1 and 65535. A missing or non-numeric
//! port is out of range.

use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule, port_in_range};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope, Violation};

const CODE: &str = "PL011";
const NAME: &str = "container-port-range";
const DESCRIPTION: &str = "containerPort must be between 1 and 65535.";

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Port, DESCRIPTION, check)
}

fn check(ctx: &LintContext) -> Vec<Diagnostic> {
    let (Some(container), Some(port)) = (ctx.container, ctx.port) else {
        return Vec::new();
    };
    if port_in_range(port.port.container_port.as_ref()) {
        return Vec::new();
    }

    vec![Diagnostic::new(
        CODE,
        format!("{}.ports[{}].containerPort", container.path(), port.index),
        Violation::OutOfRange,
    )]
}
