//! PL013: probe-http-get
//!
//! Readiness and liveness probes need an `httpGet.path` and an
//! `httpGet.port` between 1 and 65535.

use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule, port_in_range};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope, Violation};

const CODE: &str = "PL013";
const NAME: &str = "probe-http-get";
const DESCRIPTION: &str = "Probes need an httpGet path and a valid httpGet port.";

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Container, DESCRIPTION, check)
}

fn check(ctx: &LintContext) -> Vec<Diagnostic> {
    let Some(target) = ctx.container else {
        return Vec::new();
    };
    let mut diagnostics = Vec::new();

    for (field, probe) in target.container.probes() {
        let prefix = format!("{}.{}.httpGet", target.path(), field);
        let http_get = &probe.http_get;

        if http_get.path.is_empty() {
            diagnostics.push(Diagnostic::new(
                CODE,
                format!("{}.path", prefix),
                Violation::Required,
            ));
        }
        if !port_in_range(http_get.port.as_ref()) {
            diagnostics.push(Diagnostic::new(
                CODE,
                format!("{}.port", prefix),
                Violation::OutOfRange,
            ));
        }
    }

    diagnostics
}
