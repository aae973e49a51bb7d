//! PL010: cpu-integer
//!
//! `cpu` requests and limits must be whole numbers, written either as an
//! integer literal or as a numeric string.

use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope, Violation};

const CODE: &str = "PL010";
const NAME: &str = "cpu-integer";
const DESCRIPTION: &str = "CPU quantities must be integers.";

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Container, DESCRIPTION, check)
}

fn check(ctx: &LintContext) -> Vec<Diagnostic> {
    let Some(target) = ctx.container else {
        return Vec::new();
    };

    target
        .container
        .resources
        .lookup("cpu")
        .filter(|(_, quantity)| quantity.as_integer().is_none())
        .map(|(list, _)| {
            Diagnostic::new(
                CODE,
                format!("{}.resources.{}.cpu", target.path(), list),
                Violation::CpuMustBeInt,
            )
            .without_subject()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::podlint::rules::{check_with, messages};

    fn check_limits(limits: &str) -> Vec<String> {
        let yaml = format!(
            "spec:\n  containers:\n    - name: app\n      resources:\n        limits: {}\n",
            limits
        );
        messages(&check_with(rule(), &yaml))
    }

    #[test]
    fn test_integer_forms_accepted() {
        assert!(check_limits("{cpu: \"4\"}").is_empty());
        assert!(check_limits("{cpu: 4}").is_empty());
    }

    #[test]
    fn test_non_integer_rejected() {
        assert_eq!(check_limits("{cpu: \"abc\"}"), vec!["cpu must be int"]);
        assert_eq!(check_limits("{cpu: 500m}"), vec!["cpu must be int"]);
        assert_eq!(check_limits("{cpu: 0.5}"), vec!["cpu must be int"]);
    }

    #[test]
    fn test_requests_are_checked() {
        let yaml = "spec:\n  containers:\n    - name: app\n      resources:\n        requests: {cpu: x}\n        limits: {cpu: y}\n";
        let diagnostics = check_with(rule(), yaml);
        let fields: Vec<&str> = diagnostics.iter().map(|d| d.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "spec.containers[0].resources.requests.cpu",
                "spec.containers[0].resources.limits.cpu",
            ]
        );
    }

    #[test]
    fn test_each_container_reported() {
        let yaml = "spec:\n  containers:\n    - name: a\n      resources:\n        limits: {cpu: x}\n    - name: b\n      resources:\n        limits: {cpu: y}\n";
        assert_eq!(check_with(rule(), yaml).len(), 2);
    }
}
