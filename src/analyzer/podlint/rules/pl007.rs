//! PL007: unique-container-names
//!
//! Container names must be unique within the pod. Every repeat after the
//! first occurrence is reported.

use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope, Violation};

const CODE: &str = "PL007";
const NAME: &str = "unique-container-names";
const DESCRIPTION: &str = "Container names must be unique within the pod.";

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Container, DESCRIPTION, check)
}

fn check(ctx: &LintContext) -> Vec<Diagnostic> {
    let Some(target) = ctx.container else {
        return Vec::new();
    };
    let name = &target.container.name;

    if name.is_empty() || !target.preceding().iter().any(|c| &c.name == name) {
        return Vec::new();
    }

    vec![Diagnostic::new(
        CODE,
        format!("{}.name", target.path()),
        Violation::DuplicateContainerName(name.clone()),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::podlint::rules::{check_with, messages};

    fn check_names(names: &[&str]) -> Vec<String> {
        let mut yaml = String::from("spec:\n  containers:\n");
        for name in names {
            yaml.push_str(&format!("    - name: \"{}\"\n", name));
        }
        messages(&check_with(rule(), &yaml))
    }

    #[test]
    fn test_no_violation_unique_names() {
        assert!(check_names(&["web", "db", "cache"]).is_empty());
    }

    #[test]
    fn test_violation_on_repeat_only() {
        assert_eq!(
            check_names(&["web", "db", "web"]),
            vec!["spec.containers[2].name duplicate container name 'web'"]
        );
    }

    #[test]
    fn test_every_repeat_is_reported() {
        assert_eq!(
            check_names(&["web", "web", "web"]),
            vec![
                "spec.containers[1].name duplicate container name 'web'",
                "spec.containers[2].name duplicate container name 'web'",
            ]
        );
    }

    #[test]
    fn test_empty_names_are_not_duplicates() {
        assert!(check_names(&["", ""]).is_empty());
    }

    #[test]
    fn test_invalid_format_names_are_still_compared() {
        assert_eq!(
            check_names(&["Web", "Web"]),
            vec!["spec.containers[1].name duplicate container name 'Web'"]
        );
    }
}
