//! PL008: container-image
//!
//! Images are required, must come from the approved registry and must
//! carry an explicit tag.

use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope, Violation};

const CODE: &str = "PL008";
const NAME: &str = "container-image";
const DESCRIPTION: &str = "Container images must come from registry.bigbrother.io and carry a tag.";

/// Registry every image must be pulled from.
pub const REGISTRY_PREFIX: &str = "registry.bigbrother.io/";

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Container, DESCRIPTION, check)
}

/// Check that an image reference is `<registry prefix><repository>:<tag>`.
pub fn is_valid_image(image: &str) -> bool {
    image
        .strip_prefix(REGISTRY_PREFIX)
        .is_some_and(|reference| reference.contains(':'))
}

fn check(ctx: &LintContext) -> Vec<Diagnostic> {
    let Some(target) = ctx.container else {
        return Vec::new();
    };
    let field = format!("{}.image", target.path());
    let image = &target.container.image;

    if image.is_empty() {
        return vec![Diagnostic::new(CODE, field, Violation::Required)];
    }
    if !is_valid_image(image) {
        return vec![Diagnostic::new(
            CODE,
            field,
            Violation::InvalidFormat(image.clone()),
        )];
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::podlint::rules::{check_with, messages};

    fn check_image(image: &str) -> Vec<String> {
        let yaml = format!(
            "spec:\n  containers:\n    - name: app\n      image: \"{}\"\n",
            image
        );
        messages(&check_with(rule(), &yaml))
    }

    #[test]
    fn test_valid_images() {
        assert!(check_image("registry.bigbrother.io/app:1.0").is_empty());
        assert!(check_image("registry.bigbrother.io/team/app:latest").is_empty());
    }

    #[test]
    fn test_missing_tag() {
        assert_eq!(
            check_image("registry.bigbrother.io/app"),
            vec!["spec.containers[0].image has invalid format 'registry.bigbrother.io/app'"]
        );
    }

    #[test]
    fn test_foreign_registry() {
        assert_eq!(
            check_image("docker.io/nginx:1.25"),
            vec!["spec.containers[0].image has invalid format 'docker.io/nginx:1.25'"]
        );
        assert!(!is_valid_image("nginx:1.25"));
    }

    #[test]
    fn test_missing_image() {
        let yaml = "spec:\n  containers:\n    - name: app\n";
        assert_eq!(
            messages(&check_with(rule(), yaml)),
            vec!["spec.containers[0].image is required"]
        );
    }
}
