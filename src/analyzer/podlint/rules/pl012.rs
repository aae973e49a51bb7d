//! PL012: port-protocol
//!
//! When a port names a protocol it must be `TCP` or `UDP`.

use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope, Violation};

const CODE: &str = "PL012";
const NAME: &str = "port-protocol";
const DESCRIPTION: &str = "Port protocol must be TCP or UDP.";
const SUPPORTED: [&str; 2] = ["TCP", "UDP"];

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Port, DESCRIPTION, check)
}

fn check(ctx: &LintContext) -> Vec<Diagnostic> {
    let (Some(container), Some(port)) = (ctx.container, ctx.port) else {
        return Vec::new();
    };

    match &port.port.protocol {
        // An empty protocol counts as unset.
        Some(protocol) if !protocol.is_empty() && !SUPPORTED.contains(&protocol.as_str()) => {
            vec![Diagnostic::new(
                CODE,
                format!("{}.ports[{}].protocol", container.path(), port.index),
                Violation::UnsupportedValue(protocol.clone()),
            )]
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::podlint::rules::{check_with, messages};

    fn check_protocol(protocol: &str) -> Vec<String> {
        let yaml = format!(
            "spec:\n  containers:\n    - name: app\n      ports:\n        - containerPort: 80\n          protocol: {}\n",
            protocol
        );
        messages(&check_with(rule(), &yaml))
    }

    #[test]
    fn test_supported_protocols() {
        assert!(check_protocol("TCP").is_empty());
        assert!(check_protocol("UDP").is_empty());
    }

    #[test]
    fn test_absent_protocol() {
        let yaml = "spec:\n  containers:\n    - name: app\n      ports:\n        - containerPort: 80\n";
        assert!(check_with(rule(), yaml).is_empty());
        assert!(check_protocol("\"\"").is_empty());
    }

    #[test]
    fn test_unsupported_protocols() {
        assert_eq!(
            check_protocol("SCTP"),
            vec!["spec.containers[0].ports[0].protocol has unsupported value 'SCTP'"]
        );
        assert_eq!(
            check_protocol("tcp"),
            vec!["spec.containers[0].ports[0].protocol has unsupported value 'tcp'"]
        );
    }
}
