//! Podlint: Pod manifest validator
//!
//! Validates a single Kubernetes-style `Pod` manifest against a fixed rule
//! catalog and reports every violation as one plain-text line.
//!
//! # Features
//!
//! - Tolerant YAML parsing: a field with an unexpected shape falls back to
//!   its default instead of failing the document
//! - Union-typed fields (`spec.os`, ports, resource quantities) modelled as
//!   tagged variants
//! - 13 independent rules (PL001-PL013), evaluated in document order
//! - Rule skipping by code
//!
//! # Example
//!
//! ```rust,ignore
//! use podlint::analyzer::podlint::{lint, LintConfig};
//!
//! let manifest = r#"
//! apiVersion: v1
//! kind: Pod
//! metadata:
//!   name: web
//! spec:
//!   containers:
//!     - name: web_server
//!       image: registry.bigbrother.io/app:1.0
//! "#;
//!
//! let result = lint(manifest, &LintConfig::default())?;
//! assert!(result.diagnostics.is_empty());
//! ```
//!
//! # Rules
//!
//! | Code  | Name                   | Scope     | Description                                    |
//! |-------|------------------------|-----------|------------------------------------------------|
//! | PL001 | api-version            | document  | apiVersion is required and must be v1          |
//! | PL002 | kind                   | document  | kind is required and must be Pod               |
//! | PL003 | metadata-name          | document  | metadata.name is required                      |
//! | PL004 | supported-os           | document  | spec.os must be linux or windows               |
//! | PL005 | containers-required    | document  | spec.containers must not be empty              |
//! | PL006 | container-name         | container | Name required, lowercase snake case            |
//! | PL007 | unique-container-names | container | Names unique within the pod                    |
//! | PL008 | container-image        | container | Image from the approved registry, with a tag   |
//! | PL009 | memory-quantity        | container | Memory like 512Ki, 500Mi, 1Gi                  |
//! | PL010 | cpu-integer            | container | CPU quantities are integers                    |
//! | PL011 | container-port-range   | port      | containerPort within 1..=65535                 |
//! | PL012 | port-protocol          | port      | Protocol TCP or UDP                            |
//! | PL013 | probe-http-get         | container | Probe httpGet path set, port within 1..=65535  |

pub mod config;
pub mod formatter;
pub mod lint;
pub mod parser;
pub mod rules;
pub mod types;

// Re-export main types and functions
pub use config::LintConfig;
pub use formatter::{format_diagnostic, format_line, format_result, print_result, write_result};
pub use lint::{LintResult, lint, lint_file, lint_with_path};
pub use parser::{ParseError, ParsedManifest, PodManifest, parse_manifest};
pub use rules::{RuleDefinition, rule_definitions};
pub use types::{Diagnostic, RuleCode, RuleScope, Violation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_basic() {
        let yaml = r#"
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web_server
      image: registry.bigbrother.io/app:1.0
"#;
        let result = lint(yaml, &LintConfig::default()).unwrap();
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn test_format_output() {
        let result = lint_with_path("kind: Pod\n", "pod.yaml", &LintConfig::default()).unwrap();
        let output = format_result(&result);
        assert!(output.starts_with("pod.yaml: apiVersion is required\n"));
    }

    #[test]
    fn test_rule_definitions_cover_catalog() {
        let definitions = rule_definitions();
        assert_eq!(definitions.first().map(|d| d.code.as_str()), Some("PL001"));
        assert_eq!(definitions.last().map(|d| d.code.as_str()), Some("PL013"));
    }
}
