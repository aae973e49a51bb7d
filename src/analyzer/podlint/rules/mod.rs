//! Rule system framework for podlint.
//!
//! Provides the infrastructure for defining and running Pod manifest rules:
//! - `Rule` trait for all rules
//! - `SimpleRule` for stateless checks
//! - `run_rules` to evaluate a rule list in document order

use serde_yaml::Value;

use crate::analyzer::podlint::parser::{Container, ContainerPort, IntOrString, ParsedManifest, PodManifest};
use crate::analyzer::podlint::types::{Diagnostic, RuleCode, RuleScope};

// Rule modules
pub mod pl001;
pub mod pl002;
pub mod pl003;
pub mod pl004;
pub mod pl005;
pub mod pl006;
pub mod pl007;
pub mod pl008;
pub mod pl009;
pub mod pl010;
pub mod pl011;
pub mod pl012;
pub mod pl013;

/// Context for checking one part of a manifest.
#[derive(Debug, Clone, Copy)]
pub struct LintContext<'a> {
    /// Both views of the manifest being checked.
    pub parsed: &'a ParsedManifest,
    /// The container under check, for container and port rules.
    pub container: Option<ContainerTarget<'a>>,
    /// The port under check, for port rules.
    pub port: Option<PortTarget<'a>>,
}

/// A container together with its position among its siblings.
#[derive(Debug, Clone, Copy)]
pub struct ContainerTarget<'a> {
    pub index: usize,
    pub container: &'a Container,
    /// Every entry of `spec.containers`, including this one.
    pub siblings: &'a [Container],
}

impl ContainerTarget<'_> {
    /// Field path of this container, e.g. `spec.containers[2]`.
    pub fn path(&self) -> String {
        format!("spec.containers[{}]", self.index)
    }

    /// Containers listed before this one.
    pub fn preceding(&self) -> &[Container] {
        &self.siblings[..self.index]
    }
}

/// A port together with its position in the container's `ports`.
#[derive(Debug, Clone, Copy)]
pub struct PortTarget<'a> {
    pub index: usize,
    pub port: &'a ContainerPort,
}

impl<'a> LintContext<'a> {
    pub fn new(parsed: &'a ParsedManifest) -> Self {
        Self {
            parsed,
            container: None,
            port: None,
        }
    }

    /// The typed manifest.
    pub fn manifest(&self) -> &'a PodManifest {
        &self.parsed.manifest
    }

    /// The untyped document.
    pub fn document(&self) -> &'a Value {
        &self.parsed.document
    }

    /// Narrow the context to one container.
    pub fn with_container(self, index: usize) -> Self {
        let siblings = &self.parsed.manifest.spec.containers;
        Self {
            container: siblings.get(index).map(|container| ContainerTarget {
                index,
                container,
                siblings,
            }),
            port: None,
            ..self
        }
    }

    /// Narrow a container context to one of its ports.
    pub fn with_port(self, index: usize) -> Self {
        Self {
            port: self
                .container
                .and_then(|target| target.container.ports.get(index))
                .map(|port| PortTarget { index, port }),
            ..self
        }
    }
}

/// A rule that can check Pod manifests.
pub trait Rule: Send + Sync {
    /// Get the rule code (e.g., "PL001").
    fn code(&self) -> &RuleCode;

    /// Get the human-readable rule name (e.g., "api-version").
    fn name(&self) -> &str;

    /// Get the part of the manifest this rule is evaluated against.
    fn scope(&self) -> RuleScope;

    /// Get a short description of the rule.
    fn description(&self) -> &str;

    /// Check the context and return any diagnostics.
    fn check(&self, context: &LintContext) -> Vec<Diagnostic>;
}

/// Base implementation for a stateless rule.
pub struct SimpleRule<F>
where
    F: Fn(&LintContext) -> Vec<Diagnostic> + Send + Sync,
{
    code: RuleCode,
    name: String,
    scope: RuleScope,
    description: String,
    check_fn: F,
}

impl<F> SimpleRule<F>
where
    F: Fn(&LintContext) -> Vec<Diagnostic> + Send + Sync,
{
    pub fn new(
        code: impl Into<RuleCode>,
        name: impl Into<String>,
        scope: RuleScope,
        description: impl Into<String>,
        check_fn: F,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            scope,
            description: description.into(),
            check_fn,
        }
    }
}

impl<F> Rule for SimpleRule<F>
where
    F: Fn(&LintContext) -> Vec<Diagnostic> + Send + Sync,
{
    fn code(&self) -> &RuleCode {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn scope(&self) -> RuleScope {
        self.scope
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn check(&self, context: &LintContext) -> Vec<Diagnostic> {
        (self.check_fn)(context)
    }
}

/// Check that a port number resolves to 1..=65535.
pub fn port_in_range(port: Option<&IntOrString>) -> bool {
    port.and_then(IntOrString::as_int)
        .is_some_and(|n| (1..=65535).contains(&n))
}

/// Get all rules, in presentation order.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(pl001::rule()),
        Box::new(pl002::rule()),
        Box::new(pl003::rule()),
        Box::new(pl004::rule()),
        Box::new(pl005::rule()),
        Box::new(pl006::rule()),
        Box::new(pl007::rule()),
        Box::new(pl008::rule()),
        Box::new(pl009::rule()),
        Box::new(pl010::rule()),
        Box::new(pl011::rule()),
        Box::new(pl012::rule()),
        Box::new(pl013::rule()),
    ]
}

/// Evaluate `rules` against a manifest in document order.
///
/// Document rules run first. Container and port rules then run for each
/// container in turn; a run of consecutive port rules is applied port by
/// port at its place in the list.
pub fn run_rules(parsed: &ParsedManifest, rules: &[Box<dyn Rule>]) -> Vec<Diagnostic> {
    let ctx = LintContext::new(parsed);
    let mut diagnostics = Vec::new();

    for rule in rules.iter().filter(|r| r.scope() == RuleScope::Document) {
        diagnostics.extend(rule.check(&ctx));
    }

    let nested: Vec<&Box<dyn Rule>> = rules
        .iter()
        .filter(|r| r.scope() != RuleScope::Document)
        .collect();

    for (index, container) in parsed.manifest.spec.containers.iter().enumerate() {
        let container_ctx = ctx.with_container(index);

        for group in nested.chunk_by(|a, b| a.scope() == b.scope()) {
            if group[0].scope() == RuleScope::Port {
                for port_index in 0..container.ports.len() {
                    let port_ctx = container_ctx.with_port(port_index);
                    for rule in group {
                        diagnostics.extend(rule.check(&port_ctx));
                    }
                }
            } else {
                for rule in group {
                    diagnostics.extend(rule.check(&container_ctx));
                }
            }
        }
    }

    diagnostics
}

/// Get rule definitions for documentation.
pub fn rule_definitions() -> Vec<RuleDefinition> {
    all_rules()
        .iter()
        .map(|r| RuleDefinition {
            code: r.code().clone(),
            name: r.name().to_string(),
            scope: r.scope(),
            description: r.description().to_string(),
        })
        .collect()
}

/// Rule definition for documentation/introspection.
#[derive(Debug, Clone)]
pub struct RuleDefinition {
    pub code: RuleCode,
    pub name: String,
    pub scope: RuleScope,
    pub description: String,
}

#[cfg(test)]
pub(crate) fn check_with(rule: impl Rule + 'static, yaml: &str) -> Vec<Diagnostic> {
    let parsed = crate::analyzer::podlint::parser::parse_manifest(yaml).unwrap();
    let rules: Vec<Box<dyn Rule>> = vec![Box::new(rule)];
    run_rules(&parsed, &rules)
}

#[cfg(test)]
pub(crate) fn messages(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics.iter().map(Diagnostic::message).collect()
}
