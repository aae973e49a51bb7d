//! PL004: supported-os
//!
//! A bare-string `spec.os` must be `linux` or `windows`. The `{name: ...}`
//! descriptor shape is not checked.

use crate::analyzer::podlint::parser::{OsField, scalar_text};
use crate::analyzer::podlint::rules::{LintContext, Rule, SimpleRule};
use crate::analyzer::podlint::types::{Diagnostic, RuleScope, Violation};

const CODE: &str = "PL004";
const NAME: &str = "supported-os";
const DESCRIPTION: &str = "spec.os must be linux or windows.";
const SUPPORTED: [&str; 2] = ["linux", "windows"];

pub fn rule() -> impl Rule {
    SimpleRule::new(CODE, NAME, RuleScope::Document, DESCRIPTION, check)
}

fn check(ctx: &LintContext) -> Vec<Diagnostic> {
    let os = match &ctx.manifest().spec.os {
        Some(OsField::Name(name)) => Some(name.clone()),
        Some(OsField::Descriptor { .. }) => None,
        // Numbers and booleans fit neither shape; read them from the raw document.
        None => ctx.parsed.lookup(&["spec", "os"]).and_then(scalar_text),
    };

    match os {
        Some(value) if !SUPPORTED.contains(&value.as_str()) => vec![
            Diagnostic::new(CODE, "spec.os", Violation::UnsupportedValue(value)).with_subject("os"),
        ],
        _ => Vec::new(),
    }
}
