//! Core types for the podlint manifest validator.
//!
//! - `RuleCode` - Rule identifiers (e.g., "PL001")
//! - `RuleScope` - Where in the manifest a rule is applied
//! - `Violation` - What went wrong with a field
//! - `Diagnostic` - A single rule violation, ready to be rendered

use std::fmt;

/// A rule code identifier (e.g., "PL001").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleCode(pub String);

impl RuleCode {
    /// Create a new rule code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RuleCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RuleCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The part of the manifest a rule is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleScope {
    /// Evaluated once per manifest.
    Document,
    /// Evaluated once per entry of `spec.containers`.
    Container,
    /// Evaluated once per entry of a container's `ports`.
    Port,
}

impl RuleScope {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Container => "container",
            Self::Port => "port",
        }
    }
}

impl fmt::Display for RuleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of problem found in a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Violation {
    /// The field is missing or empty.
    Required,
    /// The field holds a value outside the accepted set.
    UnsupportedValue(String),
    /// The field does not match its expected format.
    InvalidFormat(String),
    /// A container name already used by an earlier sibling.
    DuplicateContainerName(String),
    /// A port number outside 1..=65535.
    OutOfRange,
    /// A cpu quantity that is not an integer.
    CpuMustBeInt,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "is required"),
            Self::UnsupportedValue(value) => write!(f, "has unsupported value '{}'", value),
            Self::InvalidFormat(value) => write!(f, "has invalid format '{}'", value),
            Self::DuplicateContainerName(value) => {
                write!(f, "duplicate container name '{}'", value)
            }
            Self::OutOfRange => write!(f, "value out of range"),
            Self::CpuMustBeInt => write!(f, "cpu must be int"),
        }
    }
}

/// A rule violation found during linting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The rule code that was violated.
    pub code: RuleCode,
    /// Full path of the offending field (e.g. `spec.containers[0].resources.limits.cpu`).
    pub field: String,
    /// Text printed in front of the violation. `None` prints the violation alone.
    pub subject: Option<String>,
    /// What is wrong with the field.
    pub violation: Violation,
}

impl Diagnostic {
    /// Create a diagnostic whose subject is the field path itself.
    pub fn new(code: impl Into<RuleCode>, field: impl Into<String>, violation: Violation) -> Self {
        let field = field.into();
        Self {
            code: code.into(),
            subject: Some(field.clone()),
            field,
            violation,
        }
    }

    /// Print a different subject than the field path.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Print the violation without any subject.
    pub fn without_subject(mut self) -> Self {
        self.subject = None;
        self
    }

    /// The message part of the rendered line (everything after `<src>: `).
    pub fn message(&self) -> String {
        match &self.subject {
            Some(subject) => format!("{} {}", subject, self.violation),
            None => self.violation.to_string(),
        }
    }

    /// Two diagnostics describe the same defect when field and violation agree.
    pub fn same_defect(&self, other: &Diagnostic) -> bool {
        self.field == other.field && self.violation == other.violation
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
