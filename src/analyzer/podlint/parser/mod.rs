//! YAML parser for Pod manifests.
//!
//! Produces two views of the same document: the untyped `serde_yaml::Value`
//! and the typed `PodManifest` built from it.

pub mod manifest;

pub use manifest::{
    Container, ContainerPort, HttpGetAction, IntOrString, Metadata, OsField, PodManifest, PodSpec,
    Probe, Quantity, ResourceRequirements, describe, normalize_keys, scalar_text,
};

use serde_yaml::Value;

/// Error type for parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("invalid YAML format: {0}")]
    Syntax(String),
    #[error("invalid structure: {0}")]
    InvalidStructure(String),
}

/// Both views of a parsed manifest.
#[derive(Debug, Clone)]
pub struct ParsedManifest {
    /// The schema-bound view.
    pub manifest: PodManifest,
    /// The raw document.
    pub document: Value,
}

impl ParsedManifest {
    /// Walk the raw document by mapping keys.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(&self.document, |value, key| value.get(*key))
    }
}

/// Parse a single YAML document into a `ParsedManifest`.
///
/// Merge keys (`<<`) are resolved in both views. Malformed syntax, a bad
/// merge and a root that is not a mapping are errors. An empty document
/// yields an empty manifest.
pub fn parse_manifest(content: &str) -> Result<ParsedManifest, ParseError> {
    let mut document: Value =
        serde_yaml::from_str(content).map_err(|e| ParseError::Syntax(e.to_string()))?;
    document.apply_merge().map_err(|e| ParseError::Syntax(e.to_string()))?;

    let manifest = match &document {
        Value::Null => PodManifest::default(),
        Value::Mapping(_) => manifest::from_value_or_default(normalize_keys(document.clone())),
        other => {
            return Err(ParseError::InvalidStructure(format!(
                "expected a mapping at the document root, found {}",
                describe(other)
            )));
        }
    };

    Ok(ParsedManifest { manifest, document })
}
