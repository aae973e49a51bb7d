//! Pod manifest structure types.
//!
//! Every field is deserialized tolerantly: a value with an unexpected shape
//! falls back to the field's default instead of failing the whole document.
//! Fields that legally take more than one shape are tagged variants
//! (`OsField`, `IntOrString`, `Quantity`).

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::{DeserializeOwned, Deserializer};
use serde_yaml::Value;
use serde_yaml::value::TaggedValue;

/// A parsed `Pod` manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodManifest {
    #[serde(default, deserialize_with = "scalar_string")]
    pub api_version: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "tolerant")]
    pub metadata: Metadata,
    #[serde(default, deserialize_with = "tolerant")]
    pub spec: PodSpec,
}

/// Object metadata. Only `name` is validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub namespace: Option<String>,
    #[serde(default, deserialize_with = "tolerant")]
    pub labels: BTreeMap<String, String>,
}

/// The pod specification.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodSpec {
    #[serde(default, deserialize_with = "tolerant")]
    pub os: Option<OsField>,
    #[serde(default, deserialize_with = "tolerant_seq")]
    pub containers: Vec<Container>,
}

/// `spec.os` is either a bare OS name or a `{name: ...}` descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OsField {
    Name(String),
    Descriptor {
        #[serde(default, deserialize_with = "scalar_string")]
        name: String,
    },
}

/// A container entry of `spec.containers`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub image: String,
    #[serde(default, deserialize_with = "tolerant_seq")]
    pub ports: Vec<ContainerPort>,
    #[serde(default, deserialize_with = "tolerant")]
    pub resources: ResourceRequirements,
    #[serde(default, deserialize_with = "tolerant")]
    pub readiness_probe: Option<Probe>,
    #[serde(default, deserialize_with = "tolerant")]
    pub liveness_probe: Option<Probe>,
}

impl Container {
    /// The probes that are set, with their field names.
    pub fn probes(&self) -> impl Iterator<Item = (&'static str, &Probe)> {
        [
            ("readinessProbe", self.readiness_probe.as_ref()),
            ("livenessProbe", self.liveness_probe.as_ref()),
        ]
        .into_iter()
        .filter_map(|(field, probe)| probe.map(|p| (field, p)))
    }
}

/// A port exposed by a container.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPort {
    #[serde(default, deserialize_with = "tolerant")]
    pub container_port: Option<IntOrString>,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub protocol: Option<String>,
}

/// Resource requests and limits, keyed by resource name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceRequirements {
    #[serde(default, deserialize_with = "tolerant")]
    pub requests: BTreeMap<String, Quantity>,
    #[serde(default, deserialize_with = "tolerant")]
    pub limits: BTreeMap<String, Quantity>,
}

impl ResourceRequirements {
    /// Look up a resource in both lists, `requests` first.
    pub fn lookup<'a>(
        &'a self,
        resource: &'a str,
    ) -> impl Iterator<Item = (&'static str, &'a Quantity)> + 'a {
        [("requests", &self.requests), ("limits", &self.limits)]
            .into_iter()
            .filter_map(move |(list, map)| map.get(resource).map(|q| (list, q)))
    }
}

/// A health probe. Only `httpGet` probes are modelled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Probe {
    #[serde(default, deserialize_with = "tolerant")]
    pub http_get: HttpGetAction,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpGetAction {
    #[serde(default, deserialize_with = "scalar_string")]
    pub path: String,
    #[serde(default, deserialize_with = "tolerant")]
    pub port: Option<IntOrString>,
}

/// A number that may also be written as a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    /// The integer value, if the string form is numeric.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(s) => s.trim().parse().ok(),
        }
    }
}

/// A resource quantity as written in the manifest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(serde_yaml::Number),
    Str(String),
    Other(Value),
}

impl Quantity {
    /// The quantity as text, the way it is echoed in diagnostics.
    pub fn render(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Str(s) => s.clone(),
            Self::Other(Value::Null) => String::new(),
            Self::Other(value) => scalar_text(value).unwrap_or_else(|| {
                serde_yaml::to_string(value)
                    .map(|s| s.trim_end().to_string())
                    .unwrap_or_default()
            }),
        }
    }

    /// The integer value of an integer literal or an integer string.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            Self::Str(s) => s.parse().ok(),
            Self::Other(_) => None,
        }
    }
}

/// Text of a scalar YAML value; `None` for null, sequences and mappings.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Short name of a value's shape, for log and error messages.
pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Rewrite every mapping key as a string so typed fields can match it.
///
/// Scalar keys become their text. Null, sequence and mapping keys are
/// dropped along with their values; the rest of the mapping is kept.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Mapping(mapping) => Value::Mapping(
            mapping
                .into_iter()
                .filter_map(|(key, value)| {
                    let Some(key) = scalar_text(&key) else {
                        log::debug!("Dropping mapping entry keyed by {}", describe(&key));
                        return None;
                    };
                    Some((Value::String(key), normalize_keys(value)))
                })
                .collect(),
        ),
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(normalize_keys).collect()),
        Value::Tagged(tagged) => {
            let TaggedValue { tag, value } = *tagged;
            Value::Tagged(Box::new(TaggedValue {
                tag,
                value: normalize_keys(value),
            }))
        }
        other => other,
    }
}

pub(crate) fn from_value_or_default<T: DeserializeOwned + Default>(value: Value) -> T {
    match serde_yaml::from_value(value) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::debug!(
                "Falling back to default for {}: {}",
                std::any::type_name::<T>(),
                err
            );
            T::default()
        }
    }
}

fn tolerant<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(from_value_or_default(value))
}

// Element-wise, so one malformed entry keeps the indices of its siblings.
fn tolerant_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Sequence(items) => Ok(items.into_iter().map(from_value_or_default).collect()),
        Value::Null => Ok(Vec::new()),
        other => {
            log::debug!("Expected a sequence, found {}", describe(&other));
            Ok(Vec::new())
        }
    }
}

fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_scalar_string(deserializer)?.unwrap_or_default())
}

fn optional_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let text = scalar_text(&value);
    if text.is_none() && !value.is_null() {
        log::debug!("Expected a scalar, found {}", describe(&value));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(yaml: &str) -> PodManifest {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_full_manifest() {
        let pod = manifest(
            r#"
apiVersion: v1
kind: Pod
metadata:
  name: web
  namespace: default
  labels:
    app: web
spec:
  os: linux
  containers:
    - name: web_server
      image: registry.bigbrother.io/app:1.0
      ports:
        - containerPort: 8080
          protocol: TCP
      resources:
        requests:
          memory: 64Mi
          cpu: "1"
        limits:
          cpu: 2
      readinessProbe:
        httpGet:
          path: /ready
          port: 8080
"#,
        );
        assert_eq!(pod.api_version, "v1");
        assert_eq!(pod.metadata.namespace.as_deref(), Some("default"));
        assert_eq!(pod.metadata.labels.get("app").map(String::as_str), Some("web"));
        assert_eq!(pod.spec.os, Some(OsField::Name("linux".into())));

        let container = &pod.spec.containers[0];
        assert_eq!(container.ports[0].container_port, Some(IntOrString::Int(8080)));
        assert_eq!(container.ports[0].protocol.as_deref(), Some("TCP"));
        assert_eq!(
            container.resources.requests.get("cpu"),
            Some(&Quantity::Str("1".into()))
        );
        assert_eq!(container.resources.limits.get("cpu").and_then(Quantity::as_integer), Some(2));
        assert!(container.liveness_probe.is_none());
        assert_eq!(container.readiness_probe.as_ref().unwrap().http_get.path, "/ready");
    }

    #[test]
    fn test_os_descriptor_shape() {
        let pod = manifest("spec:\n  os:\n    name: windows\n");
        assert_eq!(
            pod.spec.os,
            Some(OsField::Descriptor {
                name: "windows".into()
            })
        );
    }

    #[test]
    fn test_shape_mismatch_falls_back_to_default() {
        let pod = manifest(
            r#"
apiVersion: v1
metadata: just-a-string
spec:
  os: [linux]
  containers:
    - name: app
      ports: 8080
      resources: none
"#,
        );
        assert_eq!(pod.api_version, "v1");
        assert!(pod.metadata.name.is_empty());
        assert!(pod.spec.os.is_none());
        assert_eq!(pod.spec.containers.len(), 1);
        assert_eq!(pod.spec.containers[0].name, "app");
        assert!(pod.spec.containers[0].ports.is_empty());
        assert!(pod.spec.containers[0].resources.limits.is_empty());
    }

    #[test]
    fn test_malformed_container_keeps_sibling_indices() {
        let pod = manifest(
            r#"
spec:
  containers:
    - not-a-mapping
    - name: second
"#,
        );
        assert_eq!(pod.spec.containers.len(), 2);
        assert!(pod.spec.containers[0].name.is_empty());
        assert_eq!(pod.spec.containers[1].name, "second");
    }

    #[test]
    fn test_scalar_strings_accept_numbers() {
        let pod = manifest("apiVersion: 1\nkind: true\n");
        assert_eq!(pod.api_version, "1");
        assert_eq!(pod.kind, "true");
    }

    #[test]
    fn test_int_or_string() {
        assert_eq!(IntOrString::Int(80).as_int(), Some(80));
        assert_eq!(IntOrString::Str("443".into()).as_int(), Some(443));
        assert_eq!(IntOrString::Str("http".into()).as_int(), None);
    }

    #[test]
    fn test_quantity() {
        let q: Quantity = serde_yaml::from_str("4").unwrap();
        assert_eq!(q.as_integer(), Some(4));
        assert_eq!(q.render(), "4");

        let q: Quantity = serde_yaml::from_str("\"4\"").unwrap();
        assert_eq!(q, Quantity::Str("4".into()));
        assert_eq!(q.as_integer(), Some(4));

        let q: Quantity = serde_yaml::from_str("0.5").unwrap();
        assert_eq!(q.as_integer(), None);

        let q: Quantity = serde_yaml::from_str("abc").unwrap();
        assert_eq!(q.as_integer(), None);
        assert_eq!(q.render(), "abc");

        let q: Quantity = serde_yaml::from_str("true").unwrap();
        assert_eq!(q.render(), "true");
    }

    #[test]
    fn test_probes_iterator() {
        let pod = manifest(
            r#"
spec:
  containers:
    - name: app
      livenessProbe:
        httpGet:
          path: /live
"#,
        );
        let probes: Vec<_> = pod.spec.containers[0].probes().map(|(f, _)| f).collect();
        assert_eq!(probes, vec!["livenessProbe"]);
    }

    #[test]
    fn test_normalize_keys() {
        let value: Value = serde_yaml::from_str(
            r#"
1: one
true: yes
? [a, b]
: dropped
name: web
nested:
  - 8080: http
"#,
        )
        .unwrap();
        let normalized = normalize_keys(value);
        assert_eq!(normalized["1"], Value::from("one"));
        assert_eq!(normalized["true"], Value::from("yes"));
        assert_eq!(normalized["name"], Value::from("web"));
        assert_eq!(normalized["nested"][0]["8080"], Value::from("http"));
        assert_eq!(normalized.as_mapping().unwrap().len(), 4);
    }

    #[test]
    fn test_numeric_key_keeps_sibling_fields() {
        let value: Value =
            serde_yaml::from_str("name: web_server
image: app:1.0
42: x
").unwrap();
        let container: Container = serde_yaml::from_value(normalize_keys(value)).unwrap();
        assert_eq!(container.name, "web_server");
        assert_eq!(container.image, "app:1.0");
    }
}
