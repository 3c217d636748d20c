//! # Data Bag — Path-Keyed Value Access
//!
//! The walker never traverses input data up front. It asks a [`DataSource`]
//! for the value at a path whenever a schema entry needs one. This module
//! defines that capability and implements it over a borrowed
//! `serde_json::Value`.
//!
//! ## Path Syntax
//!
//! Dot-separated object keys with optional `[n]` array indices:
//! `customer.address.city`, `lines[0].sku`, `matrix[1][2]`. A key that
//! literally contains a dot or bracket is still reachable because the full
//! path is first tried as a single key.
//!
//! ## Scalar Rendering
//!
//! | Value | `get_string` |
//! |---|---|
//! | string | verbatim |
//! | number, boolean | textual form (`42`, `1.5`, `true`) |
//! | null, absent | `""` |
//! | object, array | compact JSON text |
//!
//! Structured values are never blank, so an optional nested record is kept
//! even when it is empty.

use std::path::Path;

use serde_json::Value;

use crate::error::DocgenError;

/// Read-only, path-keyed accessor over semi-structured data.
///
/// Records returned by [`get_record`](DataSource::get_record) and
/// [`get_record_list`](DataSource::get_record_list) are accessors of the
/// same kind, rooted at the nested value.
pub trait DataSource: Sized {
    /// True when the path resolves to a non-null value.
    fn has(&self, path: &str) -> bool;

    /// Scalar text at the path; `""` when absent.
    fn get_string(&self, path: &str) -> String;

    /// Structured record at the path; an empty record when absent or not a
    /// record.
    fn get_record(&self, path: &str) -> Self;

    /// Records of the list at the path, in list order.
    fn get_record_list(&self, path: &str) -> Vec<Self>;

    /// True when the path is absent or resolves to an empty string. This is
    /// the condition under which an optional schema entry is elided.
    fn is_blank(&self, path: &str) -> bool {
        !self.has(path) || self.get_string(path).is_empty()
    }
}

/// [`DataSource`] over a borrowed JSON value.
#[derive(Debug, Clone, Copy)]
pub struct JsonData<'a> {
    value: Option<&'a Value>,
}

impl<'a> JsonData<'a> {
    /// Wrap a JSON value. Any value is accepted; non-object roots simply
    /// resolve no paths.
    pub fn new(value: &'a Value) -> Self {
        Self { value: Some(value) }
    }

    /// A record with no fields.
    pub fn empty() -> Self {
        Self { value: None }
    }

    /// The wrapped value, if any.
    pub fn value(&self) -> Option<&'a Value> {
        self.value
    }

    fn lookup(&self, path: &str) -> Option<&'a Value> {
        resolve_path(self.value?, path).filter(|v| !v.is_null())
    }
}

impl<'a> DataSource for JsonData<'a> {
    fn has(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    fn get_string(&self, path: &str) -> String {
        self.lookup(path).map(scalar_text).unwrap_or_default()
    }

    fn get_record(&self, path: &str) -> Self {
        match self.lookup(path) {
            Some(v) if v.is_object() => Self::new(v),
            _ => Self::empty(),
        }
    }

    fn get_record_list(&self, path: &str) -> Vec<Self> {
        match self.lookup(path) {
            Some(Value::Array(items)) => items
                .iter()
                .filter(|item| item.is_object())
                .map(Self::new)
                .collect(),
            Some(other) => {
                tracing::warn!(
                    path,
                    found = crate::error::json_type_name(other),
                    "record list path does not hold a list; treating as empty"
                );
                Vec::new()
            }
            None => Vec::new(),
        }
    }
}

/// Resolve a dot/index path against a JSON value.
///
/// Returns `None` for an empty path or when any segment does not resolve.
pub fn resolve_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    // Whole path as a literal key first.
    if let Some(v) = root.as_object().and_then(|m| m.get(path)) {
        return Some(v);
    }

    let mut current = root;
    for segment in path.split('.') {
        let (name, mut rest) = match segment.find('[') {
            Some(i) => (&segment[..i], &segment[i..]),
            None => (segment, ""),
        };
        if !name.is_empty() {
            current = current.as_object()?.get(name)?;
        }
        while let Some(stripped) = rest.strip_prefix('[') {
            let close = stripped.find(']')?;
            let index: usize = stripped[..close].parse().ok()?;
            current = current.as_array()?.get(index)?;
            rest = &stripped[close + 1..];
        }
        if !rest.is_empty() {
            return None;
        }
    }
    Some(current)
}

/// Textual form of a JSON value used for element text and attributes.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Schemas and data bags use only the JSON-compatible subset of YAML. Tags
/// are ignored and scalar mapping keys are stringified. Mapping order is
/// kept, which fixes the walk order of YAML schemas.
pub fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> = seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}

/// Parse YAML text into a JSON value.
pub fn parse_yaml(content: &str) -> Result<Value, String> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| format!("invalid YAML: {e}"))?;
    yaml_to_json_value(&yaml).map_err(|e| format!("YAML-to-JSON conversion failed: {e}"))
}

/// Load a YAML or JSON file into a JSON value.
///
/// The format is chosen by extension: `.yaml`/`.yml` for YAML, anything
/// else is parsed as JSON.
pub fn load_value_file(path: &Path) -> Result<Value, DocgenError> {
    let load_error = |reason: String| DocgenError::Load {
        path: path.display().to_string(),
        reason,
    };

    let content =
        std::fs::read_to_string(path).map_err(|e| load_error(format!("cannot read file: {e}")))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "yaml" | "yml" => parse_yaml(&content).map_err(load_error),
        _ => serde_json::from_str(&content).map_err(|e| load_error(format!("invalid JSON: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": "7",
            "qty": 42,
            "price": 1.5,
            "paid": true,
            "note": "",
            "gone": null,
            "customer": { "name": "Ada", "address": { "city": "Lagos" } },
            "lines": [ { "sku": "A1" }, "stray", { "sku": "B2" } ],
            "matrix": [[1, 2], [3, 4]],
            "a.b": "literal"
        })
    }

    #[test]
    fn has_distinguishes_absent_and_null() {
        let v = sample();
        let data = JsonData::new(&v);
        assert!(data.has("id"));
        assert!(data.has("note"));
        assert!(!data.has("gone"));
        assert!(!data.has("missing"));
    }

    #[test]
    fn scalars_render_as_text() {
        let v = sample();
        let data = JsonData::new(&v);
        assert_eq!(data.get_string("id"), "7");
        assert_eq!(data.get_string("qty"), "42");
        assert_eq!(data.get_string("price"), "1.5");
        assert_eq!(data.get_string("paid"), "true");
        assert_eq!(data.get_string("gone"), "");
        assert_eq!(data.get_string("missing"), "");
    }

    #[test]
    fn structured_values_are_never_blank() {
        let v = json!({ "empty": {}, "list": [] });
        let data = JsonData::new(&v);
        assert_eq!(data.get_string("empty"), "{}");
        assert!(!data.is_blank("empty"));
        assert!(!data.is_blank("list"));
    }

    #[test]
    fn blank_means_absent_or_empty_string() {
        let v = sample();
        let data = JsonData::new(&v);
        assert!(data.is_blank("note"));
        assert!(data.is_blank("gone"));
        assert!(data.is_blank("missing"));
        assert!(!data.is_blank("id"));
        assert!(!data.is_blank("qty"));
    }

    #[test]
    fn dotted_and_indexed_paths() {
        let v = sample();
        let data = JsonData::new(&v);
        assert_eq!(data.get_string("customer.address.city"), "Lagos");
        assert_eq!(data.get_string("lines[2].sku"), "B2");
        assert_eq!(data.get_string("matrix[1][0]"), "3");
        assert_eq!(data.get_string("lines[9].sku"), "");
        assert_eq!(data.get_string("lines[x]"), "");
        assert_eq!(data.get_string("a.b"), "literal");
    }

    #[test]
    fn empty_path_resolves_nothing() {
        let v = sample();
        assert!(resolve_path(&v, "").is_none());
    }

    #[test]
    fn get_record_descends_into_objects_only() {
        let v = sample();
        let data = JsonData::new(&v);
        let customer = data.get_record("customer");
        assert_eq!(customer.get_string("name"), "Ada");
        assert_eq!(customer.get_record("address").get_string("city"), "Lagos");

        let scalar = data.get_record("id");
        assert!(scalar.value().is_none());
        assert_eq!(scalar.get_string("anything"), "");
    }

    #[test]
    fn record_list_keeps_order_and_skips_non_records() {
        let v = sample();
        let data = JsonData::new(&v);
        let skus: Vec<String> = data
            .get_record_list("lines")
            .iter()
            .map(|r| r.get_string("sku"))
            .collect();
        assert_eq!(skus, vec!["A1", "B2"]);
        assert!(data.get_record_list("id").is_empty());
        assert!(data.get_record_list("missing").is_empty());
    }

    #[test]
    fn empty_record_resolves_nothing() {
        let data = JsonData::empty();
        assert!(!data.has("id"));
        assert!(data.get_record_list("lines").is_empty());
    }

    #[test]
    fn yaml_to_json_conversion_keeps_mapping_order() {
        let json_value = parse_yaml(
            r#"
zeta: 1
alpha: "two"
12: twelve
nested:
  - one
  - true
"#,
        )
        .unwrap();

        let keys: Vec<&String> = json_value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "12", "nested"]);
        assert_eq!(json_value["alpha"], "two");
        assert_eq!(json_value["12"], "twelve");
        assert_eq!(json_value["nested"][1], true);
    }

    #[test]
    fn load_value_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let yaml_path = dir.path().join("data.yaml");
        let json_path = dir.path().join("data.json");
        std::fs::write(&yaml_path, "id: \"1\"\n").unwrap();
        std::fs::write(&json_path, r#"{"id": "2"}"#).unwrap();

        assert_eq!(load_value_file(&yaml_path).unwrap()["id"], "1");
        assert_eq!(load_value_file(&json_path).unwrap()["id"], "2");
    }

    #[test]
    fn load_value_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();

        let err = load_value_file(&bad).unwrap_err();
        match err {
            DocgenError::Load { path, reason } => {
                assert!(path.ends_with("bad.json"));
                assert!(reason.contains("invalid JSON"));
            }
            other => panic!("Expected Load error, got: {other}"),
        }

        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            load_value_file(&missing),
            Err(DocgenError::Load { .. })
        ));
    }
}
