//! Flattened JSON envelope codec
//!
//! A resource travels on the wire as a single JSON object carrying the
//! identity fields `type`, `name`, and `mesh` next to the spec fields, not as
//! a nested structure. Lists are objects with an `items` array of the same
//! shape; any other envelope fields a server adds (totals, next links) are
//! ignored.

use serde_json::{Map, Value};

use crate::model::ResourceMeta;

/// Envelope field names reserved for identity; everything else in the object
/// belongs to the spec.
const FIELD_TYPE: &str = "type";
const FIELD_NAME: &str = "name";
const FIELD_MESH: &str = "mesh";

/// Failures local to envelope encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("failed to encode or decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, got {got}")]
    NotAnObject { got: &'static str },

    #[error("expected an array of items, got {got}")]
    ItemsNotAnArray { got: &'static str },

    #[error("spec must serialize to a JSON object or null, got {got}")]
    NonObjectSpec { got: &'static str },

    #[error("resource type mismatch: expected {expected:?}, got {actual:?}")]
    TypeMismatch { expected: String, actual: String },
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Encode a resource into the flattened envelope.
///
/// Identity fields win over spec fields with the same name; `mesh` is
/// omitted when empty so global kinds serialize without a scope.
pub fn marshal(
    resource_type: &str,
    meta: &ResourceMeta,
    spec: Value,
) -> Result<Vec<u8>, EnvelopeError> {
    let mut fields = match spec {
        Value::Object(fields) => fields,
        Value::Null => Map::new(),
        other => {
            return Err(EnvelopeError::NonObjectSpec {
                got: json_kind(&other),
            })
        }
    };

    fields.insert(FIELD_TYPE.to_string(), Value::String(resource_type.to_string()));
    fields.insert(FIELD_NAME.to_string(), Value::String(meta.name.clone()));
    if meta.mesh.is_empty() {
        fields.remove(FIELD_MESH);
    } else {
        fields.insert(FIELD_MESH.to_string(), Value::String(meta.mesh.clone()));
    }

    Ok(serde_json::to_vec(&Value::Object(fields))?)
}

/// Decode one flattened envelope object into identity plus spec fields.
///
/// An absent or empty `type` tag is tolerated (the caller already knows what
/// it asked for); a conflicting one is an error.
pub fn unmarshal(body: &[u8], expected_type: &str) -> Result<(ResourceMeta, Value), EnvelopeError> {
    let value: Value = serde_json::from_slice(body)?;
    split_envelope(value, expected_type)
}

/// Decode a list response: `{"items": [envelope, ...], ...}`.
///
/// A missing `items` field decodes as an empty list. Item order is the
/// server's order.
pub fn unmarshal_list(
    body: &[u8],
    expected_type: &str,
) -> Result<Vec<(ResourceMeta, Value)>, EnvelopeError> {
    let value: Value = serde_json::from_slice(body)?;
    let mut fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(EnvelopeError::NotAnObject {
                got: json_kind(&other),
            })
        }
    };

    let items = match fields.remove("items") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(EnvelopeError::ItemsNotAnArray {
                got: json_kind(&other),
            })
        }
    };

    items
        .into_iter()
        .map(|item| split_envelope(item, expected_type))
        .collect()
}

fn split_envelope(
    value: Value,
    expected_type: &str,
) -> Result<(ResourceMeta, Value), EnvelopeError> {
    let mut fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(EnvelopeError::NotAnObject {
                got: json_kind(&other),
            })
        }
    };

    if let Some(tag) = fields.remove(FIELD_TYPE) {
        let actual = tag.as_str().unwrap_or_default();
        if !actual.is_empty() && actual != expected_type {
            return Err(EnvelopeError::TypeMismatch {
                expected: expected_type.to_string(),
                actual: actual.to_string(),
            });
        }
    }

    let name = take_string(&mut fields, FIELD_NAME);
    let mesh = take_string(&mut fields, FIELD_MESH);

    Ok((
        ResourceMeta {
            name,
            mesh,
            version: String::new(),
        },
        Value::Object(fields),
    ))
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> String {
    match fields.remove(key) {
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}
