//! Attribute schemas.
//!
//! Every resource declares a static [`Schema`]: the fields it recognizes,
//! the JSON key each one maps to on the wire, and which ones must be
//! present before the resource may be saved.

use chrono::{DateTime, Utc};

use crate::trello::error::{Result, TrelloError};
use crate::trello::value::Value;

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Opaque server-assigned identifier.
    Id,
    /// Free text.
    Text,
    /// Absolute URL.
    Url,
    /// Boolean flag (e.g. `closed`).
    Flag,
    /// RFC 3339 timestamp.
    Date,
}

/// Specification for a single field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name used by the API of this crate (e.g. `full_name`).
    pub name: &'static str,
    /// Key of the field in the Trello JSON payload (e.g. `fullName`).
    pub json_key: &'static str,
    /// Value kind, used to decode the wire value.
    pub kind: FieldKind,
    /// Whether the field must be non-empty for the resource to validate.
    pub required: bool,
}

impl FieldSpec {
    /// Create an optional field spec.
    pub const fn new(name: &'static str, json_key: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            json_key,
            kind,
            required: false,
        }
    }

    /// Mark the field as mandatory.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Convert a wire value into a field value.
    ///
    /// A missing key and an explicit `null` both map to [`Value::Null`].
    pub fn decode(&self, raw: Option<&serde_json::Value>) -> std::result::Result<Value, String> {
        let raw = match raw {
            None | Some(serde_json::Value::Null) => return Ok(Value::Null),
            Some(raw) => raw,
        };

        match self.kind {
            FieldKind::Id | FieldKind::Text | FieldKind::Url => raw
                .as_str()
                .map(|s| Value::String(s.to_string()))
                .ok_or_else(|| format!("field '{}' expected a string, got {}", self.json_key, raw)),
            FieldKind::Flag => raw
                .as_bool()
                .map(Value::Boolean)
                .ok_or_else(|| format!("field '{}' expected a boolean, got {}", self.json_key, raw)),
            FieldKind::Date => {
                let text = raw.as_str().ok_or_else(|| {
                    format!("field '{}' expected a timestamp, got {}", self.json_key, raw)
                })?;
                DateTime::parse_from_rfc3339(text)
                    .map(|date| Value::Date(date.with_timezone(&Utc)))
                    .map_err(|e| format!("field '{}' is not a valid timestamp: {e}", self.json_key))
            }
        }
    }
}

/// Static description of one resource type.
#[derive(Debug)]
pub struct Schema {
    /// Singular resource name used in messages (e.g. `member`).
    pub name: &'static str,
    /// Plural path segment (e.g. `members`).
    pub path: &'static str,
    /// Field whose value scopes relationship paths (`id` unless the
    /// resource family is addressed by an alternate key).
    pub key: &'static str,
    /// Recognized fields in declaration order.
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Look up a field spec by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Names of all mandatory fields.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.name)
    }

    /// Resolve a caller-supplied name to the schema's static name.
    pub fn resolve(&self, name: &str) -> Result<&'static str> {
        self.field(name)
            .map(|spec| spec.name)
            .ok_or_else(|| TrelloError::UnknownField {
                resource: self.name,
                field: name.to_string(),
            })
    }

    /// Build a JSON object keyed by wire names from field-name keyed values.
    pub fn to_wire<'a, 'b>(
        &self,
        values: impl IntoIterator<Item = (&'a str, &'b Value)>,
    ) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        for (name, value) in values {
            if let Some(spec) = self.field(name) {
                object.insert(spec.json_key.to_string(), value.to_json());
            }
        }
        serde_json::Value::Object(object)
    }
}
