use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::trello::changetracker::ChangeTracker;
use crate::trello::error::{Result, TrelloError};
use crate::trello::schema::Schema;
use crate::trello::value::Value;

/// Field name to current value.
pub type Attributes = BTreeMap<&'static str, Value>;

/// Field storage backing every resource.
///
/// Holds one value per schema field and the entity's change tracker.
/// [`Record::attributes`] borrows the live map, so it always reflects the
/// latest assignments.
#[derive(Debug, Clone)]
pub struct Record {
    schema: &'static Schema,
    values: Attributes,
    changes: ChangeTracker,
}

impl Record {
    /// Create a record with every schema field set to null.
    pub fn new(schema: &'static Schema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|spec| (spec.name, Value::Null))
            .collect();
        Self {
            schema,
            values,
            changes: ChangeTracker::new(),
        }
    }

    /// Schema this record was created for.
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Current value of a field, `None` if the schema has no such field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Assign a field by name, recording the change.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let name = self.schema.resolve(name)?;
        self.assign(name, value.into());
        Ok(())
    }

    pub(crate) fn assign(&mut self, name: &'static str, value: Value) {
        let old = self
            .values
            .insert(name, value.clone())
            .unwrap_or_default();
        self.changes.record(name, old, value);
    }

    pub(crate) fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub(crate) fn flag(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub(crate) fn date(&self, name: &str) -> Option<DateTime<Utc>> {
        self.get(name).and_then(Value::as_date)
    }

    /// Live field name keyed view of the current values.
    pub fn attributes(&self) -> &Attributes {
        &self.values
    }

    /// Pending and most recently committed changes.
    pub fn changes(&self) -> &ChangeTracker {
        &self.changes
    }

    /// Check that every required field is non-blank.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&'static str> = self
            .schema
            .required_fields()
            .filter(|name| self.values.get(name).is_none_or(Value::is_blank))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(TrelloError::Validation {
                resource: self.schema.name,
                missing,
            })
        }
    }

    /// Replace every field from a wire payload.
    ///
    /// The payload is decoded completely before anything is replaced, so a
    /// failure leaves the record untouched. Pending changes are dropped since
    /// the payload is server truth.
    pub fn hydrate(&mut self, json: &serde_json::Value) -> Result<()> {
        let values = self.decode(json)?;
        self.values = values;
        self.changes.discard();
        Ok(())
    }

    /// Decode a wire payload into field values without touching the record.
    pub fn decode(&self, json: &serde_json::Value) -> Result<Attributes> {
        let object = json.as_object().ok_or_else(|| TrelloError::Deserialization {
            resource: self.schema.name,
            reason: format!("expected a JSON object, got {json}"),
        })?;

        let mut values = Attributes::new();
        for spec in self.schema.fields {
            let value = spec
                .decode(object.get(spec.json_key))
                .map_err(|reason| TrelloError::Deserialization {
                    resource: self.schema.name,
                    reason,
                })?;
            values.insert(spec.name, value);
        }
        Ok(values)
    }

    /// Take over values confirmed by the server after a save.
    ///
    /// Only valid with no pending changes; the previous-change record is kept.
    pub(crate) fn adopt(&mut self, values: Attributes) {
        debug_assert!(!self.changes.is_dirty());
        self.values = values;
    }

    /// Wire payload of every non-null field.
    pub fn to_json(&self) -> serde_json::Value {
        self.schema.to_wire(
            self.values
                .iter()
                .filter(|(_, value)| **value != Value::Null)
                .map(|(name, value)| (*name, value)),
        )
    }

    pub(crate) fn commit(&mut self) {
        self.changes.commit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trello::schema::{FieldKind, FieldSpec};
    use serde_json::json;

    static SCHEMA: Schema = Schema {
        name: "widget",
        path: "widgets",
        key: "id",
        fields: &[
            FieldSpec::new("id", "id", FieldKind::Id).required(),
            FieldSpec::new("name", "name", FieldKind::Text).required(),
            FieldSpec::new("full_name", "fullName", FieldKind::Text),
        ],
    };

    #[test]
    fn validate_lists_every_missing_field() {
        let record = Record::new(&SCHEMA);
        match record.validate() {
            Err(TrelloError::Validation { resource, missing }) => {
                assert_eq!(resource, "widget");
                assert_eq!(missing, vec!["id", "name"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn validate_treats_whitespace_as_missing() {
        let mut record = Record::new(&SCHEMA);
        record.set("id", "abc").unwrap();
        record.set("name", "  ").unwrap();
        let err = record.validate().unwrap_err();
        assert!(matches!(err, TrelloError::Validation { ref missing, .. } if missing == &vec!["name"]));
    }

    #[test]
    fn set_records_changes_and_rejects_unknown_fields() {
        let mut record = Record::new(&SCHEMA);
        record.set("full_name", "J Smith").unwrap();
        assert!(record.changes().is_changed("full_name"));
        assert!(record.set("nickname", "js").is_err());
    }

    #[test]
    fn hydrate_maps_wire_keys_without_tracking() {
        let mut record = Record::new(&SCHEMA);
        record
            .hydrate(&json!({ "id": "abc", "name": "w", "fullName": "J Smith", "extra": 1 }))
            .unwrap();
        assert_eq!(record.text("full_name"), Some("J Smith"));
        assert!(!record.changes().is_dirty());
    }

    #[test]
    fn failed_hydrate_leaves_values_in_place() {
        let mut record = Record::new(&SCHEMA);
        record.hydrate(&json!({ "id": "abc", "name": "w" })).unwrap();
        let err = record.hydrate(&json!({ "id": "xyz", "name": 7 })).unwrap_err();
        assert!(matches!(err, TrelloError::Deserialization { .. }));
        assert_eq!(record.text("id"), Some("abc"));
    }

    #[test]
    fn decode_leaves_the_record_untouched() {
        let mut record = Record::new(&SCHEMA);
        record.set("name", "local").unwrap();

        let values = record.decode(&json!({ "id": "abc", "name": "remote" })).unwrap();

        assert_eq!(values["name"], Value::from("remote"));
        assert_eq!(record.text("name"), Some("local"));
        assert!(record.changes().is_changed("name"));
    }

    #[test]
    fn attributes_track_later_assignments() {
        let mut record = Record::new(&SCHEMA);
        assert_eq!(record.attributes()["full_name"], Value::Null);
        record.set("full_name", "J Smith").unwrap();
        assert_eq!(record.attributes()["full_name"], Value::from("J Smith"));
    }

    #[test]
    fn to_json_skips_null_fields() {
        let mut record = Record::new(&SCHEMA);
        record.set("name", "w").unwrap();
        assert_eq!(record.to_json(), json!({ "name": "w" }));
    }
}
