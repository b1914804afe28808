//! The generic entity protocol shared by every Trello resource.

use crate::trello::changetracker::ChangeTracker;
use crate::trello::error::Result;
use crate::trello::record::{Attributes, Record};
use crate::trello::schema::Schema;

/// A typed, schema-backed view of one server-side resource.
pub trait Resource: Sized {
    /// Static schema describing the resource's fields and path.
    const SCHEMA: &'static Schema;

    /// Wrap an existing record.
    fn from_record(record: Record) -> Self;
    /// Field storage of this instance.
    fn record(&self) -> &Record;
    /// Mutable field storage; assignments through it are tracked.
    fn record_mut(&mut self) -> &mut Record;

    /// An instance with every field null, for building a new resource.
    fn empty() -> Self {
        Self::from_record(Record::new(Self::SCHEMA))
    }

    /// Hydrate a fresh instance from a wire payload.
    fn from_json(json: &serde_json::Value) -> Result<Self> {
        let mut resource = Self::empty();
        resource.update_fields(json)?;
        Ok(resource)
    }

    /// Replace every recognized field from a wire payload.
    ///
    /// This is a resync with server state, so nothing is recorded as a
    /// local change.
    fn update_fields(&mut self, json: &serde_json::Value) -> Result<&mut Self> {
        self.record_mut().hydrate(json)?;
        Ok(self)
    }

    /// Field name keyed view of the current values.
    fn attributes(&self) -> &Attributes {
        self.record().attributes()
    }

    /// Pending and most recently committed changes.
    fn changes(&self) -> &ChangeTracker {
        self.record().changes()
    }

    /// Fail with every required field that is blank.
    fn validate(&self) -> Result<()> {
        self.record().validate()
    }

    /// Server-assigned identifier, once persisted. Blank ids count as unset.
    fn identifier(&self) -> Option<&str> {
        self.record().text("id").filter(|id| !id.trim().is_empty())
    }

    /// Value used to address the resource in relationship paths.
    fn path_key(&self) -> Option<&str> {
        self.record().text(Self::SCHEMA.key)
    }
}

/// Declare a resource struct, its schema table and typed accessors.
///
/// Each field line reads `name: Kind => "wireKey"`, optionally followed by
/// `[required]`.
macro_rules! resource {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            name: $label:literal,
            path: $path:literal,
            key: $key:literal,
            fields: {
                $( $field:ident : $kind:ident => $json:literal $([$flag:ident])? ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            record: $crate::trello::record::Record,
        }

        impl $name {
            /// Create an empty instance, ready to be populated before its first save.
            pub fn new() -> Self {
                <Self as $crate::trello::resource::Resource>::empty()
            }

            $( $crate::trello::resource::accessor!($kind, $field); )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::trello::resource::Resource for $name {
            const SCHEMA: &'static $crate::trello::schema::Schema = &$crate::trello::schema::Schema {
                name: $label,
                path: $path,
                key: $key,
                fields: &[
                    $(
                        $crate::trello::schema::FieldSpec::new(
                            stringify!($field),
                            $json,
                            $crate::trello::schema::FieldKind::$kind,
                        ) $(.$flag())?
                    ),*
                ],
            };

            fn from_record(record: $crate::trello::record::Record) -> Self {
                Self { record }
            }

            fn record(&self) -> &$crate::trello::record::Record {
                &self.record
            }

            fn record_mut(&mut self) -> &mut $crate::trello::record::Record {
                &mut self.record
            }
        }
    };
}

/// Typed getter and tracked setter for one field, chosen by kind.
macro_rules! accessor {
    (Id, $field:ident) => {
        $crate::trello::resource::accessor!(@text $field);
    };
    (Text, $field:ident) => {
        $crate::trello::resource::accessor!(@text $field);
    };
    (Url, $field:ident) => {
        $crate::trello::resource::accessor!(@text $field);
    };
    (Flag, $field:ident) => {
        #[doc = concat!("Current `", stringify!($field), "` flag.")]
        pub fn $field(&self) -> Option<bool> {
            self.record.flag(stringify!($field))
        }

        ::paste::paste! {
            #[doc = concat!("Set `", stringify!($field), "`, recording the change.")]
            pub fn [<set_ $field>](&mut self, value: bool) {
                self.record.assign(
                    stringify!($field),
                    $crate::trello::value::Value::Boolean(value),
                );
            }
        }
    };
    (Date, $field:ident) => {
        #[doc = concat!("Current `", stringify!($field), "` timestamp.")]
        pub fn $field(&self) -> Option<::chrono::DateTime<::chrono::Utc>> {
            self.record.date(stringify!($field))
        }

        ::paste::paste! {
            #[doc = concat!("Set `", stringify!($field), "`, recording the change.")]
            pub fn [<set_ $field>](&mut self, value: ::chrono::DateTime<::chrono::Utc>) {
                self.record.assign(
                    stringify!($field),
                    $crate::trello::value::Value::Date(value),
                );
            }
        }
    };
    (@text $field:ident) => {
        #[doc = concat!("Current `", stringify!($field), "` value.")]
        pub fn $field(&self) -> Option<&str> {
            self.record.text(stringify!($field))
        }

        ::paste::paste! {
            #[doc = concat!("Set `", stringify!($field), "`, recording the change.")]
            pub fn [<set_ $field>](&mut self, value: impl Into<String>) {
                self.record.assign(
                    stringify!($field),
                    $crate::trello::value::Value::String(value.into()),
                );
            }
        }
    };
}

pub(crate) use accessor;
pub(crate) use resource;
