//! Schema-driven filtering of outgoing changes.
//!
//! A [`Schema`] records, per field, which [`Intent`]s may send it. [`cast`]
//! drops every change the schema does not permit for the given intent, and
//! recurses into nested objects (and arrays of objects) that have their own
//! schema.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

use crate::clients::Params;

/// The operation a set of changes is being prepared for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Intent {
    /// Creating a new object.
    Create,
    /// Reading an object.
    Retrieve,
    /// Updating an existing object.
    Update,
}

#[derive(Clone, Debug, PartialEq)]
struct Field {
    intents: BTreeSet<Intent>,
    nested: Option<Schema>,
}

/// Describes which fields of an object may be sent for which intents.
///
/// # Example
///
/// ```rust
/// use stripe_api::request::{cast, Intent, Schema};
/// use stripe_api::clients::Params;
/// use serde_json::json;
///
/// let schema = Schema::new()
///     .field("email", &[Intent::Create, Intent::Update])
///     .field("created", &[Intent::Retrieve])
///     .nested("address", &[Intent::Create], Schema::new().field("city", &[Intent::Create]));
///
/// let mut changes = Params::new();
/// changes.insert("email".to_string(), json!("jane@example.com"));
/// changes.insert("created".to_string(), json!(1_700_000_000));
/// changes.insert("address".to_string(), json!({"city": "Berlin", "planet": "Earth"}));
///
/// let cast = cast(&changes, &schema, Intent::Create);
/// assert_eq!(cast.get("email"), Some(&json!("jane@example.com")));
/// assert_eq!(cast.get("created"), None);
/// assert_eq!(cast.get("address"), Some(&json!({"city": "Berlin"})));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    fields: BTreeMap<String, Field>,
}

impl Schema {
    /// Creates an empty schema, which permits nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scalar field permitted for `intents`.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, intents: &[Intent]) -> Self {
        self.fields.insert(
            name.into(),
            Field {
                intents: intents.iter().copied().collect(),
                nested: None,
            },
        );
        self
    }

    /// Adds a field whose object value is itself filtered by `schema`.
    #[must_use]
    pub fn nested(mut self, name: impl Into<String>, intents: &[Intent], schema: Self) -> Self {
        self.fields.insert(
            name.into(),
            Field {
                intents: intents.iter().copied().collect(),
                nested: Some(schema),
            },
        );
        self
    }

    /// Returns `true` if `name` may be sent for `intent`.
    #[must_use]
    pub fn permits(&self, name: &str, intent: Intent) -> bool {
        self.fields
            .get(name)
            .is_some_and(|field| field.intents.contains(&intent))
    }

    /// Returns `true` if the schema declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Keeps only the changes `schema` permits for `intent`.
#[must_use]
pub fn cast(changes: &Params, schema: &Schema, intent: Intent) -> Params {
    changes
        .iter()
        .filter_map(|(key, value)| {
            cast_field(schema, key, value, intent).map(|value| (key.clone(), value))
        })
        .collect()
}

fn cast_field(schema: &Schema, key: &str, value: &Value, intent: Intent) -> Option<Value> {
    let field = schema.fields.get(key)?;
    if !field.intents.contains(&intent) {
        return None;
    }

    Some(match &field.nested {
        Some(nested) => cast_nested(value, nested, intent),
        None => value.clone(),
    })
}

fn cast_nested(value: &Value, schema: &Schema, intent: Intent) -> Value {
    match value {
        Value::Object(map) => Value::Object(cast_object(map, schema, intent)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| cast_nested(item, schema, intent))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn cast_object(map: &Map<String, Value>, schema: &Schema, intent: Intent) -> Map<String, Value> {
    map.iter()
        .filter_map(|(key, value)| {
            cast_field(schema, key, value, intent).map(|value| (key.clone(), value))
        })
        .collect()
}
