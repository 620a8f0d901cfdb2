//! Loosely-typed product records.
//!
//! Records arrive as arbitrary JSON. Field lookups go through [`Fields`], which
//! classifies every value as [`FieldValue::Absent`], [`FieldValue::WrongType`]
//! or [`FieldValue::Valid`] instead of failing on unexpected shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ModelError, Result};

/// Outcome of a typed field lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<T> {
    /// The field is missing or `null`.
    Absent,
    /// The field exists but holds a value of another type.
    WrongType,
    /// The field holds a value of the requested type.
    Valid(T),
}

impl<T> FieldValue<T> {
    /// Returns the contained value when the lookup succeeded.
    pub fn valid(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Absent | Self::WrongType => None,
        }
    }
}

/// Typed read-only view over a JSON object.
///
/// A view built from a non-object value behaves like an empty object, so every
/// lookup on it reports [`FieldValue::Absent`].
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            map: value.as_object(),
        }
    }

    /// Raw value of a field, treating `null` as missing.
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.map
            .and_then(|map| map.get(name))
            .filter(|value| !value.is_null())
    }

    pub fn text(&self, name: &str) -> FieldValue<&'a str> {
        match self.get(name) {
            None => FieldValue::Absent,
            Some(Value::String(text)) => FieldValue::Valid(text.as_str()),
            Some(_) => FieldValue::WrongType,
        }
    }

    /// Integers, floats and booleans count as numbers; `true` reads as 1, `false` as 0.
    pub fn number(&self, name: &str) -> FieldValue<f64> {
        match self.get(name) {
            None => FieldValue::Absent,
            Some(Value::Number(number)) => number
                .as_f64()
                .map_or(FieldValue::WrongType, FieldValue::Valid),
            Some(Value::Bool(flag)) => FieldValue::Valid(f64::from(u8::from(*flag))),
            Some(_) => FieldValue::WrongType,
        }
    }

    pub fn object(&self, name: &str) -> FieldValue<Fields<'a>> {
        match self.get(name) {
            None => FieldValue::Absent,
            Some(value @ Value::Object(_)) => FieldValue::Valid(Fields::new(value)),
            Some(_) => FieldValue::WrongType,
        }
    }
}

/// One product as received from the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductRecord(Value);

impl ProductRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn fields(&self) -> Fields<'_> {
        Fields::new(&self.0)
    }

    /// The raw `id` value, `Value::Null` when missing.
    pub fn id(&self) -> &Value {
        self.fields().get("id").unwrap_or(&Value::Null)
    }

    /// The raw `title` value, `Value::Null` when missing.
    pub fn title(&self) -> &Value {
        self.fields().get("title").unwrap_or(&Value::Null)
    }
}

/// Parse a catalog response body into records.
///
/// The top-level document must be a JSON array. Elements are kept as-is, whatever
/// their type.
pub fn parse_records(body: &str) -> Result<Vec<ProductRecord>> {
    let document: Value = serde_json::from_str(body)?;
    match document {
        Value::Array(items) => Ok(items.into_iter().map(ProductRecord::new).collect()),
        other => Err(ModelError::NotAList(json_type_name(&other))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_is_absent() {
        let value = json!({"title": null});
        assert_eq!(Fields::new(&value).text("title"), FieldValue::Absent);
    }

    #[test]
    fn number_lookup_accepts_integers_floats_and_booleans() {
        let value = json!({"a": 3, "b": -2.5, "c": "4", "d": true, "f": false});
        let fields = Fields::new(&value);
        assert_eq!(fields.number("a"), FieldValue::Valid(3.0));
        assert_eq!(fields.number("b"), FieldValue::Valid(-2.5));
        assert_eq!(fields.number("c"), FieldValue::WrongType);
        assert_eq!(fields.number("d"), FieldValue::Valid(1.0));
        assert_eq!(fields.number("f"), FieldValue::Valid(0.0));
        assert_eq!(fields.number("e"), FieldValue::Absent);
    }

    #[test]
    fn non_object_record_has_no_fields() {
        let record = ProductRecord::new(json!([1, 2, 3]));
        assert_eq!(record.fields().text("title"), FieldValue::Absent);
        assert_eq!(record.id(), &Value::Null);
    }

    #[test]
    fn nested_object_lookup() {
        let value = json!({"rating": {"rate": 4.1, "count": 120}});
        let rating = Fields::new(&value).object("rating").valid().unwrap();
        assert_eq!(rating.number("rate"), FieldValue::Valid(4.1));
    }
}
