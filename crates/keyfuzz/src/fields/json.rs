//! `Fields` for `serde_json` documents

use serde_json::{Map, Number, Value};

use super::{Field, FieldValue, Fields};

fn number_field(n: &Number) -> Field<'_> {
    if let Some(v) = n.as_u64() {
        Field::UInt(v)
    } else if let Some(v) = n.as_i64() {
        Field::Int(v)
    } else {
        Field::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn value_field(value: &Value) -> Field<'_> {
    match value {
        Value::String(s) => Field::Text(s),
        Value::Number(n) => number_field(n),
        Value::Bool(b) => Field::Bool(*b),
        // Objects walk further; null and arrays have no fields and no scalar value
        Value::Object(_) | Value::Array(_) | Value::Null => Field::Record(value),
    }
}

impl Fields for Value {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        match self {
            Value::Object(map) => map.get(name).map(value_field),
            _ => None,
        }
    }

    fn as_value(&self) -> Option<FieldValue> {
        match self {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => value_field(self).to_value(),
            _ => None,
        }
    }
}

impl Fields for Map<String, Value> {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        self.get(name).map(value_field)
    }
}
