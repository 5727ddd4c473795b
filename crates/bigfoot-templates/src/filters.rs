//! Tera filters registered on every engine

use bigfoot_core::Attrs;
use bigfoot_core::html::flatatt as flatten_attrs;
use std::collections::HashMap;
use tera::{Result as TeraResult, Value};

/// Tera filter turning an object into ` key="value"` pairs
///
/// ```tera
/// <input{{ widget_attrs | flatatt | safe }}>
/// ```
pub fn flatatt(value: &Value, _args: &HashMap<String, Value>) -> TeraResult<Value> {
	match value {
		Value::Object(map) => Ok(Value::String(flatten_attrs(&Attrs::from(map.clone())))),
		Value::Null => Ok(Value::String(String::new())),
		_ => Err(tera::Error::msg("flatatt filter requires an object")),
	}
}
