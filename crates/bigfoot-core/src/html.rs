//! Markup helpers: escaping and HTML attribute lists

use serde::{Deserialize, Serialize};

/// Escapes text for use in element content or quoted attribute values
///
/// # Examples
///
/// ```
/// use bigfoot_core::html::escape;
///
/// assert_eq!(escape("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
/// ```
pub fn escape(text: &str) -> String {
	html_escape::encode_quoted_attribute(text).into_owned()
}

/// Ordered HTML attributes
///
/// Inserting an existing key replaces its value in place, so the rendered
/// order is the order in which keys were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "serde_json::Map<String, serde_json::Value>", into = "serde_json::Map<String, serde_json::Value>")]
pub struct Attrs(Vec<(String, String)>);

impl Attrs {
	/// Creates an empty attribute list
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Sets `key` to `value`, replacing any previous value
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let value = value.into();
		match self.0.iter_mut().find(|(k, _)| *k == key) {
			Some(entry) => entry.1 = value,
			None => self.0.push((key, value)),
		}
	}

	/// Builder form of [`Attrs::insert`]
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(key, value);
		self
	}

	/// Returns the value stored for `key`
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Merges `other` into this list, `other` winning on conflicts
	pub fn extend(&mut self, other: &Attrs) {
		for (key, value) in other.iter() {
			self.insert(key, value);
		}
	}

	/// Iterates over `(key, value)` pairs in order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of attributes
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether no attribute is set
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Renders `key="value"` pairs separated by single spaces
	///
	/// Keys are written as given; values are escaped.
	pub fn render(&self) -> String {
		self.iter()
			.map(|(key, value)| format!("{}=\"{}\"", key, escape(value)))
			.collect::<Vec<_>>()
			.join(" ")
	}
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Attrs::new();
		for (key, value) in iter {
			attrs.insert(key, value);
		}
		attrs
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attrs
where
	K: Into<String>,
	V: Into<String>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl From<serde_json::Map<String, serde_json::Value>> for Attrs {
	fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
		map.into_iter()
			.map(|(key, value)| (key, value_to_text(&value)))
			.collect()
	}
}

impl From<Attrs> for serde_json::Map<String, serde_json::Value> {
	fn from(attrs: Attrs) -> Self {
		attrs
			.0
			.into_iter()
			.map(|(key, value)| (key, serde_json::Value::String(value)))
			.collect()
	}
}

/// Converts an attribute mapping into a string of ` key="value"` pairs
///
/// Every pair is preceded by a space, underscores in keys become dashes and
/// values are escaped. An empty mapping yields an empty string.
///
/// # Examples
///
/// ```
/// use bigfoot_core::html::{flatatt, Attrs};
///
/// let attrs = Attrs::from([("data_id", "7"), ("class", "row")]);
/// assert_eq!(flatatt(&attrs), r#" data-id="7" class="row""#);
/// ```
pub fn flatatt(attrs: &Attrs) -> String {
	attrs
		.iter()
		.map(|(key, value)| format!(" {}=\"{}\"", key.replace('_', "-"), escape(value)))
		.collect()
}

/// Plain text form of a JSON value
///
/// Strings are returned without quotes and `null` becomes the empty string.
pub fn value_to_text(value: &serde_json::Value) -> String {
	match value {
		serde_json::Value::Null => String::new(),
		serde_json::Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_insert_replaces_in_place() {
		let mut attrs = Attrs::from([("class", "a"), ("id", "x")]);
		attrs.insert("class", "b");
		assert_eq!(attrs.render(), r#"class="b" id="x""#);
	}

	#[test]
	fn test_render_escapes_values() {
		let attrs = Attrs::new().with("title", "\"quoted\" <tag>");
		assert_eq!(attrs.render(), r#"title="&quot;quoted&quot; &lt;tag&gt;""#);
	}

	#[test]
	fn test_flatatt_empty() {
		assert_eq!(flatatt(&Attrs::new()), "");
	}

	#[test]
	fn test_attrs_from_json_object() {
		let map = json!({"colspan": 2, "class": "wide"});
		let attrs: Attrs = serde_json::from_value(map).unwrap();
		assert_eq!(attrs.get("colspan"), Some("2"));
		assert_eq!(attrs.get("class"), Some("wide"));
	}

	#[test]
	fn test_value_to_text() {
		assert_eq!(value_to_text(&json!(null)), "");
		assert_eq!(value_to_text(&json!("x")), "x");
		assert_eq!(value_to_text(&json!(3)), "3");
		assert_eq!(value_to_text(&json!(true)), "true");
	}
}
