//! Form definitions bound to submitted data

use crate::bound_field::BoundField;
use crate::field::Field;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

/// A set of fields, the data bound to them and their errors
///
/// A form also remembers which fields were already rendered so the same field
/// cannot silently appear twice on a page. The marker lives as long as the
/// form: call [`Form::reset_rendered_fields`] before drawing a page that uses
/// the form again.
#[derive(Debug, Default)]
pub struct Form {
	prefix: String,
	fields: Vec<Field>,
	data: Map<String, Value>,
	errors: HashMap<String, Vec<String>>,
	rendered_fields: Mutex<HashSet<String>>,
}

impl Form {
	/// Creates an empty, unbound form
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a field
	pub fn field(mut self, field: Field) -> Self {
		self.fields.push(field);
		self
	}

	/// Sets the prefix used in HTML names and ids
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Binds submitted data
	pub fn with_data(mut self, data: Map<String, Value>) -> Self {
		self.data = data;
		self
	}

	/// Records an error against `field`
	pub fn with_error(mut self, field: impl Into<String>, error: impl Into<String>) -> Self {
		self.errors.entry(field.into()).or_default().push(error.into());
		self
	}

	/// Prefix used in HTML names and ids
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Field definitions in declaration order
	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	/// Field names in declaration order
	pub fn field_names(&self) -> Vec<&str> {
		self.fields.iter().map(|f| f.name.as_str()).collect()
	}

	/// Looks up a field definition
	pub fn get_field(&self, name: &str) -> Option<&Field> {
		self.fields.iter().find(|f| f.name == name)
	}

	/// Whether data was bound to the form
	pub fn is_bound(&self) -> bool {
		!self.data.is_empty()
	}

	/// Submitted value for `name`
	pub fn value(&self, name: &str) -> Option<&Value> {
		self.data.get(name)
	}

	/// Errors recorded for `name`
	pub fn errors_for(&self, name: &str) -> &[String] {
		self.errors.get(name).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Binds field `name` to this form's data
	pub fn bound_field(&self, name: &str) -> Option<BoundField<'_>> {
		self.get_field(name).map(|field| BoundField::new(self, field))
	}

	/// Marks `name` as rendered, returning `false` if it already was
	pub fn mark_rendered(&self, name: &str) -> bool {
		self.rendered_fields.lock().insert(name.to_string())
	}

	/// Whether `name` was rendered since the last reset
	pub fn is_rendered(&self, name: &str) -> bool {
		self.rendered_fields.lock().contains(name)
	}

	/// Forgets every rendered field, starting a new render pass
	pub fn reset_rendered_fields(&self) {
		self.rendered_fields.lock().clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn contact_form() -> Form {
		Form::new()
			.field(Field::text("name"))
			.field(Field::text("email"))
	}

	#[test]
	fn test_field_lookup() {
		let form = contact_form();
		assert_eq!(form.field_names(), vec!["name", "email"]);
		assert!(form.get_field("email").is_some());
		assert!(form.get_field("phone").is_none());
	}

	#[test]
	fn test_rendered_tracking() {
		let form = contact_form();
		assert!(form.mark_rendered("name"));
		assert!(!form.mark_rendered("name"));
		assert!(form.is_rendered("name"));

		form.reset_rendered_fields();
		assert!(!form.is_rendered("name"));
	}

	#[test]
	fn test_bound_data_and_errors() {
		let mut data = Map::new();
		data.insert("name".to_string(), json!("Ann"));
		let form = contact_form()
			.with_data(data)
			.with_error("email", "Enter a valid email address.");

		assert!(form.is_bound());
		assert_eq!(form.value("name"), Some(&json!("Ann")));
		assert_eq!(form.errors_for("email").len(), 1);
		assert!(form.errors_for("name").is_empty());
	}
}
