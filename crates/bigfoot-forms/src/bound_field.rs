use crate::field::{Field, Widget};
use crate::form::Form;
use bigfoot_core::Attrs;
use serde::Serialize;
use serde_json::Value;

/// BoundField represents a field bound to form data
#[derive(Debug, Clone, Copy)]
pub struct BoundField<'a> {
	form: &'a Form,
	field: &'a Field,
}

/// What templates see as `field`
#[derive(Debug, Clone, Serialize)]
pub struct BoundFieldView {
	/// Field name
	pub name: String,
	/// HTML name attribute
	pub html_name: String,
	/// HTML id attribute
	pub id_for_label: String,
	/// Label text
	pub label: String,
	/// Current value
	pub value: Value,
	/// Validation errors
	pub errors: Vec<String>,
	/// Help text
	pub help_text: Option<String>,
	/// Whether the field is required
	pub required: bool,
	/// Whether the widget is hidden
	pub is_hidden: bool,
	/// Rendered widget markup
	pub widget: String,
}

impl<'a> BoundField<'a> {
	/// Binds `field` to the data of `form`
	pub fn new(form: &'a Form, field: &'a Field) -> Self {
		Self { form, field }
	}

	/// Get the field name
	pub fn name(&self) -> &str {
		&self.field.name
	}

	/// Get the HTML name attribute (with prefix)
	///
	/// # Examples
	///
	/// ```
	/// use bigfoot_forms::{Field, Form};
	///
	/// let form = Form::new().field(Field::text("email"));
	/// assert_eq!(form.bound_field("email").unwrap().html_name(), "email");
	///
	/// let form = Form::new().with_prefix("user").field(Field::text("email"));
	/// assert_eq!(form.bound_field("email").unwrap().html_name(), "user-email");
	/// ```
	pub fn html_name(&self) -> String {
		if self.form.prefix().is_empty() {
			self.field.name.clone()
		} else {
			format!("{}-{}", self.form.prefix(), self.field.name)
		}
	}

	/// Get the HTML id attribute
	pub fn id_for_label(&self) -> String {
		format!("id_{}", self.html_name())
	}

	/// Get the field label
	pub fn label(&self) -> String {
		self.field.label_text()
	}

	/// Submitted value, falling back to the field's initial value
	pub fn value(&self) -> Option<&'a Value> {
		self.form
			.value(&self.field.name)
			.or(self.field.initial.as_ref())
	}

	/// Get field errors
	pub fn errors(&self) -> &'a [String] {
		self.form.errors_for(&self.field.name)
	}

	/// Check if field has errors
	pub fn has_errors(&self) -> bool {
		!self.errors().is_empty()
	}

	/// Get the widget
	pub fn widget(&self) -> &'a Widget {
		&self.field.widget
	}

	/// Renders the widget, `extra_attrs` overriding the field's own attributes
	pub fn as_widget(&self, extra_attrs: &Attrs) -> String {
		let mut attrs = self.field.attrs.clone();
		attrs.extend(extra_attrs);
		if self.field.required && !self.field.widget.is_hidden() {
			attrs.insert("required", "required");
		}
		self.field
			.widget
			.render(&self.html_name(), &self.id_for_label(), self.value(), &attrs)
	}

	/// Snapshot used as the `field` template variable
	pub fn view(&self, extra_attrs: &Attrs) -> BoundFieldView {
		BoundFieldView {
			name: self.name().to_string(),
			html_name: self.html_name(),
			id_for_label: self.id_for_label(),
			label: self.label(),
			value: self.value().cloned().unwrap_or(Value::Null),
			errors: self.errors().to_vec(),
			help_text: self.field.help_text.clone(),
			required: self.field.required,
			is_hidden: self.field.widget.is_hidden(),
			widget: self.as_widget(extra_attrs),
		}
	}
}
