//! Rendering a single form field through a template

use crate::form::Form;
use bigfoot_core::html::flatatt;
use bigfoot_core::{Attrs, Context, Error, Result, Settings, TemplateRenderer};
use serde_json::Value;

/// Options for [`render_field`]
#[derive(Debug, Clone, Default)]
pub struct FieldRenderOptions {
	/// Log instead of failing on unknown or already rendered fields
	pub fail_silently: bool,
	/// CSS class for the `<label>`
	pub label_class: Option<String>,
	/// Extra widget attributes
	pub attrs: Attrs,
}

impl FieldRenderOptions {
	/// Options following the `fail_silently` setting
	pub fn from_settings(settings: &Settings) -> Self {
		Self {
			fail_silently: settings.fail_silently,
			..Self::default()
		}
	}
}

/// Renders field `field` of `form` with `template`
///
/// The field is recorded as rendered on the form. Asking for an unknown field
/// or for a field that was already rendered is an error unless
/// `options.fail_silently` is set, in which case a warning is logged; an
/// unknown field then renders as an empty string.
///
/// The template receives `field` (see [`crate::BoundFieldView`]),
/// `labelclass` and `flat_attrs` on top of `context`.
pub fn render_field(
	field: &str,
	form: &Form,
	mut context: Context,
	template: &str,
	renderer: &dyn TemplateRenderer,
	options: &FieldRenderOptions,
) -> Result<String> {
	let bound = match form.bound_field(field) {
		Some(bound) => Some(bound),
		None if options.fail_silently => {
			tracing::warn!(field, "Could not resolve form field");
			None
		}
		None => {
			return Err(Error::FieldNotFound {
				field: field.to_string(),
			});
		}
	};

	if !form.mark_rendered(field) {
		if options.fail_silently {
			tracing::warn!(field, "A field should only be rendered once");
		} else {
			return Err(Error::FieldAlreadyRendered {
				field: field.to_string(),
			});
		}
	}

	let Some(bound) = bound else {
		return Ok(String::new());
	};

	context.insert(
		"field".to_string(),
		serde_json::to_value(bound.view(&options.attrs))?,
	);
	context.insert(
		"labelclass".to_string(),
		options
			.label_class
			.clone()
			.map(Value::String)
			.unwrap_or(Value::Null),
	);
	context.insert(
		"flat_attrs".to_string(),
		Value::String(flatatt(&options.attrs)),
	);

	renderer.render_to_string(template, &context)
}
