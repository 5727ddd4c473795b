//! Elements drawing fields of a bound form

use crate::template::{TemplateBase, TemplateOptions, context_key};
use bigfoot_core::{Attr, Attrs, ElementKind, RenderContext, Renderable, Result};
use bigfoot_forms::{FieldRenderOptions, Form, render_field};
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;

/// Field rendering options taken from the renderer's settings
fn field_options(
	ctx: &RenderContext<'_>,
	label_class: &Option<String>,
	widget_attrs: &Attrs,
) -> FieldRenderOptions {
	FieldRenderOptions {
		label_class: label_class.clone(),
		attrs: widget_attrs.clone(),
		..FieldRenderOptions::from_settings(ctx.settings())
	}
}

/// One field of a form, drawn with `{prefix}/formfield.html`
///
/// Rendering marks the field as rendered on its form; a second render of the
/// same field fails unless `fail_silently` is set.
#[derive(Debug)]
pub struct FormField {
	base: TemplateBase,
	form: Arc<Form>,
	name: Attr<String>,
	show_label: Attr<bool>,
	label_class: Option<String>,
	widget_attrs: Attrs,
}

impl FormField {
	/// The field `name` of `form`, with its label shown
	pub fn new(form: &Arc<Form>, name: impl Into<Attr<String>>) -> Self {
		Self {
			base: TemplateBase::default(),
			form: Arc::clone(form),
			name: name.into(),
			show_label: Attr::Static(true),
			label_class: None,
			widget_attrs: Attrs::new(),
		}
	}

	/// Shows or hides the label
	pub fn show_label(mut self, show_label: impl Into<Attr<bool>>) -> Self {
		self.show_label = show_label.into();
		self
	}

	/// CSS class of the label
	pub fn label_class(mut self, label_class: impl Into<String>) -> Self {
		self.label_class = Some(label_class.into());
		self
	}

	/// Extra attributes for the widget
	pub fn widget_attrs(mut self, attrs: Attrs) -> Self {
		self.widget_attrs = attrs;
		self
	}

	/// The form this field belongs to
	pub fn form(&self) -> &Arc<Form> {
		&self.form
	}

	/// The field name, possibly looked up from the data item
	pub fn name(&self) -> &Attr<String> {
		&self.name
	}
}

impl TemplateOptions for FormField {
	fn base_mut(&mut self) -> &mut TemplateBase {
		&mut self.base
	}
}

impl Renderable for FormField {
	fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
		let data = self.base.effective_data(ctx);
		let name = self.name.resolve("name", data)?;
		let show_label = self.show_label.resolve("show_label", data)?;

		let template = self.base.template_name(self.kind(), ctx, data)?;
		let context = self.base.context_data(
			ctx,
			data,
			vec![(context_key(self.kind(), "show_label"), Value::Bool(show_label))],
		)?;
		let options = field_options(ctx, &self.label_class, &self.widget_attrs);
		render_field(&name, &self.form, context, &template, ctx.renderer(), &options)
	}

	fn kind(&self) -> ElementKind {
		ElementKind::FormField
	}

	fn data(&self) -> Option<&Value> {
		self.base.data.as_ref()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Several fields of one form, drawn one after another
///
/// Each field goes through the field template (`{prefix}/formfield.html`
/// unless a template name is set) and the results are concatenated.
#[derive(Debug)]
pub struct FormFields {
	base: TemplateBase,
	form: Arc<Form>,
	fields: Vec<String>,
	show_label: Attr<bool>,
	label_class: Option<String>,
}

impl FormFields {
	/// The named fields of `form`, in the given order
	pub fn new<I, S>(form: &Arc<Form>, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			base: TemplateBase::default(),
			form: Arc::clone(form),
			fields: fields.into_iter().map(Into::into).collect(),
			show_label: Attr::Static(true),
			label_class: None,
		}
	}

	/// Shows or hides the labels
	pub fn show_label(mut self, show_label: impl Into<Attr<bool>>) -> Self {
		self.show_label = show_label.into();
		self
	}

	/// CSS class of the labels
	pub fn label_class(mut self, label_class: impl Into<String>) -> Self {
		self.label_class = Some(label_class.into());
		self
	}

	/// Names of the fields drawn
	pub fn fields(&self) -> &[String] {
		&self.fields
	}
}

impl TemplateOptions for FormFields {
	fn base_mut(&mut self) -> &mut TemplateBase {
		&mut self.base
	}
}

impl Renderable for FormFields {
	fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
		let data = self.base.effective_data(ctx);
		let show_label = self.show_label.resolve("show_label", data)?;
		let template = self.base.template_name(ElementKind::FormField, ctx, data)?;
		let context = self.base.context_data(
			ctx,
			data,
			vec![(
				context_key(ElementKind::FormField, "show_label"),
				Value::Bool(show_label),
			)],
		)?;
		let options = field_options(ctx, &self.label_class, &Attrs::new());

		let mut html = String::new();
		for field in &self.fields {
			html.push_str(&render_field(
				field,
				&self.form,
				context.clone(),
				&template,
				ctx.renderer(),
				&options,
			)?);
		}
		Ok(html)
	}

	fn kind(&self) -> ElementKind {
		ElementKind::FormFields
	}

	fn data(&self) -> Option<&Value> {
		self.base.data.as_ref()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
