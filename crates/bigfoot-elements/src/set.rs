//! Collections of elements

use crate::template::{TemplateBase, TemplateOptions, context_key};
use bigfoot_core::{Attr, ElementKind, RenderContext, Renderable, Result};
use serde_json::Value;
use std::any::Any;

/// A list of elements drawn through `{prefix}/elementset.html`
///
/// Every child is rendered with the set's data item unless it has its own,
/// and with the set's own context as extra variables. The template receives
/// the rendered children as `elements`.
///
/// # Examples
///
/// ```
/// use bigfoot_core::{Accessor, Renderable};
/// use bigfoot_elements::{Element, ElementSet, TemplateOptions};
/// use bigfoot_templates::TemplateEngine;
/// use serde_json::json;
///
/// let engine = TemplateEngine::with_defaults().unwrap();
/// let set = ElementSet::new()
///     .element(Element::with_tag("<dt/>").inner(Accessor::new("name")))
///     .element(Element::with_tag("<dd/>").inner(Accessor::new("role")))
///     .with_data(json!({"name": "Ann", "role": "admin"}));
/// assert_eq!(set.to_html(&engine).unwrap(), "<dt>Ann</dt><dd>admin</dd>");
/// ```
#[derive(Default)]
pub struct ElementSet {
	base: TemplateBase,
	elements: Vec<Box<dyn Renderable>>,
}

impl ElementSet {
	/// An empty set
	pub fn new() -> Self {
		Self::default()
	}

	/// A set of already boxed elements
	pub fn from_elements(elements: Vec<Box<dyn Renderable>>) -> Self {
		Self {
			base: TemplateBase::default(),
			elements,
		}
	}

	/// Appends an element
	pub fn element(mut self, element: impl Renderable) -> Self {
		self.elements.push(Box::new(element));
		self
	}

	/// Appends an element in place
	pub fn push(&mut self, element: impl Renderable) {
		self.elements.push(Box::new(element));
	}

	/// Number of direct children
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// Whether the set has no children
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Renders the children and the set template for `kind`
	pub(crate) fn render_as(
		&self,
		kind: ElementKind,
		ctx: &RenderContext<'_>,
		additions: Vec<(String, Value)>,
	) -> Result<String> {
		let data = self.base.effective_data(ctx);

		let mut rendered = Vec::with_capacity(self.elements.len());
		for element in &self.elements {
			let child_ctx = ctx.scoped(element.data().or(data), self.base.context.clone());
			rendered.push(Value::String(element.render(&child_ctx)?));
		}

		let template = self.base.template_name(kind, ctx, data)?;
		let mut context = self.base.context_data(ctx, data, additions)?;
		context.insert("elements".to_string(), Value::Array(rendered));
		tracing::debug!(kind = ?kind, template = %template, children = self.elements.len(), "Rendering element set");
		self.base.render_template(ctx, &template, &context)
	}
}

impl std::fmt::Debug for ElementSet {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ElementSet")
			.field("base", &self.base)
			.field(
				"elements",
				&self.elements.iter().map(|e| e.kind()).collect::<Vec<_>>(),
			)
			.finish()
	}
}

impl TemplateOptions for ElementSet {
	fn base_mut(&mut self) -> &mut TemplateBase {
		&mut self.base
	}
}

impl Renderable for ElementSet {
	fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
		self.render_as(self.kind(), ctx, Vec::new())
	}

	fn kind(&self) -> ElementKind {
		ElementKind::ElementSet
	}

	fn data(&self) -> Option<&Value> {
		self.base.data.as_ref()
	}

	fn children(&self) -> &[Box<dyn Renderable>] {
		&self.elements
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// A group of form elements drawn through `{prefix}/formfieldset.html`
#[derive(Debug, Default)]
pub struct FormFieldSet {
	set: ElementSet,
	legend: Option<Attr<String>>,
}

impl FormFieldSet {
	/// An empty field set
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an element
	pub fn element(mut self, element: impl Renderable) -> Self {
		self.set.push(element);
		self
	}

	/// Sets the `<legend>` text
	pub fn legend(mut self, legend: impl Into<Attr<String>>) -> Self {
		self.legend = Some(legend.into());
		self
	}
}

impl From<ElementSet> for FormFieldSet {
	fn from(set: ElementSet) -> Self {
		Self { set, legend: None }
	}
}

impl TemplateOptions for FormFieldSet {
	fn base_mut(&mut self) -> &mut TemplateBase {
		self.set.base_mut()
	}
}

impl Renderable for FormFieldSet {
	fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
		let mut additions = Vec::new();
		if let Some(legend) = &self.legend {
			let data = self.set.base.effective_data(ctx);
			additions.push((
				context_key(self.kind(), "legend"),
				Value::String(legend.resolve("legend", data)?),
			));
		}
		self.set.render_as(self.kind(), ctx, additions)
	}

	fn kind(&self) -> ElementKind {
		ElementKind::FormFieldSet
	}

	fn data(&self) -> Option<&Value> {
		self.set.data()
	}

	fn children(&self) -> &[Box<dyn Renderable>] {
		self.set.children()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// A `<form>` wrapping its elements, drawn through `{prefix}/form.html`
///
/// The template receives `form_method` (default `POST`), `form_action`
/// (default empty) and `form_allow_files` (default `false`).
#[derive(Debug)]
pub struct Form {
	set: ElementSet,
	method: Attr<String>,
	action: Attr<String>,
	allow_files: Attr<bool>,
}

impl Form {
	/// An empty form posting to the current URL
	pub fn new() -> Self {
		Self {
			set: ElementSet::new(),
			method: Attr::from("POST"),
			action: Attr::from(""),
			allow_files: Attr::Static(false),
		}
	}

	/// Appends an element
	pub fn element(mut self, element: impl Renderable) -> Self {
		self.set.push(element);
		self
	}

	/// Sets the HTTP method
	pub fn method(mut self, method: impl Into<Attr<String>>) -> Self {
		self.method = method.into();
		self
	}

	/// Sets the action URL
	pub fn action(mut self, action: impl Into<Attr<String>>) -> Self {
		self.action = action.into();
		self
	}

	/// Switches the form to multipart encoding
	pub fn allow_files(mut self, allow_files: impl Into<Attr<bool>>) -> Self {
		self.allow_files = allow_files.into();
		self
	}
}

impl Default for Form {
	fn default() -> Self {
		Self::new()
	}
}

impl From<ElementSet> for Form {
	fn from(set: ElementSet) -> Self {
		Self {
			set,
			..Self::new()
		}
	}
}

impl TemplateOptions for Form {
	fn base_mut(&mut self) -> &mut TemplateBase {
		self.set.base_mut()
	}
}

impl Renderable for Form {
	fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
		let data = self.set.base.effective_data(ctx);
		let kind = self.kind();
		let additions = vec![
			(
				context_key(kind, "method"),
				Value::String(self.method.resolve("method", data)?),
			),
			(
				context_key(kind, "action"),
				Value::String(self.action.resolve("action", data)?),
			),
			(
				context_key(kind, "allow_files"),
				Value::Bool(self.allow_files.resolve("allow_files", data)?),
			),
		];
		self.set.render_as(kind, ctx, additions)
	}

	fn kind(&self) -> ElementKind {
		ElementKind::Form
	}

	fn data(&self) -> Option<&Value> {
		self.set.data()
	}

	fn children(&self) -> &[Box<dyn Renderable>] {
		self.set.children()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
