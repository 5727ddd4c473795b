//! Elements rendered through named templates

use bigfoot_core::html::flatatt;
use bigfoot_core::{
	Attr, Attrs, Context, ElementKind, RenderContext, Renderable, Result,
};
use bigfoot_templates::RequestContext;
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;

/// State shared by every template-backed element
#[derive(Debug, Clone, Default)]
pub struct TemplateBase {
	pub(crate) template_name: Option<Attr<String>>,
	pub(crate) context: Context,
	pub(crate) request: Option<Arc<RequestContext>>,
	pub(crate) attrs: Attr<Attrs>,
	pub(crate) data: Option<Value>,
}

impl TemplateBase {
	/// The data item for this render: the context's, else the bound one
	pub fn effective_data<'s>(&'s self, ctx: &RenderContext<'s>) -> Option<&'s Value> {
		ctx.data().or(self.data.as_ref())
	}

	/// Explicit template name, else `{prefix}/{stem}.html` for `kind`
	pub fn template_name(
		&self,
		kind: ElementKind,
		ctx: &RenderContext<'_>,
		data: Option<&Value>,
	) -> Result<String> {
		match &self.template_name {
			Some(name) => name.resolve("template_name", data),
			None => Ok(ctx.settings().default_template(kind.stem())),
		}
	}

	/// Builds the template context
	///
	/// Starts from the element's own context, lets the caller's extra variables
	/// override it, adds `additions` (already keyed `{stem}_{attr}`) and the
	/// flattened `attrs`, then merges request variables if a request is attached.
	pub fn context_data(
		&self,
		ctx: &RenderContext<'_>,
		data: Option<&Value>,
		additions: Vec<(String, Value)>,
	) -> Result<Context> {
		let mut context = self.context.clone();
		context.extend(ctx.extra().clone());
		context.extend(additions);

		let attrs = self.attrs.resolve("attrs", data)?;
		context.insert("attrs".to_string(), Value::String(flatatt(&attrs)));

		if let Some(request) = &self.request {
			request.apply(&mut context);
		}
		Ok(context)
	}

	/// Renders `template` with `context`
	pub fn render_template(
		&self,
		ctx: &RenderContext<'_>,
		template: &str,
		context: &Context,
	) -> Result<String> {
		ctx.renderer().render_to_string(template, context)
	}
}

/// Context key for an element option, e.g. `form_method`
pub fn context_key(kind: ElementKind, attr: &str) -> String {
	format!("{}_{}", kind.stem(), attr)
}

/// Builder methods shared by template-backed elements
pub trait TemplateOptions: Sized {
	/// Mutable access to the shared state
	fn base_mut(&mut self) -> &mut TemplateBase;

	/// Renders through `name` instead of the default template
	fn with_template_name(mut self, name: impl Into<Attr<String>>) -> Self {
		self.base_mut().template_name = Some(name.into());
		self
	}

	/// Replaces the element's own template context
	fn with_context(mut self, context: Context) -> Self {
		self.base_mut().context = context;
		self
	}

	/// Adds one variable to the element's own template context
	fn with_var(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.base_mut().context.insert(name.into(), value.into());
		self
	}

	/// Attaches the request, merging its variables into the template context
	fn with_request(mut self, request: impl Into<Arc<RequestContext>>) -> Self {
		self.base_mut().request = Some(request.into());
		self
	}

	/// Sets the attributes exposed to the template as `attrs`
	fn with_attrs(mut self, attrs: impl Into<Attr<Attrs>>) -> Self {
		self.base_mut().attrs = attrs.into();
		self
	}

	/// Binds a data item used when the render context carries none
	fn with_data(mut self, data: Value) -> Self {
		self.base_mut().data = Some(data);
		self
	}
}

/// An element drawn entirely by a template
///
/// # Examples
///
/// ```
/// use bigfoot_core::{Attrs, Renderable};
/// use bigfoot_elements::{TemplateElement, TemplateOptions};
/// use bigfoot_templates::TemplateEngine;
///
/// let engine = TemplateEngine::with_defaults().unwrap();
/// let panel = TemplateElement::new()
///     .with_attrs(Attrs::from([("class", "panel")]))
///     .with_var("content", "<p>Hi</p>");
/// assert_eq!(panel.to_html(&engine).unwrap(), r#"<div class="panel"><p>Hi</p></div>"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateElement {
	base: TemplateBase,
}

impl TemplateElement {
	/// An element using `{prefix}/templateelement.html`
	pub fn new() -> Self {
		Self::default()
	}

	/// An element using `template_name`
	pub fn with_template(template_name: impl Into<Attr<String>>) -> Self {
		Self::new().with_template_name(template_name)
	}
}

impl TemplateOptions for TemplateElement {
	fn base_mut(&mut self) -> &mut TemplateBase {
		&mut self.base
	}
}

impl Renderable for TemplateElement {
	fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
		let data = self.base.effective_data(ctx);
		let template = self.base.template_name(self.kind(), ctx, data)?;
		let context = self.base.context_data(ctx, data, Vec::new())?;
		self.base.render_template(ctx, &template, &context)
	}

	fn kind(&self) -> ElementKind {
		ElementKind::Template
	}

	fn data(&self) -> Option<&Value> {
		self.base.data.as_ref()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
