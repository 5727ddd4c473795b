//! The renderable contract shared by all elements

use crate::error::{Error, Result};
use crate::settings::Settings;
use serde_json::Value;
use std::any::Any;

/// Template context: variable name to value
pub type Context = serde_json::Map<String, Value>;

/// Renders named templates
///
/// Implemented by the Tera engine in `bigfoot-templates`; elements only ever
/// talk to this trait.
pub trait TemplateRenderer {
	/// Renders `template_name` with `context`
	fn render_to_string(&self, template_name: &str, context: &Context) -> Result<String>;

	/// Whether a template with this name is registered
	fn has_template(&self, template_name: &str) -> bool;

	/// Settings the renderer was built with
	fn settings(&self) -> &Settings;
}

/// Everything an element needs while rendering
///
/// The current data item travels here instead of living on the element, so
/// the same element can be rendered for different rows without mutation.
#[derive(Clone)]
pub struct RenderContext<'a> {
	renderer: &'a dyn TemplateRenderer,
	data: Option<&'a Value>,
	extra: Context,
}

impl<'a> RenderContext<'a> {
	/// A context without data item or extra variables
	pub fn new(renderer: &'a dyn TemplateRenderer) -> Self {
		Self {
			renderer,
			data: None,
			extra: Context::new(),
		}
	}

	/// Sets the current data item
	pub fn with_data(mut self, data: &'a Value) -> Self {
		self.data = Some(data);
		self
	}

	/// Sets the extra template variables
	pub fn with_extra(mut self, extra: Context) -> Self {
		self.extra = extra;
		self
	}

	/// Adds one extra template variable
	pub fn with_var(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.extra.insert(name.into(), value.into());
		self
	}

	/// Derives a context for rendering a nested element
	pub fn scoped<'b>(&self, data: Option<&'b Value>, extra: Context) -> RenderContext<'b>
	where
		'a: 'b,
	{
		RenderContext {
			renderer: self.renderer,
			data,
			extra,
		}
	}

	/// The template renderer
	pub fn renderer(&self) -> &'a dyn TemplateRenderer {
		self.renderer
	}

	/// The renderer's settings
	pub fn settings(&self) -> &'a Settings {
		self.renderer.settings()
	}

	/// The current data item, if any
	pub fn data(&self) -> Option<&'a Value> {
		self.data
	}

	/// Extra template variables supplied by the caller
	pub fn extra(&self) -> &Context {
		&self.extra
	}
}

/// The element variants, used for searching and default template names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
	/// A single HTML tag
	Element,
	/// An `<a>` tag with an `href`
	Link,
	/// A submit `<input>`
	Button,
	/// Anything rendered through a template
	Template,
	/// One form field
	FormField,
	/// Several fields of one form
	FormFields,
	/// A collection of elements
	ElementSet,
	/// A collection of form elements
	FormFieldSet,
	/// A `<form>` wrapping its elements
	Form,
	/// A data table
	Table,
}

impl ElementKind {
	/// The kind this one specialises
	pub fn parent(self) -> Option<ElementKind> {
		match self {
			Self::Link | Self::Button => Some(Self::Element),
			Self::FormField | Self::FormFields | Self::ElementSet | Self::Table => {
				Some(Self::Template)
			}
			Self::FormFieldSet => Some(Self::ElementSet),
			Self::Form => Some(Self::FormFieldSet),
			Self::Element | Self::Template => None,
		}
	}

	/// Whether this kind is `other` or specialises it
	///
	/// # Examples
	///
	/// ```
	/// use bigfoot_core::ElementKind;
	///
	/// assert!(ElementKind::Form.is_a(ElementKind::ElementSet));
	/// assert!(!ElementKind::ElementSet.is_a(ElementKind::Form));
	/// ```
	pub fn is_a(self, other: ElementKind) -> bool {
		let mut current = Some(self);
		while let Some(kind) = current {
			if kind == other {
				return true;
			}
			current = kind.parent();
		}
		false
	}

	/// Lowercase name used for template names and context keys
	pub fn stem(self) -> &'static str {
		match self {
			Self::Element => "element",
			Self::Link => "link",
			Self::Button => "button",
			Self::Template => "templateelement",
			Self::FormField => "formfield",
			Self::FormFields => "formfields",
			Self::ElementSet => "elementset",
			Self::FormFieldSet => "formfieldset",
			Self::Form => "form",
			Self::Table => "table",
		}
	}
}

/// Criteria for [`Renderable::find`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
	/// Match descendants that are-a this kind
	pub element_kind: Option<ElementKind>,
}

impl SearchCriteria {
	/// Criteria matching one kind
	pub fn kind(kind: ElementKind) -> Self {
		Self {
			element_kind: Some(kind),
		}
	}
}

/// Something that renders itself to markup
///
/// Rendering is not re-entrant for a given form: fields remember that they
/// were rendered (see `bigfoot_forms::Form::reset_rendered_fields`).
pub trait Renderable: Any {
	/// Renders this element
	fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
		let _ = ctx;
		Err(Error::ImproperlyConfigured(format!(
			"{:?} must implement render",
			self.kind()
		)))
	}

	/// The variant of this element
	fn kind(&self) -> ElementKind;

	/// The data item bound to this element at construction
	fn data(&self) -> Option<&Value> {
		None
	}

	/// Direct children of a collection, empty for leaves
	fn children(&self) -> &[Box<dyn Renderable>] {
		&[]
	}

	/// Upcast used by [`Renderable::find_all`]
	fn as_any(&self) -> &dyn Any;

	/// Renders with no data item and no extra context
	fn to_html(&self, renderer: &dyn TemplateRenderer) -> Result<String> {
		self.render(&RenderContext::new(renderer))
	}

	/// Depth-first search over all descendants
	///
	/// Nested collections are always searched, including collections that
	/// matched themselves. Results keep pre-order.
	fn find(&self, criteria: &SearchCriteria) -> Result<Vec<&dyn Renderable>> {
		let kind = criteria.element_kind.ok_or_else(|| {
			Error::InvalidSearch("at least one search parameter must be specified".to_string())
		})?;
		let mut matches = Vec::new();
		collect_descendants(self.children(), &mut |child| child.kind().is_a(kind), &mut matches);
		Ok(matches)
	}

	/// Every descendant of concrete type `T`, depth-first
	fn find_all<T: Renderable>(&self) -> Vec<&T>
	where
		Self: Sized,
	{
		let mut matches = Vec::new();
		collect_descendants(
			self.children(),
			&mut |child| child.as_any().is::<T>(),
			&mut matches,
		);
		matches
			.into_iter()
			.filter_map(|child| child.as_any().downcast_ref::<T>())
			.collect()
	}
}

fn collect_descendants<'a>(
	children: &'a [Box<dyn Renderable>],
	matches_kind: &mut dyn FnMut(&dyn Renderable) -> bool,
	out: &mut Vec<&'a dyn Renderable>,
) {
	for child in children {
		let child: &'a dyn Renderable = child.as_ref();
		if matches_kind(child) {
			out.push(child);
		}
		collect_descendants(child.children(), matches_kind, out);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct Unimplemented;

	impl Renderable for Unimplemented {
		fn kind(&self) -> ElementKind {
			ElementKind::Template
		}

		fn as_any(&self) -> &dyn Any {
			self
		}
	}

	struct NullRenderer(Settings);

	impl TemplateRenderer for NullRenderer {
		fn render_to_string(&self, _: &str, _: &Context) -> Result<String> {
			Ok(String::new())
		}

		fn has_template(&self, _: &str) -> bool {
			false
		}

		fn settings(&self) -> &Settings {
			&self.0
		}
	}

	#[test]
	fn test_base_render_is_misconfigured() {
		let renderer = NullRenderer(Settings::default());
		let result = Unimplemented.to_html(&renderer);
		assert!(matches!(result, Err(Error::ImproperlyConfigured(_))));
	}

	#[test]
	fn test_find_requires_criteria() {
		let result = Unimplemented.find(&SearchCriteria::default());
		assert!(matches!(result, Err(Error::InvalidSearch(_))));
	}

	#[rstest]
	#[case(ElementKind::Link, ElementKind::Element, true)]
	#[case(ElementKind::Button, ElementKind::Element, true)]
	#[case(ElementKind::Form, ElementKind::Template, true)]
	#[case(ElementKind::FormFieldSet, ElementKind::ElementSet, true)]
	#[case(ElementKind::Table, ElementKind::ElementSet, false)]
	#[case(ElementKind::Element, ElementKind::Template, false)]
	#[case(ElementKind::FormField, ElementKind::FormField, true)]
	fn test_is_a(#[case] kind: ElementKind, #[case] other: ElementKind, #[case] expected: bool) {
		assert_eq!(kind.is_a(other), expected);
	}

	#[test]
	fn test_scoped_context_keeps_renderer() {
		let renderer = NullRenderer(Settings::default());
		let row = serde_json::json!({"id": 1});
		let ctx = RenderContext::new(&renderer).with_var("title", "x");
		let child = ctx.scoped(Some(&row), Context::new());
		assert_eq!(child.data(), Some(&row));
		assert!(child.extra().is_empty());
		assert_eq!(child.settings().template_prefix, "bigfoot");
	}
}
