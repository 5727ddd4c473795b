//! Request-scoped template context
//!
//! A [`RequestContext`] carries what a template may want to know about the
//! request being served (path, method, user, CSRF token) plus a registry of
//! context processors that add site-wide variables. Values already present in
//! the element's own context always win over processor output.

use bigfoot_core::{Context, Settings};
use serde_json::{Value, json};
use std::sync::{Arc, RwLock};

/// Context processor function type
///
/// A context processor receives the request and returns variables to add.
pub type ContextProcessor = Arc<dyn Fn(&RequestContext) -> Context + Send + Sync>;

/// Registry for context processors
#[derive(Clone)]
pub struct ContextProcessorRegistry {
	processors: Arc<RwLock<Vec<ContextProcessor>>>,
}

impl ContextProcessorRegistry {
	/// Create a new context processor registry
	///
	/// # Examples
	///
	/// ```
	/// use bigfoot_templates::ContextProcessorRegistry;
	///
	/// let registry = ContextProcessorRegistry::new();
	/// assert_eq!(registry.len(), 0);
	/// ```
	pub fn new() -> Self {
		Self {
			processors: Arc::new(RwLock::new(Vec::new())),
		}
	}

	/// Registry preloaded with the debug and static processors
	pub fn with_defaults(settings: &Settings) -> Self {
		let mut registry = Self::new();
		let debug = settings.debug;
		let static_url = settings.static_url.clone();
		registry.register(move |_| debug_context_processor(debug));
		registry.register(move |_| static_context_processor(&static_url));
		registry
	}

	/// Register a context processor
	///
	/// # Examples
	///
	/// ```
	/// use bigfoot_core::Context;
	/// use bigfoot_templates::ContextProcessorRegistry;
	///
	/// let mut registry = ContextProcessorRegistry::new();
	/// registry.register(|_request| {
	///     let mut context = Context::new();
	///     context.insert("site_name".to_string(), "My Site".into());
	///     context
	/// });
	/// assert_eq!(registry.len(), 1);
	/// ```
	pub fn register<F>(&mut self, processor: F)
	where
		F: Fn(&RequestContext) -> Context + Send + Sync + 'static,
	{
		if let Ok(mut processors) = self.processors.write() {
			processors.push(Arc::new(processor));
		}
	}

	/// Runs every processor for `request`, later processors overriding earlier ones
	pub fn get_context(&self, request: &RequestContext) -> Context {
		let mut context = Context::new();

		if let Ok(processors) = self.processors.read() {
			for processor in processors.iter() {
				context.extend(processor(request));
			}
		}

		context
	}

	/// Number of registered processors
	pub fn len(&self) -> usize {
		self.processors.read().map(|p| p.len()).unwrap_or(0)
	}

	/// Whether no processor is registered
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Clear all registered processors
	pub fn clear(&mut self) {
		if let Ok(mut processors) = self.processors.write() {
			processors.clear();
		}
	}
}

impl Default for ContextProcessorRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// Built-in context processor for debug information
///
/// Provides `DEBUG`.
pub fn debug_context_processor(debug: bool) -> Context {
	let mut context = Context::new();
	context.insert("DEBUG".to_string(), Value::Bool(debug));
	context
}

/// Built-in context processor for static files
///
/// Provides `STATIC_URL`.
///
/// # Examples
///
/// ```
/// use bigfoot_templates::static_context_processor;
///
/// let context = static_context_processor("/static/");
/// assert_eq!(context.get("STATIC_URL").and_then(|v| v.as_str()), Some("/static/"));
/// ```
pub fn static_context_processor(static_url: &str) -> Context {
	let mut context = Context::new();
	context.insert(
		"STATIC_URL".to_string(),
		Value::String(static_url.to_string()),
	);
	context
}

/// The request an element is being rendered for
#[derive(Clone)]
pub struct RequestContext {
	method: String,
	path: String,
	user: Option<String>,
	csrf_token: Option<String>,
	processors: ContextProcessorRegistry,
}

impl RequestContext {
	/// A request for `method` and `path` with no processors
	pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
		Self {
			method: method.into(),
			path: path.into(),
			user: None,
			csrf_token: None,
			processors: ContextProcessorRegistry::new(),
		}
	}

	/// Sets the authenticated user's name
	pub fn with_user(mut self, user: impl Into<String>) -> Self {
		self.user = Some(user.into());
		self
	}

	/// Sets the CSRF token rendered into forms
	pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
		self.csrf_token = Some(token.into());
		self
	}

	/// Sets the context processors
	pub fn with_processors(mut self, processors: ContextProcessorRegistry) -> Self {
		self.processors = processors;
		self
	}

	/// HTTP method
	pub fn method(&self) -> &str {
		&self.method
	}

	/// Request path
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Authenticated user, if any
	pub fn user(&self) -> Option<&str> {
		self.user.as_deref()
	}

	/// CSRF token, if any
	pub fn csrf_token(&self) -> Option<&str> {
		self.csrf_token.as_deref()
	}

	/// Adds request variables and processor output to `context`
	///
	/// Existing keys are left untouched.
	pub fn apply(&self, context: &mut Context) {
		let mut request_vars = self.processors.get_context(self);
		request_vars.insert(
			"request".to_string(),
			json!({
				"method": self.method,
				"path": self.path,
				"user": self.user,
				"is_authenticated": self.user.is_some(),
			}),
		);
		if let Some(user) = &self.user {
			request_vars.insert("user".to_string(), Value::String(user.clone()));
		}
		if let Some(token) = &self.csrf_token {
			request_vars.insert("csrf_token".to_string(), Value::String(token.clone()));
		}

		for (key, value) in request_vars {
			context.entry(key).or_insert(value);
		}
	}
}

impl std::fmt::Debug for RequestContext {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RequestContext")
			.field("method", &self.method)
			.field("path", &self.path)
			.field("user", &self.user)
			.field("processors", &self.processors.len())
			.finish_non_exhaustive()
	}
}
