//! The element kinds.
//!
//! # Examples
//!
//! ```rust
//! use bigfoot::core::Renderable;
//! use bigfoot::elements::Link;
//! use bigfoot::templates::TemplateEngine;
//!
//! let engine = TemplateEngine::with_defaults().unwrap();
//! assert_eq!(Link::new("Home", "/").to_html(&engine).unwrap(), r#"<a href="/">Home</a>"#);
//! ```

#[cfg(feature = "elements")]
pub use bigfoot_elements::*;
