//! Attribute resolution, the render contract, settings and HTML helpers.
//!
//! # Examples
//!
//! ```rust
//! use bigfoot::core::{Accessor, Attr};
//! use serde_json::json;
//!
//! let title: Attr<String> = Attr::from(Accessor::new("title"));
//! assert_eq!(title.resolve("title", Some(&json!({"title": "Hi"}))).unwrap(), "Hi");
//! ```

pub use bigfoot_core::*;
