//! tagtree: a type-checked builder for markup document trees
//!
//! This crate provides functionality to:
//! - Compose a document from nested configure closures
//! - Restrict, through the types, which tag kind may hold which children
//! - Render the finished tree to a markup string
//! - Optionally reject repeated unique tags or overly deep trees
//!
//! # Examples
//! ```
//! use tagtree::{html, AnyChild, Element, FlowContent};
//!
//! let doc = html(|html| {
//!     html.body(|body| {
//!         body.p(|p| {
//!             p.text("first");
//!         })
//!         .p(|p| {
//!             p.text("second");
//!         });
//!     });
//! });
//!
//! assert_eq!(
//!     doc.render(),
//!     "<html><body><p>first</p><p>second</p></body></html>"
//! );
//! ```
//!
//! Text and attribute values are written out as given, without escaping.

pub mod attribute;
pub mod builder;
pub mod catalog;
pub mod config;
pub mod element;
pub mod error;

// Re-exports
pub use attribute::Attribute;
pub use builder::{html, html_with_config, AnyChild, FlowContent, WithAttributes};
pub use catalog::{Body, Head, Html, Title, A, P};
pub use config::{Config, UniquePolicy};
pub use element::{Element, Repeatable, Tag, TagBase, Text, Unique};
pub use error::{Error, ErrorKind, Result};
