//! # Tagsmith
//!
//! Tagsmith builds HTML fragments as plain strings. There is no parser, no
//! DOM and no template language: every operation is a pure function from its
//! arguments to a `String`.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  grid      (grid/)           │  header descriptors + URL → header cells
//! └──────────────────────────────┘
//!        │                 │
//!        ▼                 ▼
//! ┌──────────────┐  ┌──────────────┐
//! │  anchor      │  │  table       │  <a href>, <table>/<thead>/<tbody>
//! └──────────────┘  └──────────────┘
//!        │                 │
//!        ▼                 ▼
//! ┌──────────────────────────────┐
//! │  tags      (tags/)           │  one element, open/close or self-closing
//! └──────────────────────────────┘
//!               │
//!               ▼
//! ┌──────────────────────────────┐
//! │  attributes (attributes/)    │  string | list | ordered map → text
//! └──────────────────────────────┘
//! ```
//!
//! The output of [`resolve_grid_headers`] is meant to be fed straight into
//! [`render_table`] as its headers.
//!
//! ## No Escaping
//!
//! Content and attribute values are written verbatim. Callers that render
//! untrusted text must escape it first.
//!
//! ## Errors
//!
//! Only two inputs are rejected, both with a [`MarkupError`]:
//! - a tag name that is empty after trimming ([`MarkupError::InvalidTagName`])
//! - an attribute map key that is empty after trimming ([`MarkupError::InvalidAttributeKey`])
//!
//! A failed call produces no output. Grid resolution never fails.
//!
//! ## Example
//!
//! ```
//! use tagsmith::{render_table, resolve_grid_headers, AttrValue, ColumnHeader, HeaderDescriptor, SortDirection};
//!
//! let headers: Vec<HeaderDescriptor> = vec![
//!     ColumnHeader::new().with_text("ID").with_data("id").sorted(SortDirection::Asc).into(),
//! ];
//! let html = render_table(&resolve_grid_headers(&headers, ""), &[vec!["1"]], &AttrValue::default()).unwrap();
//! assert_eq!(
//!     html,
//!     r#"<table><thead><tr><th><a href="?sb=id&sd=asc">ID</a></th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>"#
//! );
//! ```
//!
//! ## Module Overview
//!
//! - [`attributes`]: Attribute values and their serialization
//! - [`content`]: Element content (string or concatenated parts)
//! - [`tags`]: Single element rendering and tag name validation
//! - [`anchor`]: `<a>` elements
//! - [`table`]: `<table>` composition
//! - [`grid`]: Sortable grid headers
//! - [`config`]: Query parameter names for grid headers
//! - [`error`]: Error types

pub mod anchor;
pub mod attributes;
pub mod config;
pub mod content;
pub mod error;
pub mod grid;
pub mod table;
pub mod tags;

pub use anchor::render_anchor;
pub use attributes::{render_attributes, AttrValue};
pub use config::GridConfig;
pub use content::Content;
pub use error::{MarkupError, Result};
pub use grid::{
    resolve_grid_headers, ColumnHeader, GridResolver, HeaderDescriptor, SortDirection,
};
pub use table::render_table;
pub use tags::render_tag;
