//! # Attributes
//!
//! Everything between a tag name and the closing `>` of its start tag.
//!
//! An attributes structure is one of three shapes, captured by [`AttrValue`]:
//!
//! | Shape | Example | Output |
//! |-------|---------|--------|
//! | `Text` | `"disabled"` | `disabled` |
//! | `List` | `["btn", "primary"]` | `btn primary` |
//! | `Map` | `{class: ["btn", "primary"], id: "go"}` | `class="btn primary" id="go"` |
//!
//! Map values are rendered with the same rules, so a list under `class`
//! becomes a space separated class list. Map keys must be non-empty after
//! trimming; that is the only check performed. Nothing is escaped.
//!
//! ## Usage
//!
//! ```
//! use tagsmith::{render_attributes, AttrValue};
//!
//! let attrs = AttrValue::map().with("class", ["btn", "primary"]).with("id", "go");
//! assert_eq!(render_attributes(&attrs).unwrap(), r#"class="btn primary" id="go""#);
//! ```

mod render;
mod value;

pub(crate) use render::attribute_pair;
pub use render::render_attributes;
pub use value::AttrValue;
