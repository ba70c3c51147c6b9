//! # Tags
//!
//! Rendering of a single HTML element.
//!
//! ## Output Forms
//!
//! | Content | Attributes | Output |
//! |---------|------------|--------|
//! | empty | none | `<br />` |
//! | empty | `class="x"` | `<br class="x" />` |
//! | `hi` | none | `<p>hi</p>` |
//! | `hi` | `class="x"` | `<p class="x">hi</p>` |
//!
//! Any element with empty content is written in self-closing form, `<img>` and
//! `<table>` alike. Content is written verbatim.
//!
//! ## Tag Naming Rules
//!
//! See [`validation`]: a name must be non-empty after trimming, and the
//! trimmed name is what gets written.

pub mod validation;

use crate::attributes::{render_attributes, AttrValue};
use crate::content::Content;
use crate::error::Result;

pub use validation::{validate_tag_name, TagNameError};

/// Render an HTML element.
///
/// # Errors
///
/// - [`MarkupError::InvalidTagName`](crate::MarkupError::InvalidTagName) when
///   `name` is blank.
/// - [`MarkupError::InvalidAttributeKey`](crate::MarkupError::InvalidAttributeKey)
///   when an attribute map has a blank key.
///
/// # Examples
/// ```
/// use tagsmith::{render_tag, AttrValue};
///
/// assert_eq!(render_tag("h1", (), &AttrValue::default()).unwrap(), "<h1 />");
///
/// let attrs = AttrValue::map().with("class", ["test", "test2"]);
/// assert_eq!(
///     render_tag("h1", ["hello", "world"], &attrs).unwrap(),
///     r#"<h1 class="test test2">helloworld</h1>"#
/// );
/// ```
pub fn render_tag(
    name: &str,
    content: impl Into<Content>,
    attributes: &AttrValue,
) -> Result<String> {
    let name = validate_tag_name(name)?;
    let attrs = render_attributes(attributes)?;
    Ok(element(name, &content.into().concat(), &attrs))
}

/// Assemble an element from a validated name, concatenated content and
/// rendered attributes.
pub(crate) fn element(name: &str, content: &str, attrs: &str) -> String {
    let start = start_tag(name, attrs);
    if content.is_empty() {
        format!("{} />", start)
    } else {
        format!("{}>{}</{}>", start, content, name)
    }
}

/// The start tag without its closing `>`. No trailing whitespace.
fn start_tag(name: &str, attrs: &str) -> String {
    let mut start = format!("<{} {}", name, attrs);
    start.truncate(start.trim_end().len());
    start
}
