//! Anchor (`<a>`) elements.

use crate::attributes::{attribute_pair, AttrValue};
use crate::content::Content;
use crate::error::Result;
use crate::tags::{element, render_tag};

/// Render an `<a>` element.
///
/// When `href` is empty the attributes are passed through untouched and no
/// `href` is written. Otherwise `href` is set as the *last* attribute,
/// replacing any `href` already present in `attributes`.
///
/// # Examples
/// ```
/// use tagsmith::{render_anchor, AttrValue};
///
/// assert_eq!(render_anchor((), "", &AttrValue::default()).unwrap(), "<a />");
///
/// let attrs = AttrValue::map().with("class", ["test", "test2"]).with("id", "hello");
/// assert_eq!(
///     render_anchor("hello", "http://google.com", &attrs).unwrap(),
///     r#"<a class="test test2" id="hello" href="http://google.com">hello</a>"#
/// );
/// ```
pub fn render_anchor(
    content: impl Into<Content>,
    href: &str,
    attributes: &AttrValue,
) -> Result<String> {
    if href.is_empty() {
        return render_tag("a", content, attributes);
    }
    let attributes = attributes.clone().with_attribute("href", href);
    render_tag("a", content, &attributes)
}

/// An anchor with only an `href`. Both inputs are already final text, so
/// this cannot fail.
pub(crate) fn link(text: &str, href: &str) -> String {
    element("a", text, &attribute_pair("href", href))
}
