//! Attribute serialization.

use super::AttrValue;
use crate::error::{MarkupError, Result};

/// Serialize an attributes structure into the text that goes inside a start tag.
///
/// No escaping is performed: values are written exactly as given.
///
/// # Errors
///
/// Returns [`MarkupError::InvalidAttributeKey`] when any map key, at any depth,
/// is empty after trimming. Keys at one level are all checked before any of
/// that level's values are rendered.
///
/// # Examples
/// ```
/// use tagsmith::{render_attributes, AttrValue};
///
/// let attrs = AttrValue::map().with("class", ["a", "b"]).with("id", "main");
/// assert_eq!(render_attributes(&attrs).unwrap(), r#"class="a b" id="main""#);
/// assert_eq!(render_attributes(&AttrValue::from("disabled")).unwrap(), "disabled");
/// ```
pub fn render_attributes(value: &AttrValue) -> Result<String> {
    match value {
        AttrValue::Text(text) => Ok(text.clone()),
        AttrValue::List(items) => {
            let rendered = items
                .iter()
                .map(render_attributes)
                .collect::<Result<Vec<_>>>()?;
            Ok(rendered.join(" "))
        }
        AttrValue::Map(entries) => {
            if let Some((key, _)) = entries.iter().find(|(key, _)| key.trim().is_empty()) {
                tracing::trace!(key = %key, "rejecting attribute key");
                return Err(MarkupError::InvalidAttributeKey(key.clone()));
            }
            let pairs = entries
                .iter()
                .map(|(key, value)| -> Result<String> {
                    Ok(attribute_pair(key, &render_attributes(value)?))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(pairs.join(" "))
        }
    }
}

/// Format a single `key="value"` pair from an already rendered value.
pub(crate) fn attribute_pair(key: &str, rendered: &str) -> String {
    format!("{}=\"{}\"", key, rendered)
}
