//! Element content.
//!
//! Content is either a single string or a list of fragments. Fragments are
//! concatenated with no separator, which is how nested elements get glued
//! together (`<tr>` is built from a list of rendered `<td>` strings).

/// The inner content of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Parts(Vec<String>),
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

impl Content {
    /// Join the content into a single string. Parts are concatenated with no separator.
    pub fn concat(&self) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Parts(parts) => parts.concat(),
        }
    }

    /// True when the concatenated content is the empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(text) => text.is_empty(),
            Content::Parts(parts) => parts.iter().all(String::is_empty),
        }
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

impl From<&String> for Content {
    fn from(value: &String) -> Self {
        Content::Text(value.clone())
    }
}

impl From<()> for Content {
    fn from(_: ()) -> Self {
        Content::default()
    }
}

impl From<Vec<String>> for Content {
    fn from(parts: Vec<String>) -> Self {
        Content::Parts(parts)
    }
}

impl From<Vec<&str>> for Content {
    fn from(parts: Vec<&str>) -> Self {
        Content::Parts(parts.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Content {
    fn from(parts: [&str; N]) -> Self {
        Content::Parts(parts.iter().map(|part| part.to_string()).collect())
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_concatenate_without_separator() {
        assert_eq!(Content::from(["hello", "world"]).concat(), "helloworld");
    }

    #[test]
    fn test_empty_parts_are_empty() {
        assert!(Content::from(vec!["", ""]).is_empty());
        assert!(Content::Parts(vec![]).is_empty());
        assert!(!Content::from(vec!["", "x"]).is_empty());
    }

    #[test]
    fn test_none_is_empty_text() {
        assert_eq!(Content::from(None::<&str>), Content::default());
        assert_eq!(Content::from(Some("x")).concat(), "x");
    }
}
