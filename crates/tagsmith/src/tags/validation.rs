//! Tag name validation.
//!
//! The only rule is that a tag name must contain something other than
//! whitespace. Surrounding whitespace is dropped. Names are otherwise taken
//! as-is: `my-widget`, `svg:rect` and even `1nvalid` are all accepted.

/// Validates a tag name and returns it trimmed.
///
/// # Examples
/// ```
/// use tagsmith::tags::validation::validate_tag_name;
///
/// assert_eq!(validate_tag_name("div"), Ok("div"));
/// assert_eq!(validate_tag_name("  h1 "), Ok("h1"));
///
/// assert!(validate_tag_name("").is_err());
/// assert!(validate_tag_name("   ").is_err());
/// ```
pub fn validate_tag_name(name: &str) -> Result<&str, TagNameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TagNameError::Empty);
    }
    Ok(trimmed)
}

/// Error type for tag name validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagNameError {
    /// Tag name is empty or only whitespace
    Empty,
}

impl std::fmt::Display for TagNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagNameError::Empty => write!(f, "tag name must be a non-empty string"),
        }
    }
}

impl std::error::Error for TagNameError {}
