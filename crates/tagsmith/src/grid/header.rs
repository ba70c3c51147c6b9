//! Grid header descriptors.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::SortDirection;

/// One column header of a grid, as supplied by the caller.
///
/// Deserializes untagged: a JSON string becomes a [`HeaderDescriptor::Label`],
/// an object becomes a [`HeaderDescriptor::Column`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderDescriptor {
    /// Rendered as-is.
    Label(String),
    /// A column that may be sortable.
    Column(ColumnHeader),
}

impl HeaderDescriptor {
    pub fn label(text: impl Into<String>) -> Self {
        HeaderDescriptor::Label(text.into())
    }
}

impl From<&str> for HeaderDescriptor {
    fn from(text: &str) -> Self {
        HeaderDescriptor::Label(text.to_string())
    }
}

impl From<String> for HeaderDescriptor {
    fn from(text: String) -> Self {
        HeaderDescriptor::Label(text)
    }
}

impl From<ColumnHeader> for HeaderDescriptor {
    fn from(column: ColumnHeader) -> Self {
        HeaderDescriptor::Column(column)
    }
}

/// A structured column header.
///
/// Empty strings are treated the same as missing values, so `text: ""`
/// falls back to `data` exactly like an absent `text` does.
///
/// - `data` is the column identifier written to the sort-by parameter.
/// - `sort` is the direction used when the grid switches to this column.
///   It has no effect without `data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub sort: Option<SortDirection>,
}

impl ColumnHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn sorted(mut self, direction: SortDirection) -> Self {
        self.sort = Some(direction);
        self
    }

    /// The column identifier, if present and non-empty.
    pub fn data_key(&self) -> Option<&str> {
        non_empty(self.data.as_deref())
    }

    /// The display text: `text`, else `data`, else the empty string.
    pub fn display_text(&self) -> &str {
        non_empty(self.text.as_deref())
            .or_else(|| self.data_key())
            .unwrap_or("")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<SortDirection>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => SortDirection::parse(value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("unknown sort direction '{}'", value))),
    }
}
