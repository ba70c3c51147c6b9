//! Sort directions and the toggle table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A sort direction as it appears in the query string.
///
/// Two vocabularies are understood: `asc`/`desc` and `0`/`1`. Toggling
/// stays within the vocabulary of the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
}

impl SortDirection {
    /// Parse the wire form. Anything outside the four known values is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            "0" => Some(SortDirection::Zero),
            "1" => Some(SortDirection::One),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
            SortDirection::Zero => "0",
            SortDirection::One => "1",
        }
    }

    /// `asc` <-> `desc`, `0` <-> `1`.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
            SortDirection::Zero => SortDirection::One,
            SortDirection::One => SortDirection::Zero,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort direction via [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortDirection(pub String);

impl fmt::Display for UnknownSortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort direction '{}' (expected asc, desc, 0 or 1)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSortDirection {}

impl FromStr for SortDirection {
    type Err = UnknownSortDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortDirection::parse(s).ok_or_else(|| UnknownSortDirection(s.to_string()))
    }
}
