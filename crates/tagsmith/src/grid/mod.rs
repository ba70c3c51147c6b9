//! # Grid Headers
//!
//! Turns header descriptors into header cells for [`render_table`](crate::render_table).
//! Sortable columns become links that carry the next sort state in the URL's
//! query string.
//!
//! ## Resolution Rules
//!
//! Each descriptor is resolved on its own, in order:
//!
//! | Descriptor | Result |
//! |------------|--------|
//! | `Label(s)` | `s` |
//! | column, no `data` | `text`, or `""` (`sort` is ignored) |
//! | column, `data`, no `sort` | `text`, or `data` |
//! | column, `data` and `sort` | `<a href="{url with next sort}">{text or data}</a>` |
//!
//! ## Sort State
//!
//! The sort state lives only in the URL: the sort-by parameter (`sb`) names
//! the column and the sort-direction parameter (`sd`) the direction. There
//! is no state between calls.
//!
//! - Grid already sorted by this column: the direction is toggled
//!   (`asc` <-> `desc`, `0` <-> `1`). With no direction, or a direction
//!   outside those four values, the column's own `sort` is used.
//! - Otherwise: the sort-by parameter becomes the column's `data` and the
//!   direction becomes the column's `sort`, whatever it was before.
//!
//! All other parameters, the part of the URL before `?` and any `#fragment`
//! are kept unchanged. An empty URL yields just `?sb={data}&sd={sort}`.
//!
//! ## Usage
//!
//! ```
//! use tagsmith::grid::{resolve_grid_headers, ColumnHeader, HeaderDescriptor, SortDirection};
//!
//! let headers = vec![
//!     HeaderDescriptor::label("#"),
//!     ColumnHeader::new().with_text("Name").with_data("name").sorted(SortDirection::Asc).into(),
//! ];
//! let cells = resolve_grid_headers(&headers, "/users?sb=name&sd=asc");
//! assert_eq!(cells, vec![
//!     "#".to_string(),
//!     r#"<a href="/users?sb=name&sd=desc">Name</a>"#.to_string(),
//! ]);
//! ```

mod header;
mod query;
mod sort;

use once_cell::sync::Lazy;

use crate::anchor::link;
use crate::config::GridConfig;

pub use header::{ColumnHeader, HeaderDescriptor};
pub use query::{GridUrl, QueryParams};
pub use sort::{SortDirection, UnknownSortDirection};

static DEFAULT_RESOLVER: Lazy<GridResolver> = Lazy::new(GridResolver::default);

/// Resolve grid headers with the default parameter names (`sb`/`sd`).
///
/// Always returns exactly one cell per descriptor, in the same order.
pub fn resolve_grid_headers(headers: &[HeaderDescriptor], url: &str) -> Vec<String> {
    DEFAULT_RESOLVER.resolve(headers, url)
}

/// Resolves grid headers against a [`GridConfig`].
#[derive(Debug, Clone, Default)]
pub struct GridResolver {
    config: GridConfig,
}

impl GridResolver {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Resolve every descriptor. Descriptors are only read, never modified.
    pub fn resolve(&self, headers: &[HeaderDescriptor], url: &str) -> Vec<String> {
        headers
            .iter()
            .map(|header| self.resolve_one(header, url))
            .collect()
    }

    fn resolve_one(&self, header: &HeaderDescriptor, url: &str) -> String {
        let column = match header {
            HeaderDescriptor::Label(text) => return text.clone(),
            HeaderDescriptor::Column(column) => column,
        };
        let text = column.display_text();
        match (column.data_key(), column.sort) {
            (Some(data), Some(sort)) => link(text, &self.sort_href(url, data, sort)),
            _ => text.to_string(),
        }
    }

    /// The URL that sorts the grid by `data`, given the current `url`.
    fn sort_href(&self, url: &str, data: &str, default_sort: SortDirection) -> String {
        let sort_by = self.config.sort_by_param.as_str();
        let sort_dir = self.config.sort_dir_param.as_str();

        let mut parsed = GridUrl::parse(url);
        let query = parsed.query_mut();
        let current = query.get(sort_dir);

        if query.get(sort_by).as_deref() == Some(data) {
            let next = current
                .as_deref()
                .and_then(SortDirection::parse)
                .map(SortDirection::toggled)
                .unwrap_or(default_sort);
            tracing::debug!(column = data, from = ?current, to = %next, "toggling sort direction");
            query.set(sort_dir, next.as_str());
        } else {
            tracing::debug!(column = data, to = %default_sort, "switching sort column");
            query.set(sort_by, data);
            query.set(sort_dir, default_sort.as_str());
        }

        parsed.to_url_string()
    }
}
