//! Tables.
//!
//! A table is built entirely from [`render_tag`] calls:
//!
//! ```text
//! <table {options}>
//!   <thead><tr><th>header</th>...</tr></thead>   (omitted when there are no headers)
//!   <tbody><tr><td>cell</td>...</tr>...</tbody>  (omitted when there are no rows)
//! </table>
//! ```
//!
//! Everything is concatenated without whitespace. A table with neither headers
//! nor rows has empty content and therefore self-closes as `<table />`.

use crate::attributes::AttrValue;
use crate::content::Content;
use crate::error::Result;
use crate::tags::render_tag;

/// Render a `<table>` from header labels and rows of cells.
///
/// Header labels and cells are used as element content verbatim, so
/// pre-rendered markup (such as the anchors from
/// [`resolve_grid_headers`](crate::resolve_grid_headers)) passes through.
///
/// # Errors
///
/// Fails only when `options` contains a blank attribute key.
///
/// # Examples
/// ```
/// use tagsmith::{render_table, AttrValue};
///
/// let empty: [&str; 0] = [];
/// let no_rows: [Vec<&str>; 0] = [];
/// assert_eq!(render_table(&empty, &no_rows, &AttrValue::default()).unwrap(), "<table />");
///
/// let html = render_table(&["a"], &[vec!["1"]], &AttrValue::default()).unwrap();
/// assert_eq!(html, "<table><thead><tr><th>a</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>");
/// ```
pub fn render_table<H, R, C>(headers: &[H], rows: &[R], options: &AttrValue) -> Result<String>
where
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: Clone + Into<Content>,
{
    let none = AttrValue::default();

    let head = if headers.is_empty() {
        String::new()
    } else {
        let cells = headers
            .iter()
            .map(|header| {
                let label: &str = header.as_ref();
                render_tag("th", label, &none)
            })
            .collect::<Result<Vec<_>>>()?;
        render_tag("thead", render_tag("tr", cells, &none)?, &none)?
    };

    let body = if rows.is_empty() {
        String::new()
    } else {
        let rendered_rows = rows
            .iter()
            .map(|row| -> Result<String> {
                let row: &[C] = row.as_ref();
                let cells = row
                    .iter()
                    .map(|cell| render_tag("td", cell.clone(), &none))
                    .collect::<Result<Vec<_>>>()?;
                render_tag("tr", cells, &none)
            })
            .collect::<Result<Vec<_>>>()?;
        render_tag("tbody", rendered_rows, &none)?
    };

    render_tag("table", vec![head, body], options)
}
