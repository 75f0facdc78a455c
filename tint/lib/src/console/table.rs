//! Plain-text table rendering.
//!
//! The column set comes from the first row, in its key order. Later rows are
//! rendered against that set. A key missing from a row renders as an empty
//! cell, and a key the first row does not have is ignored.
//!
//! ```text
//! name  | age
//! ------+----
//! Alice | 25
//! Bob   | 30
//! ```
//!
//! Widths are character counts, not display widths.

use serde_json::Value;

/// Diagnostic line written instead of a table when the input is unusable.
pub const INVALID_TABLE_DATA: &str = "Invalid table data.";

/// Joins cells within the header and data rows.
const CELL_SEPARATOR: &str = " | ";
/// Joins the dash runs of the separator line.
const RULE_SEPARATOR: &str = "-+-";

/// One row of a table: an ordered mapping of column name to cell text.
///
/// ## Examples
///
/// ```
/// use tint::console::table::TableRow;
///
/// let row = TableRow::new().with("name", "Alice").with("age", "25");
/// assert_eq!(row.get("age"), Some("25"));
/// assert_eq!(row.keys().collect::<Vec<_>>(), vec!["name", "age"]);
///
/// let same: TableRow = [("name", "Alice"), ("age", "25")].into();
/// assert_eq!(row, same);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<(String, String)>,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`TableRow::insert`].
    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a cell. An existing key keeps its position and takes the new value.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Column names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TableRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = TableRow::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for TableRow {
    fn from(cells: [(K, V); N]) -> Self {
        cells.into_iter().collect()
    }
}

/// Renders rows into the lines of a table (header, separator, data rows).
///
/// Returns `None` when there are no rows.
///
/// ```
/// use tint::console::table::{render_table, TableRow};
///
/// let rows = vec![
///     TableRow::from([("name", "Alice"), ("age", "25")]),
///     TableRow::from([("name", "Bob"), ("age", "30")]),
/// ];
/// let lines = render_table(&rows).unwrap();
/// assert_eq!(lines, vec!["name  | age", "------+----", "Alice | 25 ", "Bob   | 30 "]);
/// ```
pub fn render_table(rows: &[TableRow]) -> Option<Vec<String>> {
    let first = rows.first()?;
    let headers: Vec<&str> = first.keys().collect();

    let body: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|h| row.get(h).unwrap_or_default())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            body.iter()
                .map(|cells| cells[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format_row(&headers, &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(RULE_SEPARATOR),
    );
    lines.extend(body.iter().map(|cells| format_row(cells, &widths)));

    Some(lines)
}

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}

/// Converts JSON table data into rows.
///
/// Returns `None` unless `data` is a non-empty array whose elements are all
/// objects. Cell text is the string itself for strings, empty for `null`
/// and compact JSON for everything else.
///
/// ```
/// use serde_json::json;
/// use tint::console::table::rows_from_value;
///
/// let rows = rows_from_value(&json!([{ "name": "Alice", "age": 25 }])).unwrap();
/// assert_eq!(rows[0].get("age"), Some("25"));
///
/// assert!(rows_from_value(&json!(null)).is_none());
/// assert!(rows_from_value(&json!([])).is_none());
/// assert!(rows_from_value(&json!([1, 2, 3])).is_none());
/// ```
pub fn rows_from_value(data: &Value) -> Option<Vec<TableRow>> {
    let items = data.as_array().filter(|items| !items.is_empty())?;

    items
        .iter()
        .map(|item| {
            item.as_object()
                .map(|object| {
                    object
                        .iter()
                        .map(|(k, v)| (k.as_str(), cell_text(v)))
                        .collect::<TableRow>()
                })
        })
        .collect()
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
