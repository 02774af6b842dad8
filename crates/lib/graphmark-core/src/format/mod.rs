//! Markdown rendering of graph records.
//!
//! Two views exist: the detailed view (full tables plus statistics) and the
//! summary view (key figures plus best/worst categories). Both are pure and
//! total over any well-formed [`GraphRecord`].

mod detailed;
mod summary;

pub use detailed::render_detailed;
pub use summary::render_summary;

use crate::record::GraphRecord;

/// Predicates locating the value and category columns by name.
///
/// Upstream column naming is not contractually fixed, so columns are found by
/// case-insensitive substring match rather than by position.
#[derive(Debug, Clone)]
pub struct ColumnMarkers {
    value: String,
    categories: Vec<String>,
}

impl Default for ColumnMarkers {
    fn default() -> Self {
        Self {
            value: "value".to_string(),
            categories: vec!["type".to_string()],
        }
    }
}

impl ColumnMarkers {
    #[must_use]
    pub fn new(value: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            value: value.into(),
            categories,
        }
    }

    pub(crate) fn is_value_column(&self, name: &str) -> bool {
        contains_ignore_case(name, &self.value)
    }

    fn is_category_column(&self, name: &str) -> bool {
        self.categories
            .iter()
            .any(|marker| contains_ignore_case(name, marker))
    }

    /// Index of the first value-marked column, if any.
    pub(crate) fn value_column(&self, columns: &[String]) -> Option<usize> {
        columns.iter().position(|name| self.is_value_column(name))
    }

    /// Index of the first category-marked column, if any.
    pub(crate) fn category_column(&self, columns: &[String]) -> Option<usize> {
        columns.iter().position(|name| self.is_category_column(name))
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    !needle.is_empty()
        && haystack
            .to_ascii_lowercase()
            .contains(&needle.to_ascii_lowercase())
}

/// Strips HTML-like tag spans, decodes `&quot;`, and drops stray byte-order
/// marks. Upstream descriptions routinely carry inline markup. Text after an
/// unmatched `<` is kept; only the bracket itself is lost.
pub(crate) fn clean_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending: Option<String> = None;
    for ch in raw.chars() {
        match ch {
            '\u{feff}' => {}
            '<' if pending.is_none() => pending = Some(String::new()),
            '>' if pending.is_some() => pending = None,
            c => match pending.as_mut() {
                Some(span) => span.push(c),
                None => out.push(c),
            },
        }
    }
    if let Some(span) = pending {
        out.push_str(&span);
    }
    out.replace("&quot;", "\"").trim().to_string()
}

/// Best-effort numeric reading of one cell. Non-finite parses are treated as
/// opaque text so a literal `NaN` cell cannot poison the statistics.
pub(crate) fn parse_numeric(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Renders a fraction as a percentage, fixed to one decimal place.
pub(crate) fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Aggregates over the numeric cells of one value column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ValueStats {
    pub sum: f64,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub count: usize,
}

/// Computes statistics over the first value-marked column, restricted to
/// cells that parse as finite floats. Returns the column index alongside the
/// stats; `None` when no value column exists or it has zero numeric cells.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn value_stats(
    record: &GraphRecord,
    markers: &ColumnMarkers,
) -> Option<(usize, ValueStats)> {
    let column = markers.value_column(&record.column_names)?;
    let mut sum = 0.0_f64;
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    let mut count = 0_usize;
    for row in record.valid_rows() {
        if let Some(value) = parse_numeric(&row[column]) {
            sum += value;
            max = max.max(value);
            min = min.min(value);
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    let stats = ValueStats {
        sum,
        mean: sum / count as f64,
        max,
        min,
        count,
    };
    Some((column, stats))
}

/// Rows achieving the extremal numeric values of one column. A single forward
/// scan with strict comparisons keeps the first occurrence on ties.
pub(crate) struct Extremes<'a> {
    pub max_row: &'a [String],
    pub min_row: &'a [String],
    pub max: f64,
    pub min: f64,
}

pub(crate) fn extremes(record: &GraphRecord, column: usize) -> Option<Extremes<'_>> {
    let mut best: Option<(&[String], f64)> = None;
    let mut worst: Option<(&[String], f64)> = None;
    for row in record.valid_rows() {
        let row = row.as_slice();
        if let Some(value) = parse_numeric(&row[column]) {
            if best.is_none_or(|(_, b)| value > b) {
                best = Some((row, value));
            }
            if worst.is_none_or(|(_, w)| value < w) {
                worst = Some((row, value));
            }
        }
    }
    let (max_row, max) = best?;
    let (min_row, min) = worst?;
    Some(Extremes {
        max_row,
        min_row,
        max,
        min,
    })
}

/// Display label for one row: the first category-marked column if present,
/// else the second cell, else the first.
pub(crate) fn row_label<'a>(
    row: &'a [String],
    columns: &[String],
    markers: &ColumnMarkers,
) -> &'a str {
    if let Some(index) = markers.category_column(columns) {
        if let Some(cell) = row.get(index) {
            return cell;
        }
    }
    row.get(1)
        .or_else(|| row.first())
        .map_or("", String::as_str)
}
