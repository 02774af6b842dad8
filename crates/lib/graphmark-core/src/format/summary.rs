//! Summary Markdown view: key figures plus best/worst categories.

use crate::record::GraphRecord;

use super::{
    ColumnMarkers, clean_text, extremes, format_percent, render_detailed, row_label, value_stats,
};

/// Renders the summary view of a record.
///
/// With `include_details` the full detailed view is appended below a
/// separator; otherwise a one-line hint names the flag.
#[must_use]
pub fn render_summary(
    record: &GraphRecord,
    include_details: bool,
    markers: &ColumnMarkers,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {} (Summary)\n\n", record.name));
    out.push_str(&format!("- ID: {}\n", record.id));
    out.push_str(&format!("- Rows: {}\n", record.rows.len()));
    match (record.unit_category.as_deref(), record.unit_label.as_deref()) {
        (Some(category), Some(label)) => {
            out.push_str(&format!("- Unit: {category} / {label}\n"));
        }
        (Some(unit), None) | (None, Some(unit)) => {
            out.push_str(&format!("- Unit: {unit}\n"));
        }
        (None, None) => {}
    }
    if let Some(registered_at) = record.registered_at.as_deref() {
        out.push_str(&format!("- Registered at: {registered_at}\n"));
    }

    if let Some(description) = record.description.as_deref() {
        let cleaned = clean_text(description);
        if !cleaned.is_empty() {
            out.push_str(&format!("\n{cleaned}\n"));
        }
    }

    if let Some((column, stats)) = value_stats(record, markers) {
        if let Some(extremes) = extremes(record, column) {
            let best = row_label(extremes.max_row, &record.column_names, markers);
            let worst = row_label(extremes.min_row, &record.column_names, markers);
            out.push('\n');
            out.push_str(&format!("- Best: {best} ({})\n", format_percent(extremes.max)));
            out.push_str(&format!(
                "- Worst: {worst} ({})\n",
                format_percent(extremes.min)
            ));
            out.push_str(&format!("- Total: {}\n", format_percent(stats.sum)));
        }
    }

    if include_details {
        out.push_str("\n---\n\n");
        out.push_str(&render_detailed(record, markers));
    } else {
        out.push_str("\nPass `includeDetails: true` to include the full data table.\n");
    }
    out
}
