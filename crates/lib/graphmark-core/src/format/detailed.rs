//! Detailed Markdown view: full tables plus value-column statistics.

use crate::record::GraphRecord;

use super::{ColumnMarkers, clean_text, format_percent, parse_numeric, value_stats};

/// Renders the detailed view of a record.
///
/// Always succeeds; absent optional fields are simply omitted, and rows whose
/// length does not match the column count are dropped from the data table.
#[must_use]
pub fn render_detailed(record: &GraphRecord, markers: &ColumnMarkers) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n", record.name));

    if let Some(description) = record.description.as_deref() {
        let cleaned = clean_text(description);
        if !cleaned.is_empty() {
            out.push_str(&format!("\n**Description:** {cleaned}\n"));
        }
    }

    out.push_str("\n## Basic information\n\n");
    out.push_str("| Field | Value |\n| --- | --- |\n");
    out.push_str(&format!("| ID | {} |\n", record.id));
    push_optional_field(&mut out, "Unit category", record.unit_category.as_deref());
    push_optional_field(&mut out, "Unit label", record.unit_label.as_deref());
    push_optional_field(&mut out, "Registrant", record.registrant.as_deref());
    push_optional_field(&mut out, "Registered at", record.registered_at.as_deref());
    out.push_str(&format!("| Rows | {} |\n", record.rows.len()));

    let sources = [
        ("Source", record.source_url.as_deref()),
        ("Organization", record.organization_url.as_deref()),
        ("Link", record.link_url.as_deref()),
    ];
    if sources.iter().any(|(_, url)| url.is_some()) {
        out.push_str("\n## Data source\n\n| Kind | URL |\n| --- | --- |\n");
        for (kind, url) in sources {
            if let Some(url) = url {
                out.push_str(&format!("| {kind} | {url} |\n"));
            }
        }
    }

    if !record.rows.is_empty() && !record.column_names.is_empty() {
        out.push_str("\n## Data\n\n");
        out.push_str(&format!("| {} |\n", record.column_names.join(" | ")));
        let separator = vec!["---"; record.column_names.len()].join(" | ");
        out.push_str(&format!("| {separator} |\n"));
        for row in record.valid_rows() {
            let cells: Vec<String> = row
                .iter()
                .zip(&record.column_names)
                .map(|(cell, column)| render_cell(cell, column, markers))
                .collect();
            out.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
    }

    if let Some((column, stats)) = value_stats(record, markers) {
        out.push_str(&format!(
            "\n## Statistics ({})\n\n",
            record.column_names[column]
        ));
        out.push_str("| Statistic | Value |\n| --- | --- |\n");
        out.push_str(&format!("| Sum | {} |\n", format_percent(stats.sum)));
        out.push_str(&format!("| Mean | {} |\n", format_percent(stats.mean)));
        out.push_str(&format!("| Max | {} |\n", format_percent(stats.max)));
        out.push_str(&format!("| Min | {} |\n", format_percent(stats.min)));
        out.push_str(&format!("| Count | {} |\n", stats.count));
    }

    out
}

fn push_optional_field(out: &mut String, field: &str, value: Option<&str>) {
    if let Some(value) = value {
        out.push_str(&format!("| {field} | {value} |\n"));
    }
}

/// Percent-scales numeric cells in value-marked columns; everything else is
/// passed through verbatim.
fn render_cell(cell: &str, column: &str, markers: &ColumnMarkers) -> String {
    if markers.is_value_column(column) {
        if let Some(value) = parse_numeric(cell) {
            return format_percent(value);
        }
    }
    cell.to_string()
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{mbti_record, record_with_rows};
    use super::*;

    #[test]
    fn renders_value_cells_as_percentages() {
        let record = mbti_record();
        let output = render_detailed(&record, &ColumnMarkers::default());

        assert!(output.starts_with("# MBTI distribution\n"));
        assert!(output.contains("| 08 | INFP | 13.4% |"));
        assert!(output.contains("| 15 | ENFP | 12.6% |"));
    }

    #[test]
    fn statistics_cover_the_value_column() {
        let record = mbti_record();
        let output = render_detailed(&record, &ColumnMarkers::default());

        assert!(output.contains("## Statistics (value)"));
        assert!(output.contains("| Sum | 32.3% |"));
        assert!(output.contains("| Mean | 10.8% |"));
        assert!(output.contains("| Max | 13.4% |"));
        assert!(output.contains("| Min | 6.3% |"));
        assert!(output.contains("| Count | 3 |"));
    }

    #[test]
    fn mismatched_rows_leave_an_empty_table() {
        let record = record_with_rows(
            &["time", "type", "value"],
            &[&["1", "short"], &["1", "2", "3", "long"]],
        );
        let output = render_detailed(&record, &ColumnMarkers::default());

        assert!(output.contains("| time | type | value |"));
        assert!(output.contains("| --- | --- | --- |"));
        assert!(!output.contains("| 1 | short |"));
        assert!(!output.contains("long"));
        // No numeric cells survive, so the statistics section disappears too.
        assert!(!output.contains("## Statistics"));
        // The row count still reports what upstream sent.
        assert!(output.contains("| Rows | 2 |"));
    }

    #[test]
    fn empty_rows_omit_data_and_statistics() {
        let record = record_with_rows(&["time", "type", "value"], &[]);
        let output = render_detailed(&record, &ColumnMarkers::default());

        assert!(!output.contains("## Data\n"));
        assert!(!output.contains("## Statistics"));
        assert!(output.contains("| Rows | 0 |"));
    }

    #[test]
    fn non_numeric_value_cells_pass_through_verbatim() {
        let record = record_with_rows(
            &["time", "value"],
            &[&["1", "0.5"], &["2", "suppressed"]],
        );
        let output = render_detailed(&record, &ColumnMarkers::default());

        assert!(output.contains("| 1 | 50.0% |"));
        assert!(output.contains("| 2 | suppressed |"));
    }

    #[test]
    fn description_is_cleaned_before_rendering() {
        let mut record = mbti_record();
        record.description = Some("<p>Share of &quot;types&quot;</p>".to_string());
        let output = render_detailed(&record, &ColumnMarkers::default());

        assert!(output.contains("**Description:** Share of \"types\"\n"));
        assert!(!output.contains("<p>"));
    }

    #[test]
    fn data_source_section_lists_only_present_urls() {
        let mut record = mbti_record();
        let output = render_detailed(&record, &ColumnMarkers::default());
        assert!(!output.contains("## Data source"));

        record.source_url = Some("https://example.test/source".to_string());
        let output = render_detailed(&record, &ColumnMarkers::default());
        assert!(output.contains("## Data source"));
        assert!(output.contains("| Source | https://example.test/source |"));
        assert!(!output.contains("| Organization |"));
    }
}
