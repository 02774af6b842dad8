//! Upstream graph record model.

use serde::Deserialize;

/// Literal value of [`GraphRecord::message`] that marks a successful response.
pub const STATUS_OK: &str = "OK";

/// One graph record as returned by the upstream API.
///
/// The record is transient: built from a single HTTP response, rendered, and
/// discarded. Rows are positionally aligned with `column_names`; a row whose
/// length differs is skipped by rendering and statistics. Cell values are
/// opaque strings, numeric interpretation happens per cell at render time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphRecord {
    /// Opaque identifier, caller-supplied and echoed back in the output.
    pub id: String,
    pub name: String,
    /// May contain inline HTML-like markup; cleaned before rendering.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub unit_category: Option<String>,
    #[serde(default)]
    pub unit_label: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub organization_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub registrant: Option<String>,
    /// Opaque display text, never parsed as a date.
    #[serde(default)]
    pub registered_at: Option<String>,
    #[serde(default)]
    pub column_names: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
    /// Application-level status discriminator; anything other than
    /// [`STATUS_OK`] is a failure even on HTTP 200.
    pub message: String,
}

impl GraphRecord {
    /// Iterates rows whose length matches `column_names`.
    pub fn valid_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        let width = self.column_names.len();
        self.rows.iter().filter(move |row| row.len() == width)
    }

    /// Whether the upstream marked this record as successfully resolved.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.message == STATUS_OK
    }
}
