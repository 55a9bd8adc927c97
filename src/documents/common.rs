//! Shared helpers for document generation: filenames and date formatting.

use chrono::NaiveDate;

use super::models::DocumentType;

/// Build the attachment filename for a generated letter.
///
/// The company name goes through `sanitize_filename::sanitize` before it is
/// interpolated, so path separators and control characters never reach the
/// Content-Disposition header. An empty remainder falls back to "document".
pub fn attachment_filename(doc_type: DocumentType, company_name: &str) -> String {
    let safe = sanitize_filename::sanitize(company_name.trim());
    let safe = if safe.is_empty() {
        "document".to_string()
    } else {
        safe
    };
    format!("{}_{}.pdf", doc_type.filename_prefix(), safe)
}

/// UTC calendar date as printed on the letter, date only.
pub fn format_utc_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
