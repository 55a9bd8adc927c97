use chrono::NaiveDate;

use intax_audit_server::documents::common::attachment_filename;
use intax_audit_server::documents::font_metrics::{text_width, Font};
use intax_audit_server::documents::{generate_with_date, DocumentType};

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[test]
fn test_from_code_accepts_only_fixed_set() {
    assert_eq!(
        DocumentType::from_code("contract"),
        Some(DocumentType::Contract)
    );
    assert_eq!(
        DocumentType::from_code("engagement"),
        Some(DocumentType::Engagement)
    );
    assert_eq!(
        DocumentType::from_code("management"),
        Some(DocumentType::Management)
    );

    assert_eq!(DocumentType::from_code("invoice"), None);
    assert_eq!(DocumentType::from_code("Contract"), None);
    assert_eq!(DocumentType::from_code(""), None);
}

#[test]
fn test_type_table() {
    assert_eq!(
        DocumentType::Contract.subtitle(),
        "Audit Service Agreement"
    );
    assert_eq!(
        DocumentType::Engagement.subtitle(),
        "Audit Engagement Letter"
    );
    assert_eq!(
        DocumentType::Management.subtitle(),
        "Management Responsibility Letter"
    );

    assert_eq!(DocumentType::Contract.filename_prefix(), "Audit_Contract");
    assert_eq!(
        DocumentType::Engagement.filename_prefix(),
        "Engagement_Letter"
    );
    assert_eq!(
        DocumentType::Management.filename_prefix(),
        "Management_Letter"
    );
}

#[test]
fn test_attachment_filename_convention() {
    assert_eq!(
        attachment_filename(DocumentType::Contract, "Acme"),
        "Audit_Contract_Acme.pdf"
    );
    assert_eq!(
        attachment_filename(DocumentType::Management, "Acme"),
        "Management_Letter_Acme.pdf"
    );
}

#[test]
fn test_attachment_filename_strips_path_characters() {
    let name = attachment_filename(DocumentType::Contract, "../../etc/passwd");
    assert!(!name.contains('/'));
    assert!(name.starts_with("Audit_Contract_"));
    assert!(name.ends_with(".pdf"));

    let name = attachment_filename(DocumentType::Contract, "Acme\r\nEvil: header");
    assert!(!name.contains('\r'));
    assert!(!name.contains('\n'));
}

#[test]
fn test_attachment_filename_falls_back_when_name_is_empty() {
    assert_eq!(
        attachment_filename(DocumentType::Engagement, "   "),
        "Engagement_Letter_document.pdf"
    );
}

#[test]
fn test_generation_is_deterministic_for_fixed_date() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

    let first = generate_with_date(DocumentType::Contract, "Acme", date).unwrap();
    let second = generate_with_date(DocumentType::Contract, "Acme", date).unwrap();

    assert_eq!(first.pdf, second.pdf);
    assert_eq!(first.filename, second.filename);
}

#[test]
fn test_output_is_a_finalized_pdf() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let document = generate_with_date(DocumentType::Engagement, "Acme", date).unwrap();

    assert!(document.pdf.starts_with(b"%PDF-"));
    let tail = &document.pdf[document.pdf.len().saturating_sub(16)..];
    assert!(contains_bytes(tail, b"%%EOF"));
}

#[test]
fn test_page_text_includes_dynamic_fields() {
    // Content streams are uncompressed, so the drawn strings appear
    // literally in the output bytes.
    let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let document = generate_with_date(DocumentType::Contract, "Acme", date).unwrap();

    assert!(contains_bytes(&document.pdf, b"Acme"));
    assert!(contains_bytes(&document.pdf, b"2026-03-01"));
    assert!(contains_bytes(&document.pdf, b"Audit Service Agreement"));
}

#[test]
fn test_different_types_render_different_pages() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

    let contract = generate_with_date(DocumentType::Contract, "Acme", date).unwrap();
    let management = generate_with_date(DocumentType::Management, "Acme", date).unwrap();

    assert_ne!(contract.pdf, management.pdf);
}

#[test]
fn test_text_width_tracks_font_and_size() {
    let narrow = text_width(Font::Helvetica, 11.0, "il");
    let wide = text_width(Font::Helvetica, 11.0, "WM");
    assert!(wide > narrow);

    let small = text_width(Font::HelveticaBold, 8.0, "INTAX");
    let large = text_width(Font::HelveticaBold, 16.0, "INTAX");
    assert!((large - small * 2.0).abs() < 0.001);
}
