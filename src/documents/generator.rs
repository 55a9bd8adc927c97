//! Fixed-layout letter rendering.
//!
//! One A4 page built directly from content-stream operations: a bold brand
//! title and a subtitle centred near the top, then the company name, the
//! current UTC date and a boilerplate line at fixed coordinates. Content
//! streams are left uncompressed, so identical inputs serialize to identical
//! bytes.

use chrono::{NaiveDate, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

use super::common::{attachment_filename, format_utc_date};
use super::font_metrics::{self, Font};
use super::models::DocumentType;
use super::{GeneratedDocument, GeneratorError};

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const CENTER_X: f32 = 300.0;
const MARGIN_X: f32 = 50.0;

const BRAND_TITLE: &str = "INTAX AUDIT SERVICES";
const FOOTER_LINE: &str = "This PDF was generated automatically by the INTAX Audit Portal.";

/// Render a letter for today's UTC calendar date.
pub fn generate(
    doc_type: DocumentType,
    company_name: &str,
) -> Result<GeneratedDocument, GeneratorError> {
    generate_with_date(doc_type, company_name, Utc::now().date_naive())
}

/// Render a letter for an explicit date.
///
/// Split out from [`generate`] so tests can pin the date; identical
/// `(doc_type, company_name, date)` triples produce byte-identical output.
pub fn generate_with_date(
    doc_type: DocumentType,
    company_name: &str,
    date: NaiveDate,
) -> Result<GeneratedDocument, GeneratorError> {
    let mut ops = Vec::new();

    draw_centred(&mut ops, Font::HelveticaBold, 16.0, 780.0, BRAND_TITLE);
    draw_centred(&mut ops, Font::Helvetica, 13.0, 760.0, doc_type.subtitle());
    draw_at(
        &mut ops,
        Font::Helvetica,
        11.0,
        MARGIN_X,
        720.0,
        &format!("Company name: {}", company_name),
    );
    draw_at(
        &mut ops,
        Font::Helvetica,
        11.0,
        MARGIN_X,
        700.0,
        &format!("Date: {}", format_utc_date(date)),
    );
    draw_at(&mut ops, Font::Helvetica, 11.0, MARGIN_X, 660.0, FOOTER_LINE);

    let pdf = write_single_page(ops)?;

    Ok(GeneratedDocument {
        filename: attachment_filename(doc_type, company_name),
        pdf,
    })
}

/// One text line at an absolute position.
fn draw_at(ops: &mut Vec<Operation>, font: Font, size: f32, x: f32, y: f32, text: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![font.resource_name().into(), size.into()],
    ));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(text)]));
    ops.push(Operation::new("ET", vec![]));
}

/// One text line with its midpoint at `CENTER_X`.
fn draw_centred(ops: &mut Vec<Operation>, font: Font, size: f32, y: f32, text: &str) {
    let x = CENTER_X - font_metrics::text_width(font, size, text) / 2.0;
    draw_at(ops, font, size, x, y, text);
}

/// Assemble a finalized one-page document around the given operations.
fn write_single_page(operations: Vec<Operation>) -> Result<Vec<u8>, GeneratorError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources = doc.add_object(dictionary! {
        "Font" => dictionary! {
            Font::Helvetica.resource_name() => regular,
            Font::HelveticaBold.resource_name() => bold,
        },
    });

    let content = Content { operations };
    let encoded = content.encode().map_err(GeneratorError::EncodeContent)?;
    let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| GeneratorError::WritePdf(e.into()))?;
    Ok(buffer)
}
