//! Documents module - templated single-page PDF letters.
//!
//! Three fixed document types are supported:
//! - `contract` - Audit Service Agreement
//! - `engagement` - Audit Engagement Letter
//! - `management` - Management Responsibility Letter
//!
//! Generation is stateless and in-memory; nothing is persisted and no
//! identifier is assigned to a generated document.

pub mod common;
pub mod generator;
pub mod handlers;
pub mod font_metrics;
pub mod models;

pub use generator::{generate, generate_with_date};
pub use models::{DocumentRequest, DocumentType};

use thiserror::Error;

/// Errors that can occur while rendering a document.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to encode page content stream: {0}")]
    EncodeContent(#[source] lopdf::Error),
    #[error("failed to serialize PDF document: {0}")]
    WritePdf(#[source] lopdf::Error),
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    /// Download filename, already sanitized for the Content-Disposition
    /// header.
    pub filename: String,
    pub pdf: Vec<u8>,
}
