use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};

use crate::documents::models::{DocumentRequest, DocumentType};
use crate::documents::{generate, GeneratedDocument};
use crate::ErrorResponse;

/// Rejection shown to the portal for an unknown document type.
const INVALID_TYPE_MESSAGE: &str = "type буруу байна";

#[utoipa::path(
    post,
    path = "/documents/generate",
    tag = "Document Service",
    request_body = DocumentRequest,
    responses(
        (status = 200, description = "Generated PDF", body = Vec<u8>, content_type = "application/pdf"),
        (status = 400, description = "Unknown document type", body = ErrorResponse),
        (status = 500, description = "Rendering failed", body = ErrorResponse)
    )
)]
pub async fn generate_document(body: web::Json<DocumentRequest>) -> impl Responder {
    let request = body.into_inner();

    let Some(doc_type) = DocumentType::from_code(&request.doc_type) else {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(INVALID_TYPE_MESSAGE));
    };

    match generate(doc_type, &request.company_name) {
        Ok(GeneratedDocument { filename, pdf }) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ))
            .body(pdf),
        Err(e) => {
            log::error!("Failed to render {:?} document: {}", doc_type, e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("failed to render document"))
        }
    }
}
