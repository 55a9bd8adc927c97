use actix_web::{web, HttpResponse, Responder};

use crate::acceptance::models::{AcceptanceIn, AcceptanceRecord, CreateAcceptanceResponse};
use crate::db::AppState;
use crate::ErrorResponse;

/// Confirmation shown to the portal after a successful save.
const SAVED_MESSAGE: &str = "Мэдээлэл амжилттай хадгалагдлаа!";

#[utoipa::path(
    post,
    path = "/acceptance",
    tag = "Acceptance Service",
    request_body = AcceptanceIn,
    responses(
        (status = 200, description = "Record stored", body = CreateAcceptanceResponse),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Store operation failed", body = ErrorResponse)
    )
)]
pub async fn create_acceptance(
    state: web::Data<AppState>,
    body: web::Json<AcceptanceIn>,
) -> impl Responder {
    let input = body.into_inner();

    match state
        .insert_acceptance(
            &input.client_type,
            &input.company_name,
            input.revenue.as_deref().unwrap_or(""),
            input.total_assets.as_deref().unwrap_or(""),
        )
        .await
    {
        Ok(record) => HttpResponse::Ok().json(CreateAcceptanceResponse {
            success: true,
            message: SAVED_MESSAGE.to_string(),
            record,
        }),
        Err(e) => {
            log::error!("Failed to insert acceptance record: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("failed to store record"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/acceptance",
    tag = "Acceptance Service",
    responses(
        (status = 200, description = "All records, newest first", body = [AcceptanceRecord]),
        (status = 500, description = "Store operation failed", body = ErrorResponse)
    )
)]
pub async fn list_acceptance(state: web::Data<AppState>) -> impl Responder {
    match state.get_all_acceptances().await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            log::error!("Failed to list acceptance records: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("failed to read records"))
        }
    }
}
