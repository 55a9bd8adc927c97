use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod acceptance;
pub mod db;
pub mod documents;

pub use crate::db::AppState;

/// Plaintext status line for GET /.
const STATUS_MESSAGE: &str =
    "INTAX Audit Backend ажиллаж байна. /acceptance POST/GET, /documents/generate PDF бэлэн.";

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Status",
    responses(
        (status = 200, description = "Service status line", body = String, content_type = "text/plain")
    )
)]
pub async fn status() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(STATUS_MESSAGE)
}

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::status,
            crate::acceptance::handlers::create_acceptance,
            crate::acceptance::handlers::list_acceptance,
            crate::documents::handlers::generate_document,
        ),
        components(
            schemas(
                acceptance::models::AcceptanceIn,
                acceptance::models::AcceptanceRecord,
                acceptance::models::CreateAcceptanceResponse,
                documents::models::DocumentRequest,
                ErrorResponse,
            )
        ),
        tags(
            (name = "Status", description = "Service status."),
            (name = "Acceptance Service", description = "Client-intake record endpoints."),
            (name = "Document Service", description = "Templated PDF letter generation.")
        )
    )]
    struct ApiDoc;

    dotenvy::dotenv().ok(); // Load .env file
    let app_state = match AppState::new().await {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!(
                "Failed to connect to the document store. Please check DATABASE_URL in .env and ensure the database is running. Error: {}",
                e
            );
            std::process::exit(1);
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("intax_audit_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    log::info!("Starting server at http://0.0.0.0:8080");

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let prometheus = prometheus.clone();
        // All origins, methods, headers, credentials - required by the
        // portal frontend contract. Tighten once its origin list is fixed.
        let cors = Cors::permissive();

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state)
            .service(web::resource("/").route(web::get().to(status)))
            .service(
                web::resource("/acceptance")
                    .route(web::get().to(acceptance::handlers::list_acceptance))
                    .route(web::post().to(acceptance::handlers::create_acceptance)),
            )
            .service(
                web::resource("/documents/generate")
                    .route(web::post().to(documents::handlers::generate_document)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(("0.0.0.0", 8080))?
    .run()
    .await
}
