//! Database module - AppState and acceptance table operations
//!
//! The service keeps a single shared `PgPool`; every handler borrows it
//! through `web::Data<AppState>`. No pooling policy of our own beyond what
//! the client defaults to.

mod acceptance;

use dotenvy::dotenv;
use sqlx::PgPool;
use std::env;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    /// Connect to the store named by `DATABASE_URL`.
    ///
    /// Called once at startup. A missing variable or a failed connection is
    /// returned as an error; the caller treats either as fatal, so the
    /// process never serves traffic without a store connection.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv().ok();
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in .env or the environment")?;

        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect(&database_url)
            .await?;

        Ok(AppState { pool })
    }

    /// Wrap an existing pool. Used by tests that bring their own database.
    pub fn with_pool(pool: PgPool) -> Self {
        AppState { pool }
    }
}
