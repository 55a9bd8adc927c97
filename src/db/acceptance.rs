//! Acceptance table operations

use super::AppState;
use crate::acceptance::models::AcceptanceRecord;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Stored shape of an acceptance row. `revenue` and `total_assets` are
/// nullable in the table; both map to an empty string on the way out.
#[derive(FromRow)]
struct AcceptanceRow {
    id: Uuid,
    client_type: String,
    company_name: String,
    revenue: Option<String>,
    total_assets: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<AcceptanceRow> for AcceptanceRecord {
    fn from(row: AcceptanceRow) -> Self {
        AcceptanceRecord {
            id: row.id.to_string(),
            client_type: row.client_type,
            company_name: row.company_name,
            revenue: row.revenue.unwrap_or_default(),
            total_assets: row.total_assets.unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}

impl AppState {
    /// Insert one acceptance record and return it with the store-generated
    /// id. `created_at` is bound from the server clock at the moment of the
    /// call, never taken from the client.
    pub async fn insert_acceptance(
        &self,
        client_type: &str,
        company_name: &str,
        revenue: &str,
        total_assets: &str,
    ) -> Result<AcceptanceRecord, sqlx::Error> {
        let row: AcceptanceRow = sqlx::query_as(
            r#"
            INSERT INTO acceptance (client_type, company_name, revenue, total_assets, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, client_type, company_name, revenue, total_assets, created_at
            "#,
        )
        .bind(client_type)
        .bind(company_name)
        .bind(revenue)
        .bind(total_assets)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Every acceptance record, newest first, fully materialized.
    pub async fn get_all_acceptances(&self) -> Result<Vec<AcceptanceRecord>, sqlx::Error> {
        let rows: Vec<AcceptanceRow> = sqlx::query_as(
            "SELECT id, client_type, company_name, revenue, total_assets, created_at \
             FROM acceptance ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
