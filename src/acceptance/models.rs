use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Intake submission body. Only shape is checked; field contents are
/// free text. Absent, `null` and `""` are equivalent for the optional
/// financial fields and all collapse to an empty string.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcceptanceIn {
    #[schema(example = "LLC")]
    pub client_type: String,
    #[schema(example = "Acme")]
    pub company_name: String,
    #[serde(default)]
    #[schema(example = "120000000")]
    pub revenue: Option<String>,
    #[serde(default)]
    #[schema(example = "450000000")]
    pub total_assets: Option<String>,
}

/// Stored acceptance record as returned to clients. `id` is the
/// store-generated identifier rendered as a string; `createdAt` is the
/// server-side insertion time.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcceptanceRecord {
    #[schema(example = "a1b2c3d4-e5f6-7890-1234-567890abcdef")]
    pub id: String,
    #[schema(example = "LLC")]
    pub client_type: String,
    #[schema(example = "Acme")]
    pub company_name: String,
    pub revenue: String,
    pub total_assets: String,
    pub created_at: DateTime<Utc>,
}

/// Envelope for a successful POST /acceptance.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateAcceptanceResponse {
    pub success: bool,
    #[schema(example = "Мэдээлэл амжилттай хадгалагдлаа!")]
    pub message: String,
    pub record: AcceptanceRecord,
}
