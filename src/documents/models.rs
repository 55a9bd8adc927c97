use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for POST /documents/generate.
///
/// `type` stays a plain string so an unknown value reaches the handler and
/// gets the documented 400 with a message, instead of dying inside the JSON
/// extractor.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DocumentRequest {
    #[serde(rename = "type")]
    #[schema(example = "contract")]
    pub doc_type: String,
    #[serde(rename = "companyName")]
    #[schema(example = "Acme")]
    pub company_name: String,
}

/// The three supported letter templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Contract,
    Engagement,
    Management,
}

impl DocumentType {
    /// Parse the wire code. Anything outside the fixed set is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "contract" => Some(Self::Contract),
            "engagement" => Some(Self::Engagement),
            "management" => Some(Self::Management),
            _ => None,
        }
    }

    /// Subtitle line drawn beneath the brand title.
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Contract => "Audit Service Agreement",
            Self::Engagement => "Audit Engagement Letter",
            Self::Management => "Management Responsibility Letter",
        }
    }

    /// First half of the download filename.
    pub fn filename_prefix(self) -> &'static str {
        match self {
            Self::Contract => "Audit_Contract",
            Self::Engagement => "Engagement_Letter",
            Self::Management => "Management_Letter",
        }
    }
}
