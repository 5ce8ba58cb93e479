use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Placeholder value returned when the public data API has no record.
pub const NO_INFORMATION: &str = "정보 없음";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicationInfo {
    pub image_url: Option<String>,
    pub price: String,
}

impl MedicationInfo {
    pub fn not_found() -> Self {
        Self {
            image_url: None,
            price: NO_INFORMATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaxDosageInfo {
    pub day_max_dosg: String,
}

impl MaxDosageInfo {
    pub fn not_found() -> Self {
        Self {
            day_max_dosg: NO_INFORMATION.to_string(),
        }
    }
}
