use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Partial profile update with shallow merge semantics: only the provided
/// fields overwrite, everything else is left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub allergies: Option<Vec<String>>,
    #[serde(default)]
    pub chronic_conditions: Option<Vec<String>>,
    #[serde(default)]
    pub current_medications: Option<Vec<String>>,
    #[serde(default)]
    pub body_type: Option<String>,
}

/// One conversation turn to append; the store stamps the date.
#[derive(Debug, Clone)]
pub struct SaveConversationInput {
    pub user_message: String,
    pub assistant_message: String,
    pub symptoms: Vec<String>,
    pub recommended_medications: Vec<String>,
}
