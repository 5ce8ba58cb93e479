use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Mutable per-user state, keyed by `user_id`, held for the process
/// lifetime only. History lists are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub username: String,
    pub age: Option<u32>,
    pub allergies: Vec<String>,
    pub chronic_conditions: Vec<String>,
    pub current_medications: Vec<String>,
    /// 평상형/민감형/관리형/복합형/보양형, recomputed from history.
    pub body_type: Option<String>,
    /// Deduplicated symptoms folded in from saved conversations.
    pub previous_symptoms: Vec<String>,
    pub medication_history: Vec<MedicationHistoryEntry>,
    pub conversation_history: Vec<ConversationTurn>,
}

impl UserProfile {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            age: None,
            allergies: Vec::new(),
            chronic_conditions: Vec::new(),
            current_medications: Vec::new(),
            body_type: Some("평상형".to_string()),
            previous_symptoms: Vec::new(),
            medication_history: Vec::new(),
            conversation_history: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicationHistoryEntry {
    pub medication_id: String,
    pub date: DateTime<Utc>,
    pub symptoms: Vec<String>,
    pub result: MedicationResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MedicationResult {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversationTurn {
    pub date: DateTime<Utc>,
    pub user_message: String,
    pub assistant_message: String,
    pub symptoms: Vec<String>,
    pub recommended_medications: Vec<String>,
}
