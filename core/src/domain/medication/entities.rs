use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One over-the-counter medication of the bundled catalog. Static for the
/// process lifetime; the scorer never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Canonical symptom tags this medication addresses. Never empty.
    pub symptoms: Vec<String>,
    /// Active ingredients, cross-checked against profile allergies.
    pub ingredients: Vec<String>,
    pub dosage: String,
    pub warnings: Vec<String>,
    /// Free-text note tied to chronic conditions.
    pub caution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_notes: Option<AgeNotes>,
}

/// Age-band restrictions and safer alternatives, surfaced by the composer
/// for infant (0-2) and elderly (65+) users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AgeNotes {
    pub infant: Option<String>,
    pub elderly: Option<String>,
    pub infant_alternatives: Vec<String>,
    pub elderly_alternatives: Vec<String>,
}
