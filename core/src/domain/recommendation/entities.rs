use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::medication::entities::Medication;

/// A medication plus its derived suitability score and the warnings
/// assembled at scoring time. Valid for a single scoring call; the catalog
/// entry itself is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub medication: Medication,
    pub score: i32,
    pub extra_warnings: Vec<String>,
}

impl Recommendation {
    /// Base warnings followed by the profile-derived ones.
    pub fn all_warnings(&self) -> impl Iterator<Item = &String> {
        self.medication.warnings.iter().chain(self.extra_warnings.iter())
    }
}
