use crate::domain::{
    medication::catalog::MedicationCatalog,
    recommendation::entities::Recommendation,
    user::entities::{MedicationResult, UserProfile},
};

const BASE_SCORE: i32 = 100;
const CHRONIC_CONDITION_PENALTY: i32 = 30;
// History adjustments stack: each matching history entry applies the
// penalty or boost again, so repeated bad experiences keep lowering the
// score.
const NEGATIVE_HISTORY_PENALTY: i32 = 40;
const POSITIVE_HISTORY_BOOST: i32 = 20;
const MAX_RECOMMENDATIONS: usize = 3;

/// Scores the catalog against extracted symptoms and an optional profile.
/// Deterministic for identical inputs; ties keep catalog declaration order.
#[derive(Debug, Clone)]
pub struct RecommendationScorer {
    catalog: MedicationCatalog,
}

impl RecommendationScorer {
    pub fn new(catalog: MedicationCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MedicationCatalog {
        &self.catalog
    }

    pub fn recommend(
        &self,
        symptoms: &[String],
        profile: Option<&UserProfile>,
    ) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = Vec::new();

        for med in self.catalog.iter() {
            // Bidirectional containment tolerates tag-naming drift between
            // the extractor and the catalog.
            let has_match = symptoms.iter().any(|s| {
                med.symptoms
                    .iter()
                    .any(|declared| s.contains(declared.as_str()) || declared.contains(s.as_str()))
            });
            if !has_match {
                continue;
            }

            let mut score = BASE_SCORE;
            let mut extra_warnings: Vec<String> = Vec::new();

            if let Some(profile) = profile {
                let has_allergy = med.ingredients.iter().any(|ingredient| {
                    profile.allergies.iter().any(|allergen| {
                        ingredient
                            .to_lowercase()
                            .contains(allergen.to_lowercase().as_str())
                    })
                });
                if has_allergy {
                    score = 0;
                    extra_warnings.push("알레르기 성분 포함 - 복용 금지".to_string());
                }

                if let Some(caution) = &med.caution {
                    let caution_lower = caution.to_lowercase();
                    for condition in &profile.chronic_conditions {
                        if caution_lower.contains(condition.to_lowercase().as_str()) {
                            score -= CHRONIC_CONDITION_PENALTY;
                            extra_warnings.push(format!("{condition} 환자 주의"));
                        }
                    }
                }

                let negatives = profile
                    .medication_history
                    .iter()
                    .filter(|h| h.medication_id == med.id && h.result == MedicationResult::Negative)
                    .count();
                if negatives > 0 {
                    score -= NEGATIVE_HISTORY_PENALTY * negatives as i32;
                    extra_warnings.push("과거 부작용 경험".to_string());
                }

                let positives = profile
                    .medication_history
                    .iter()
                    .filter(|h| h.medication_id == med.id && h.result == MedicationResult::Positive)
                    .count();
                score += POSITIVE_HISTORY_BOOST * positives as i32;
            }

            // Score may go negative before this check; exactly zero is
            // excluded (the boundary is "> 0").
            if score > 0 {
                recommendations.push(Recommendation {
                    medication: med.clone(),
                    score,
                    extra_warnings,
                });
            }
        }

        // Stable sort keeps catalog order on equal scores.
        recommendations.sort_by(|a, b| b.score.cmp(&a.score));
        recommendations.truncate(MAX_RECOMMENDATIONS);
        recommendations
    }
}
