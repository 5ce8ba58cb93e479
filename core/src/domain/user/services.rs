use std::collections::HashMap;
use std::future::Future;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    user::{
        entities::{MedicationResult, UserProfile},
        ports::UserProfileRepository,
        value_objects::ProfileUpdate,
    },
};
use crate::domain::chat::ports::CompletionClient;

pub trait UserProfileService: Send + Sync {
    fn get_profile(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    fn update_profile(
        &self,
        user_id: &str,
        update: ProfileUpdate,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    fn get_or_create_google_user(
        &self,
        user_id: &str,
        email: &str,
        name: &str,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}

impl<P, L> UserProfileService for Service<P, L>
where
    P: UserProfileRepository,
    L: CompletionClient,
{
    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, CoreError> {
        self.user_repository.get_profile(user_id).await
    }

    async fn update_profile(
        &self,
        user_id: &str,
        update: ProfileUpdate,
    ) -> Result<(), CoreError> {
        self.user_repository.update_profile(user_id, update).await
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserProfile>, CoreError> {
        self.user_repository.authenticate(username, password).await
    }

    async fn get_or_create_google_user(
        &self,
        user_id: &str,
        email: &str,
        name: &str,
    ) -> Result<UserProfile, CoreError> {
        self.user_repository
            .get_or_create_google_user(user_id, email, name)
            .await
    }
}

/// Body type used for the personalised closing line: the stored value when
/// present, otherwise inferred from chronic conditions and history.
pub fn analyze_body_type(profile: &UserProfile) -> String {
    if let Some(body_type) = &profile.body_type {
        return body_type.clone();
    }

    let conditions = &profile.chronic_conditions;
    if conditions.iter().any(|c| c == "천식" || c == "아토피") {
        return "민감형".to_string();
    }
    if profile
        .medication_history
        .iter()
        .any(|h| h.result == MedicationResult::Negative)
    {
        return "민감형".to_string();
    }
    if conditions.iter().any(|c| c == "당뇨" || c == "고혈압") {
        return "관리형".to_string();
    }
    "평상형".to_string()
}

/// Recomputes the body type from conversation history: the three most
/// frequent symptoms drive the cascade, long varied histories classify as
/// 복합형, otherwise the current value stands.
pub fn derive_body_type_from_conversations(profile: &UserProfile) -> String {
    let history = &profile.conversation_history;

    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for turn in history {
        for symptom in &turn.symptoms {
            *frequency.entry(symptom.as_str()).or_insert(0) += 1;
        }
    }
    let mut ranked: Vec<(&str, usize)> = frequency.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    let frequent: Vec<&str> = ranked.into_iter().take(3).map(|(s, _)| s).collect();

    let current = profile
        .body_type
        .clone()
        .unwrap_or_else(|| "평상형".to_string());

    if frequent
        .iter()
        .any(|s| s.contains("알레르기") || s.contains("민감"))
    {
        return "민감형".to_string();
    }
    if frequent.iter().any(|s| s.contains("만성") || s.contains("관리")) {
        return "관리형".to_string();
    }
    if history.len() > 5 {
        let mut unique: Vec<&str> = history
            .iter()
            .flat_map(|t| t.symptoms.iter().map(String::as_str))
            .collect();
        unique.sort_unstable();
        unique.dedup();
        if unique.len() > 5 {
            return "복합형".to_string();
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::entities::{ConversationTurn, MedicationHistoryEntry};
    use chrono::Utc;

    fn turn(symptoms: &[&str]) -> ConversationTurn {
        ConversationTurn {
            date: Utc::now(),
            user_message: String::new(),
            assistant_message: String::new(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            recommended_medications: Vec::new(),
        }
    }

    #[test]
    fn stored_body_type_wins() {
        let mut profile = UserProfile::new("u1", "이름");
        profile.body_type = Some("보양형".to_string());
        assert_eq!(analyze_body_type(&profile), "보양형");
    }

    #[test]
    fn negative_history_implies_sensitive() {
        let mut profile = UserProfile::new("u1", "이름");
        profile.body_type = None;
        profile.medication_history.push(MedicationHistoryEntry {
            medication_id: "med_002".to_string(),
            date: Utc::now(),
            symptoms: vec![],
            result: MedicationResult::Negative,
        });
        assert_eq!(analyze_body_type(&profile), "민감형");
    }

    #[test]
    fn varied_long_history_becomes_complex() {
        let mut profile = UserProfile::new("u1", "이름");
        for symptoms in [
            ["두통"].as_slice(),
            &["복통"],
            &["기침"],
            &["불면증"],
            &["비염"],
            &["열", "치통"],
        ] {
            profile.conversation_history.push(turn(symptoms));
        }
        assert_eq!(derive_body_type_from_conversations(&profile), "복합형");
    }

    #[test]
    fn short_history_keeps_current_type() {
        let mut profile = UserProfile::new("u1", "이름");
        profile.conversation_history.push(turn(&["두통"]));
        assert_eq!(derive_body_type_from_conversations(&profile), "평상형");
    }
}
