use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{TimeZone, Utc};

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{MedicationHistoryEntry, MedicationResult, UserProfile},
        ports::UserProfileRepository,
        services::derive_body_type_from_conversations,
        value_objects::{ProfileUpdate, SaveConversationInput},
    },
};

const DEMO_PASSWORD: &str = "password123";

/// (login name, user id); login names are matched case-insensitively.
const CREDENTIALS: [(&str, &str); 6] = [
    ("hong", "user001"),
    ("홍길동", "user001"),
    ("kim", "user002"),
    ("김민수", "user002"),
    ("lee", "user003"),
    ("이영희", "user003"),
];

/// Process-lifetime profile store seeded with the three demo accounts.
/// Mutations on unknown ids are silent no-ops, matching the lenient store
/// contract; the HTTP layer decides when a missing profile is an error.
pub struct InMemoryUserProfileRepository {
    users: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryUserProfileRepository {
    pub fn empty() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    pub fn seeded() -> Self {
        let repository = Self::empty();
        {
            let mut users = repository
                .users
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            for profile in demo_users() {
                users.insert(profile.user_id.clone(), profile);
            }
        }
        repository
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, UserProfile>>, CoreError>
    {
        self.users.read().map_err(|_| CoreError::InternalServerError)
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, UserProfile>>, CoreError> {
        self.users
            .write()
            .map_err(|_| CoreError::InternalServerError)
    }
}

impl UserProfileRepository for InMemoryUserProfileRepository {
    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, CoreError> {
        Ok(self.read()?.get(user_id).cloned())
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<(), CoreError> {
        let mut users = self.write()?;
        if let Some(profile) = users.get_mut(user_id) {
            if let Some(username) = update.username {
                profile.username = username;
            }
            if let Some(age) = update.age {
                profile.age = Some(age);
            }
            if let Some(allergies) = update.allergies {
                profile.allergies = allergies;
            }
            if let Some(chronic_conditions) = update.chronic_conditions {
                profile.chronic_conditions = chronic_conditions;
            }
            if let Some(current_medications) = update.current_medications {
                profile.current_medications = current_medications;
            }
            if let Some(body_type) = update.body_type {
                profile.body_type = Some(body_type);
            }
        }
        Ok(())
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserProfile>, CoreError> {
        let login = username.to_lowercase();
        let user_id = CREDENTIALS
            .iter()
            .find(|(name, _)| *name == login)
            .map(|(_, id)| *id);
        match user_id {
            Some(id) if password == DEMO_PASSWORD => Ok(self.read()?.get(id).cloned()),
            _ => Ok(None),
        }
    }

    async fn get_or_create_google_user(
        &self,
        user_id: &str,
        _email: &str,
        name: &str,
    ) -> Result<UserProfile, CoreError> {
        let mut users = self.write()?;
        let profile = users
            .entry(user_id.to_string())
            .and_modify(|existing| existing.username = name.to_string())
            .or_insert_with(|| UserProfile::new(user_id, name));
        Ok(profile.clone())
    }

    async fn add_medication_history(
        &self,
        user_id: &str,
        medication_id: &str,
        symptoms: Vec<String>,
    ) -> Result<(), CoreError> {
        let mut users = self.write()?;
        if let Some(profile) = users.get_mut(user_id) {
            profile.medication_history.push(MedicationHistoryEntry {
                medication_id: medication_id.to_string(),
                date: Utc::now(),
                symptoms,
                result: MedicationResult::Neutral,
            });
        }
        Ok(())
    }

    async fn save_conversation(
        &self,
        user_id: &str,
        input: SaveConversationInput,
    ) -> Result<(), CoreError> {
        let mut users = self.write()?;
        if let Some(profile) = users.get_mut(user_id) {
            profile.conversation_history.push(
                crate::domain::user::entities::ConversationTurn {
                    date: Utc::now(),
                    user_message: input.user_message,
                    assistant_message: input.assistant_message,
                    symptoms: input.symptoms.clone(),
                    recommended_medications: input.recommended_medications,
                },
            );
            for symptom in input.symptoms {
                if !profile.previous_symptoms.contains(&symptom) {
                    profile.previous_symptoms.push(symptom);
                }
            }
        }
        Ok(())
    }

    async fn update_characteristics(&self, user_id: &str) -> Result<(), CoreError> {
        let mut users = self.write()?;
        if let Some(profile) = users.get_mut(user_id) {
            let derived = derive_body_type_from_conversations(profile);
            if profile.body_type.as_deref() != Some(derived.as_str()) {
                profile.body_type = Some(derived);
            }
        }
        Ok(())
    }
}

fn demo_users() -> Vec<UserProfile> {
    let negative_date = Utc
        .with_ymd_and_hms(2024, 1, 15, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    let mut hong = UserProfile::new("user001", "홍길동");
    hong.age = Some(35);
    hong.allergies = vec!["페니실린".to_string()];
    hong.chronic_conditions = vec!["고혈압".to_string()];
    hong.body_type = Some("평상형".to_string());

    let mut kim = UserProfile::new("user002", "김민수");
    kim.age = Some(28);
    kim.allergies = vec!["비타민C".to_string(), "카페인".to_string()];
    kim.chronic_conditions = vec!["천식".to_string(), "아토피".to_string()];
    kim.current_medications = vec!["약물A".to_string()];
    kim.body_type = Some("민감형".to_string());
    kim.previous_symptoms = vec!["두통".to_string(), "소화불량".to_string()];
    kim.medication_history.push(MedicationHistoryEntry {
        medication_id: "med_002".to_string(),
        date: negative_date,
        symptoms: vec!["두통".to_string()],
        result: MedicationResult::Negative,
    });

    let mut lee = UserProfile::new("user003", "이영희");
    lee.age = Some(65);
    lee.chronic_conditions = vec!["당뇨".to_string()];
    lee.body_type = Some("보양형".to_string());
    lee.previous_symptoms = vec!["근육통".to_string()];

    vec![hong, kim, lee]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_knows_the_demo_accounts() {
        let repository = InMemoryUserProfileRepository::seeded();
        let hong = repository.get_profile("user001").await.unwrap().unwrap();
        assert_eq!(hong.username, "홍길동");
        assert_eq!(hong.age, Some(35));
        assert!(repository.get_profile("user999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn authenticate_accepts_both_login_spellings() {
        let repository = InMemoryUserProfileRepository::seeded();
        let by_alias = repository
            .authenticate("hong", "password123")
            .await
            .unwrap();
        let by_name = repository
            .authenticate("홍길동", "password123")
            .await
            .unwrap();
        assert_eq!(by_alias.unwrap().user_id, "user001");
        assert_eq!(by_name.unwrap().user_id, "user001");
    }

    #[tokio::test]
    async fn authenticate_rejects_wrong_password() {
        let repository = InMemoryUserProfileRepository::seeded();
        let rejected = repository.authenticate("kim", "wrong").await.unwrap();
        assert!(rejected.is_none());

        let unknown = repository
            .authenticate("nobody", "password123")
            .await
            .unwrap();
        assert!(unknown.is_none());
    }

    #[tokio::test]
    async fn update_profile_merges_only_provided_fields() {
        let repository = InMemoryUserProfileRepository::seeded();
        repository
            .update_profile(
                "user001",
                ProfileUpdate {
                    age: Some(36),
                    allergies: Some(vec!["페니실린".to_string(), "라텍스".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let hong = repository.get_profile("user001").await.unwrap().unwrap();
        assert_eq!(hong.age, Some(36));
        assert_eq!(hong.allergies.len(), 2);
        assert_eq!(hong.username, "홍길동");
    }

    #[tokio::test]
    async fn update_on_unknown_id_is_a_silent_no_op() {
        let repository = InMemoryUserProfileRepository::seeded();
        repository
            .update_profile(
                "ghost",
                ProfileUpdate {
                    age: Some(99),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(repository.get_profile("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_conversation_folds_symptoms_in_deduplicated() {
        let repository = InMemoryUserProfileRepository::seeded();
        let input = SaveConversationInput {
            user_message: "두통이 있어요".to_string(),
            assistant_message: "답변".to_string(),
            symptoms: vec!["두통".to_string(), "열".to_string()],
            recommended_medications: vec!["타이레놀정".to_string()],
        };
        repository
            .save_conversation("user002", input.clone())
            .await
            .unwrap();
        repository.save_conversation("user002", input).await.unwrap();

        let kim = repository.get_profile("user002").await.unwrap().unwrap();
        assert_eq!(kim.conversation_history.len(), 2);
        // 두통 was already recorded; only 열 is new, once.
        assert_eq!(
            kim.previous_symptoms,
            vec![
                "두통".to_string(),
                "소화불량".to_string(),
                "열".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn google_upsert_creates_then_renames() {
        let repository = InMemoryUserProfileRepository::seeded();
        let created = repository
            .get_or_create_google_user("google_1", "a@example.com", "구글이")
            .await
            .unwrap();
        assert_eq!(created.username, "구글이");
        assert_eq!(created.body_type.as_deref(), Some("평상형"));

        let renamed = repository
            .get_or_create_google_user("google_1", "a@example.com", "새이름")
            .await
            .unwrap();
        assert_eq!(renamed.username, "새이름");
    }

    #[tokio::test]
    async fn add_medication_history_appends_neutral_entry() {
        let repository = InMemoryUserProfileRepository::seeded();
        repository
            .add_medication_history("user001", "med_001", vec!["두통".to_string()])
            .await
            .unwrap();
        let hong = repository.get_profile("user001").await.unwrap().unwrap();
        assert_eq!(hong.medication_history.len(), 1);
        assert_eq!(hong.medication_history[0].result, MedicationResult::Neutral);
    }

    #[tokio::test]
    async fn update_characteristics_reclassifies_varied_history() {
        let repository = InMemoryUserProfileRepository::seeded();
        for symptom in ["두통", "복통", "기침", "불면증", "비염", "치통"] {
            repository
                .save_conversation(
                    "user001",
                    SaveConversationInput {
                        user_message: String::new(),
                        assistant_message: String::new(),
                        symptoms: vec![symptom.to_string()],
                        recommended_medications: Vec::new(),
                    },
                )
                .await
                .unwrap();
        }
        repository.update_characteristics("user001").await.unwrap();
        let hong = repository.get_profile("user001").await.unwrap().unwrap();
        assert_eq!(hong.body_type.as_deref(), Some("복합형"));
    }
}
