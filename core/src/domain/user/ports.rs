use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::UserProfile,
        value_objects::{ProfileUpdate, SaveConversationInput},
    },
};

/// Process-wide user profile store. Operations on unknown ids degrade
/// silently; the demo store is not a security boundary.
#[cfg_attr(test, mockall::automock)]
pub trait UserProfileRepository: Send + Sync {
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

    fn add_medication_history(
        &self,
        user_id: &str,
        medication_id: &str,
        symptoms: Vec<String>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn save_conversation(
        &self,
        user_id: &str,
        input: SaveConversationInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn update_characteristics(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
