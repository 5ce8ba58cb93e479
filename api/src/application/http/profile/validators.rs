use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use yakjangsu_core::domain::user::value_objects::ProfileUpdate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileValidator {
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

impl From<UpdateProfileValidator> for ProfileUpdate {
    fn from(validator: UpdateProfileValidator) -> Self {
        Self {
            username: validator.username,
            age: validator.age,
            allergies: validator.allergies,
            chronic_conditions: validator.chronic_conditions,
            current_medications: validator.current_medications,
            body_type: validator.body_type,
        }
    }
}
