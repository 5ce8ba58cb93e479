use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use yakjangsu_core::domain::chat::entities::{ChatMessage, CompletionParams};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CompletionRequestValidator {
    #[validate(length(min = 1, message = "messages must not be empty"))]
    pub messages: Vec<ChatMessage>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub temperature: Option<f32>,

    #[serde(default)]
    pub max_tokens: Option<u32>,

    #[serde(default)]
    pub system: Option<String>,
}

impl From<CompletionRequestValidator> for CompletionParams {
    fn from(validator: CompletionRequestValidator) -> Self {
        Self {
            messages: validator.messages,
            model: validator.model,
            temperature: validator.temperature,
            max_tokens: validator.max_tokens,
            system: validator.system,
        }
    }
}
