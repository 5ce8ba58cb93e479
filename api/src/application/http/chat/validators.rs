use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use yakjangsu_core::domain::chat::entities::ChatMessage;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequestValidator {
    #[validate(length(min = 1, message = "messages must not be empty"))]
    pub messages: Vec<ChatMessage>,

    /// Ties the exchange to a stored profile; anonymous when omitted.
    #[serde(default)]
    pub user_id: Option<String>,
}
