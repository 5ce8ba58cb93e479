use crate::application::http::{
    chat::router::ChatApiDoc, completions::router::CompletionsApiDoc,
    conversations::router::ConversationsApiDoc, health::HealthApiDoc,
    medication_info::router::MedicationInfoApiDoc, profile::router::ProfileApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Yakjangsu API"
    ),
    nest(
        (path = "/api/chat", api = ChatApiDoc),
        (path = "/api/completions", api = CompletionsApiDoc),
        (path = "/api/conversations", api = ConversationsApiDoc),
        (path = "/api", api = ProfileApiDoc),
        (path = "/api", api = MedicationInfoApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
