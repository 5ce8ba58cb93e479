use crate::{
    domain::{
        chat::composer::MedicationResponder,
        common::{YakjangsuConfig, services::Service},
    },
    infrastructure::{llm::openai_client::OpenAiCompletionClient, user::in_memory::InMemoryUserProfileRepository},
};

pub type YakjangsuService = Service<InMemoryUserProfileRepository, OpenAiCompletionClient>;

/// Wires the demo profile store, the bundled rule pipeline and, when an
/// API key is configured, the OpenAI streaming client.
pub fn create_service(config: &YakjangsuConfig) -> YakjangsuService {
    let completion_client = config
        .llm
        .openai_api_key
        .as_ref()
        .map(|key| OpenAiCompletionClient::new(key.clone(), config.llm.openai_model.clone()));
    if completion_client.is_none() {
        tracing::info!("no OpenAI API key configured, completions run in demo mode");
    }

    Service::new(
        InMemoryUserProfileRepository::seeded(),
        completion_client,
        MedicationResponder::bundled(),
        config.stream.clone(),
    )
}
