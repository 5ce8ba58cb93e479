use std::time::Duration;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct YakjangsuConfig {
    pub llm: LlmConfig,
    pub drug_info: DrugInfoConfig,
    pub conversations: ConversationsConfig,
    pub stream: StreamConfig,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
}

#[derive(Clone, Debug)]
pub struct DrugInfoConfig {
    pub service_key: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ConversationsConfig {
    pub api_url: String,
}

/// Pacing of streamed replies. The delays exist only to animate the client
/// UI; tests run with `Duration::ZERO`.
#[derive(Clone, Debug)]
pub struct StreamConfig {
    pub reply_delay: Duration,
    pub completion_delay: Duration,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(10),
            completion_delay: Duration::from_millis(40),
        }
    }
}
