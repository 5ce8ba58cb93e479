use std::time::Duration;

use clap::Parser;
use yakjangsu_core::domain::common::{
    ConversationsConfig, DrugInfoConfig, LlmConfig, StreamConfig, YakjangsuConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "yakjangsu-api", about = "Yakjangsu pharmacist chatbot API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub drug_info: DrugInfoArgs,

    #[command(flatten)]
    pub conversations: ConversationsArgs,

    #[command(flatten)]
    pub stream: StreamArgs,
}

#[derive(Debug, Clone, Parser)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/yakjangsu".
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct LlmArgs {
    /// When unset, /api/completions falls back to the demo stream.
    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub openai_model: String,
}

#[derive(Debug, Clone, Parser)]
pub struct DrugInfoArgs {
    /// data.go.kr service key; the drug info endpoints 500 without it.
    #[arg(long, env = "DATA_GO_KR_SERVICE_KEY")]
    pub service_key: Option<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct ConversationsArgs {
    #[arg(
        long,
        env = "CONVERSATIONS_API_URL",
        default_value = "https://hackathon.jifferent.org/api/conversations"
    )]
    pub api_url: String,
}

#[derive(Debug, Clone, Parser)]
pub struct StreamArgs {
    /// Delay between chat reply fragments, in milliseconds.
    #[arg(long, env = "STREAM_DELAY_MS", default_value_t = 10)]
    pub reply_delay_ms: u64,

    /// Delay between demo completion tokens, in milliseconds.
    #[arg(long, env = "COMPLETION_DELAY_MS", default_value_t = 40)]
    pub completion_delay_ms: u64,
}

impl From<Args> for YakjangsuConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LlmConfig {
                openai_api_key: args.llm.openai_api_key,
                openai_model: args.llm.openai_model,
            },
            drug_info: DrugInfoConfig {
                service_key: args.drug_info.service_key,
            },
            conversations: ConversationsConfig {
                api_url: args.conversations.api_url,
            },
            stream: StreamConfig {
                reply_delay: Duration::from_millis(args.stream.reply_delay_ms),
                completion_delay: Duration::from_millis(args.stream.completion_delay_ms),
            },
        }
    }
}
