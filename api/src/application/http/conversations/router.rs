use super::handlers::get_conversations::{__path_get_conversations, get_conversations};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_conversations))]
pub struct ConversationsApiDoc;

pub fn conversations_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/conversations", state.args.server.root_path),
        get(get_conversations),
    )
}
