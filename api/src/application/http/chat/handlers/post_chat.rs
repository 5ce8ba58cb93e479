use std::convert::Infallible;

use axum::Json;
use axum::extract::State;
use axum::response::sse::{Event, Sse};
use futures::{Stream, StreamExt, stream};
use validator::Validate;
use yakjangsu_core::domain::chat::services::ChatService;

use crate::application::http::chat::validators::ChatRequestValidator;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;

/// Terminator frame sent after the last reply fragment.
pub const DONE_SENTINEL: &str = "[DONE]";

#[utoipa::path(
    post,
    path = "",
    tag = "chat",
    summary = "Chat with the pharmacist bot",
    description = "Runs the rule pipeline on the last message and streams the composed reply as SSE, one fragment per event, terminated by [DONE].",
    request_body = ChatRequestValidator,
    responses(
        (status = 200, description = "text/event-stream of reply fragments"),
        (status = 400, description = "Empty messages array")
    ),
)]
pub async fn post_chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequestValidator>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let reply = state
        .service
        .respond(payload.messages, payload.user_id)
        .await
        .map_err(ApiError::from)?;

    let stream = reply
        .into_stream()
        .map(|fragment| Ok(Event::default().data(fragment)))
        .chain(stream::once(async {
            Ok(Event::default().data(DONE_SENTINEL))
        }));

    Ok(Sse::new(stream))
}
