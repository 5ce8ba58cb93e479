use std::convert::Infallible;

use axum::Json;
use axum::extract::State;
use axum::response::sse::{Event, Sse};
use futures::{Stream, StreamExt, future, stream};
use validator::Validate;
use yakjangsu_core::domain::chat::ports::TokenStream;
use yakjangsu_core::domain::chat::services::ChatService;

use crate::application::http::chat::handlers::post_chat::DONE_SENTINEL;
use crate::application::http::completions::validators::CompletionRequestValidator;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "",
    tag = "completions",
    summary = "Raw completion stream",
    description = "Streams LLM tokens as SSE when an API key is configured, otherwise a demo echo stream. Mid-stream failures are reported as an [ERROR] frame; the stream always ends with [DONE].",
    request_body = CompletionRequestValidator,
    responses(
        (status = 200, description = "text/event-stream of tokens"),
        (status = 400, description = "Empty messages array")
    ),
)]
pub async fn post_completion(
    State(state): State<AppState>,
    Json(payload): Json<CompletionRequestValidator>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let tokens = state
        .service
        .generate(payload.into())
        .await
        .map_err(ApiError::from)?;

    let stream = frame_payloads(tokens).map(|payload| Ok(Event::default().data(payload)));

    Ok(Sse::new(stream))
}

/// Maps a token stream onto SSE frame payloads. An upstream error ends the
/// stream after a single `[ERROR] {message}` frame; the `[DONE]` sentinel is
/// always the last frame.
fn frame_payloads(tokens: TokenStream) -> impl Stream<Item = String> + Send {
    tokens
        .scan(false, |errored, item| {
            if *errored {
                return future::ready(None);
            }
            let payload = match item {
                Ok(token) => token,
                Err(err) => {
                    *errored = true;
                    format!("[ERROR] {err}")
                }
            };
            future::ready(Some(payload))
        })
        .chain(stream::once(async { DONE_SENTINEL.to_string() }))
}
