use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::auth::BearerUser;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "",
    tag = "conversations",
    summary = "Proxy conversation history",
    description = "Forwards the caller's bearer token to the external conversations API and relays both status and body. The token's identity is upserted into the profile store on the way through.",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Upstream response body"),
        (status = 401, description = "Missing or malformed bearer token")
    ),
)]
pub async fn get_conversations(
    State(state): State<AppState>,
    user: BearerUser,
) -> Result<Response, ApiError> {
    let upstream = state
        .conversations_client
        .fetch(&user.token)
        .await
        .map_err(ApiError::from)?;

    let status =
        StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    Ok((status, Json(upstream.body)).into_response())
}
