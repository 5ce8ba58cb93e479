use axum::Json;
use axum::extract::State;
use validator::Validate;
use yakjangsu_core::domain::user::{entities::UserProfile, services::UserProfileService};

use crate::application::http::profile::validators::LoginValidator;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/login",
    tag = "profile",
    summary = "Demo login",
    description = "Authenticates against the built-in demo credential table and returns the matching profile.",
    request_body = LoginValidator,
    responses(
        (status = 200, body = UserProfile),
        (status = 401, description = "Unknown username or wrong password")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginValidator>,
) -> Result<Response<UserProfile>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let profile = state
        .service
        .authenticate(&payload.username, &payload.password)
        .await
        .map_err(ApiError::from)?;

    match profile {
        Some(profile) => Ok(Response::OK(profile)),
        None => Err(ApiError::Unauthorized(
            "Invalid username or password".to_string(),
        )),
    }
}
