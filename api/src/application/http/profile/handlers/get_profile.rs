use axum::extract::{Path, State};
use yakjangsu_core::domain::user::{entities::UserProfile, services::UserProfileService};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/profile/{user_id}",
    tag = "profile",
    summary = "Get user profile",
    params(
        ("user_id" = String, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = UserProfile),
        (status = 404, description = "Unknown user id")
    ),
)]
pub async fn get_profile(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<UserProfile>, ApiError> {
    let profile = state
        .service
        .get_profile(&user_id)
        .await
        .map_err(ApiError::from)?;

    match profile {
        Some(profile) => Ok(Response::OK(profile)),
        None => Err(ApiError::NotFound("User profile not found".to_string())),
    }
}
