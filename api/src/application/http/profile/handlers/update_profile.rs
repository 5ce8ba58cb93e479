use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;
use yakjangsu_core::domain::user::{entities::UserProfile, services::UserProfileService};

use crate::application::http::profile::validators::UpdateProfileValidator;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    patch,
    path = "/profile/{user_id}",
    tag = "profile",
    summary = "Update user profile",
    description = "Merges the provided fields into the stored profile and returns the result.",
    params(
        ("user_id" = String, Path, description = "User ID"),
    ),
    request_body = UpdateProfileValidator,
    responses(
        (status = 200, body = UserProfile),
        (status = 404, description = "Unknown user id")
    ),
)]
pub async fn update_profile(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProfileValidator>,
) -> Result<Response<UserProfile>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    if state
        .service
        .get_profile(&user_id)
        .await
        .map_err(ApiError::from)?
        .is_none()
    {
        return Err(ApiError::NotFound("User profile not found".to_string()));
    }

    state
        .service
        .update_profile(&user_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    let profile = state
        .service
        .get_profile(&user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("User profile not found".to_string()))?;

    Ok(Response::OK(profile))
}
