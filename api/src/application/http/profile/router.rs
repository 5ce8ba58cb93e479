use super::handlers::get_profile::{__path_get_profile, get_profile};
use super::handlers::login::{__path_login, login};
use super::handlers::update_profile::{__path_update_profile, update_profile};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, patch, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(login, get_profile, update_profile))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(&format!("{root_path}/api/login"), post(login))
        .route(
            &format!("{root_path}/api/profile/{{user_id}}"),
            get(get_profile),
        )
        .route(
            &format!("{root_path}/api/profile/{{user_id}}"),
            patch(update_profile),
        )
}
