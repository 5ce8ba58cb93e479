use super::handlers::post_completion::{__path_post_completion, post_completion};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(post_completion))]
pub struct CompletionsApiDoc;

pub fn completions_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/completions", state.args.server.root_path),
        post(post_completion),
    )
}
