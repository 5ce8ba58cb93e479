use super::handlers::get_max_dosage_info::{__path_get_max_dosage_info, get_max_dosage_info};
use super::handlers::get_medication_info::{__path_get_medication_info, get_medication_info};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_medication_info, get_max_dosage_info))]
pub struct MedicationInfoApiDoc;

pub fn medication_info_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(
            &format!("{root_path}/api/medication-info"),
            get(get_medication_info),
        )
        .route(
            &format!("{root_path}/api/max-dosage-info"),
            get(get_max_dosage_info),
        )
}
