use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::error;
use yakjangsu_core::domain::drug_info::entities::MaxDosageInfo;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxDosageQuery {
    pub ingr_name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/max-dosage-info",
    tag = "medication-info",
    summary = "Look up daily maximum dosage",
    params(
        ("ingrName" = String, Query, description = "Ingredient name to look up"),
    ),
    responses(
        (status = 200, body = MaxDosageInfo),
        (status = 400, description = "ingrName is required"),
        (status = 500, description = "Service key missing or upstream failure")
    ),
)]
pub async fn get_max_dosage_info(
    Query(query): Query<MaxDosageQuery>,
    State(state): State<AppState>,
) -> Result<Response<MaxDosageInfo>, ApiError> {
    let ingr_name = query
        .ingr_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::BadRequest("ingrName is required".to_string()))?;

    let client = state.drug_info_client.as_ref().ok_or_else(|| {
        ApiError::InternalServerError("Service key is not configured".to_string())
    })?;

    let info = client.max_dosage_info(&ingr_name).await.map_err(|err| {
        error!("Failed to fetch max dosage info: {err}");
        ApiError::InternalServerError("Failed to fetch data".to_string())
    })?;

    Ok(Response::OK(info))
}
