use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::error;
use yakjangsu_core::domain::drug_info::entities::MedicationInfo;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationInfoQuery {
    pub item_name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/medication-info",
    tag = "medication-info",
    summary = "Look up drug image and price",
    description = "Queries the public drug data API for the given item name. Missing upstream data yields the 정보 없음 placeholder, not an error.",
    params(
        ("itemName" = String, Query, description = "Medication name to look up"),
    ),
    responses(
        (status = 200, body = MedicationInfo),
        (status = 400, description = "itemName is required"),
        (status = 500, description = "Service key missing or upstream failure")
    ),
)]
pub async fn get_medication_info(
    Query(query): Query<MedicationInfoQuery>,
    State(state): State<AppState>,
) -> Result<Response<MedicationInfo>, ApiError> {
    let item_name = query
        .item_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::BadRequest("itemName is required".to_string()))?;

    let client = state.drug_info_client.as_ref().ok_or_else(|| {
        ApiError::InternalServerError("Service key is not configured".to_string())
    })?;

    let info = client.medication_info(&item_name).await.map_err(|err| {
        error!("Failed to fetch medication info: {err}");
        ApiError::InternalServerError("Failed to fetch data".to_string())
    })?;

    Ok(Response::OK(info))
}
