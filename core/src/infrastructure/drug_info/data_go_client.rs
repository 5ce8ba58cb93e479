use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    drug_info::entities::{MaxDosageInfo, MedicationInfo, NO_INFORMATION},
};

const EASY_DRUG_ENDPOINT: &str =
    "https://apis.data.go.kr/1471000/DrbEasyDrugInfoService/getDrbEasyDrugList";
const MAX_DOSAGE_ENDPOINT: &str =
    "https://apis.data.go.kr/1471000/DayMaxDosgQyByIngdService/getDayMaxDosgQyByIngdList";

/// Client for the Korean public drug data API (data.go.kr). Only the most
/// relevant record is requested; an empty body means no data, not an error.
pub struct DataGoKrClient {
    http: reqwest::Client,
    service_key: String,
}

#[derive(Debug, Deserialize, Default)]
struct UpstreamEnvelope {
    #[serde(default)]
    body: Option<UpstreamBody>,
}

#[derive(Debug, Deserialize, Default)]
struct UpstreamBody {
    #[serde(default)]
    items: Vec<UpstreamItem>,
}

#[derive(Debug, Deserialize, Default)]
struct UpstreamItem {
    #[serde(rename = "itemImage")]
    item_image: Option<String>,
    #[serde(rename = "dayMaxDosg")]
    day_max_dosg: Option<String>,
}

impl DataGoKrClient {
    pub fn new(service_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            service_key,
        }
    }

    pub async fn medication_info(&self, item_name: &str) -> Result<MedicationInfo, CoreError> {
        let item = self
            .fetch_first_item(EASY_DRUG_ENDPOINT, "itemName", item_name)
            .await?;
        Ok(match item {
            Some(item) => MedicationInfo {
                image_url: item.item_image.filter(|url| !url.is_empty()),
                // The API carries no price field; keep the placeholder.
                price: NO_INFORMATION.to_string(),
            },
            None => MedicationInfo::not_found(),
        })
    }

    pub async fn max_dosage_info(&self, ingr_name: &str) -> Result<MaxDosageInfo, CoreError> {
        let item = self
            .fetch_first_item(MAX_DOSAGE_ENDPOINT, "ingrName", ingr_name)
            .await?;
        Ok(match item.and_then(|item| item.day_max_dosg).filter(|d| !d.is_empty()) {
            Some(day_max_dosg) => MaxDosageInfo { day_max_dosg },
            None => MaxDosageInfo::not_found(),
        })
    }

    async fn fetch_first_item(
        &self,
        endpoint: &str,
        query_name: &str,
        query_value: &str,
    ) -> Result<Option<UpstreamItem>, CoreError> {
        let response = self
            .http
            .get(endpoint)
            .query(&[
                ("serviceKey", self.service_key.as_str()),
                (query_name, query_value),
                ("type", "json"),
                ("numOfRows", "1"),
            ])
            .send()
            .await
            .map_err(|err| CoreError::ExternalServiceError(err.to_string()))?;
        if !response.status().is_success() {
            return Err(CoreError::ExternalServiceError(format!(
                "API call failed with status: {}",
                response.status()
            )));
        }

        // An empty or non-JSON body stands for "no data" with this API.
        let envelope = response
            .json::<UpstreamEnvelope>()
            .await
            .unwrap_or_default();
        Ok(envelope
            .body
            .and_then(|body| body.items.into_iter().next()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_body_means_no_data() {
        let envelope: UpstreamEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.body.is_none());
    }

    #[test]
    fn envelope_items_deserialize_known_fields() {
        let raw = r#"{"body":{"items":[{"itemImage":"https://img","dayMaxDosg":"4000","entpName":"회사"}]}}"#;
        let envelope: UpstreamEnvelope = serde_json::from_str(raw).unwrap();
        let item = envelope.body.unwrap().items.into_iter().next().unwrap();
        assert_eq!(item.item_image.as_deref(), Some("https://img"));
        assert_eq!(item.day_max_dosg.as_deref(), Some("4000"));
    }
}
