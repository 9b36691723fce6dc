use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::constants::{DEFAULT_QUERY_URL, QUERY_PARAMS};
use crate::shops::Feature;

/// Response envelope from the geodata service. A response without a
/// `features` key is treated as an empty result, matching the service's
/// behavior for layers with no rows.
#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Error)]
pub enum GetError {
    #[error("request to the geodata service failed: {0}")]
    RequestError(reqwest::Error),
    #[error("geodata service returned status {0}")]
    ResponseError(reqwest::StatusCode),
    #[error("failed to read the geodata response body: {0}")]
    ResponseBodyError(reqwest::Error),
    #[error("failed to parse the geodata response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Query the geodata service for every barbershop feature in the layer.
/// The whole result is expected in a single response body; pagination is
/// not handled.
///
/// * `client` - The reqwest HTTP client to use for the request.
/// * `query_url` - Overrides the default DC GIS endpoint when provided.
pub async fn get(client: &Client, query_url: Option<&str>) -> Result<Vec<Feature>, GetError> {
    let response = client
        .get(query_url.unwrap_or(DEFAULT_QUERY_URL))
        .query(&QUERY_PARAMS)
        .send()
        .await
        .map_err(GetError::RequestError)?;
    if !response.status().is_success() {
        return Err(GetError::ResponseError(response.status()));
    }
    let body = response.text().await.map_err(GetError::ResponseBodyError)?;
    let parsed: QueryResponse = serde_json::from_str(&body)?;
    debug!(
        features = parsed.features.len(),
        "fetched features from geodata service"
    );
    Ok(parsed.features)
}
