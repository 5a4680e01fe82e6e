//! Rules API client for class features and the class directory
//!
//! Speaks the D&D 5e SRD API layout:
//! - `GET {base}/classes` lists classes
//! - `GET {base}/classes/{index}/levels/{level}` lists a class level's features

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::application::ports::outbound::{ClassDirectoryPort, RulesLookup, RulesSourcePort};

/// Client for the rules API
#[derive(Clone)]
pub struct Dnd5eApiClient {
    client: Client,
    base_url: String,
}

impl Dnd5eApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the features for one class level.
    ///
    /// `Ok(None)` means the API has no data for that level.
    pub async fn get_level_features(
        &self,
        class_index: &str,
        class_level: u8,
    ) -> Result<Option<Vec<String>>, RulesApiError> {
        let response = self
            .client
            .get(format!(
                "{}/classes/{}/levels/{}",
                self.base_url, class_index, class_level
            ))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RulesApiError::ApiError { status, message: error_text });
        }

        let body = response.text().await?;
        parse_level_features(&body)
    }

    /// Fetch the display names of every class the API knows
    pub async fn get_class_names(&self) -> Result<Vec<String>, RulesApiError> {
        let response = self
            .client
            .get(format!("{}/classes", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RulesApiError::ApiError { status, message: error_text });
        }

        let body = response.text().await?;
        parse_class_names(&body)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RulesApiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    ApiError { status: StatusCode, message: String },
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct LevelResponse {
    #[serde(default)]
    features: Vec<ApiReference>,
}

#[derive(Debug, Deserialize)]
struct ClassListResponse {
    results: Vec<ApiReference>,
}

#[derive(Debug, Deserialize)]
struct ApiReference {
    name: String,
}

/// A literal `null` body is the API's "no data for this level" marker
fn parse_level_features(body: &str) -> Result<Option<Vec<String>>, RulesApiError> {
    let level: Option<LevelResponse> = serde_json::from_str(body)?;
    Ok(level.map(|l| l.features.into_iter().map(|f| f.name).collect()))
}

fn parse_class_names(body: &str) -> Result<Vec<String>, RulesApiError> {
    let list: ClassListResponse = serde_json::from_str(body)?;
    Ok(list.results.into_iter().map(|c| c.name).collect())
}

// =============================================================================
// Port Implementations
// =============================================================================

#[async_trait]
impl RulesSourcePort for Dnd5eApiClient {
    async fn lookup(&self, class_index: &str, class_level: u8) -> RulesLookup {
        match self.get_level_features(class_index, class_level).await {
            Ok(Some(features)) => RulesLookup::Features(features),
            Ok(None) => RulesLookup::NotFound,
            Err(e) => RulesLookup::Unavailable(e.to_string()),
        }
    }
}

#[async_trait]
impl ClassDirectoryPort for Dnd5eApiClient {
    async fn list_class_names(&self) -> Result<Vec<String>> {
        Ok(self.get_class_names().await?)
    }
}
