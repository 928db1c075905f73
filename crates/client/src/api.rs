//! REST API client for the matching backend.
//!
//! Error handling follows the endpoint's role: generation and parsing
//! surface failures so the caller can fall back, while suggestions and
//! catalogs degrade to empty results.

use crate::error::{error_detail, MatchApiError};
use crate::types::{
    CatalogItem, GenerateRequest, HobbiesResponse, ParsedIntent, ProfessionsResponse,
    SuggestResponse, ToolkitResponse,
};

/// HTTP client for one matching-backend instance.
pub struct MatchApi {
    client: reqwest::Client,
    base_url: String,
}

impl MatchApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:18512`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Generate a toolkit. Sends `POST /api/generate`.
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<ToolkitResponse, MatchApiError> {
        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Parse a persona sentence into profession and hobby.
    /// Sends `POST /api/parse`.
    pub async fn parse(&self, input: &str) -> Result<ParsedIntent, MatchApiError> {
        let body = serde_json::json!({ "input": input });

        let response = self
            .client
            .post(format!("{}/api/parse", self.base_url))
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Parse and generate in one round trip. Sends `POST /api/smart-generate`.
    pub async fn smart_generate(&self, input: &str) -> Result<ToolkitResponse, MatchApiError> {
        let body = serde_json::json!({ "input": input });

        let response = self
            .client
            .post(format!("{}/api/smart-generate", self.base_url))
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Search suggestions for a partial query. Sends `GET /api/suggest`.
    /// Failures read as no suggestions.
    pub async fn suggest(&self, query: &str) -> Vec<String> {
        let result = self
            .client
            .get(format!("{}/api/suggest", self.base_url))
            .query(&[("q", query)])
            .send()
            .await;

        match result {
            Ok(response) => Self::parse_response::<SuggestResponse>(response)
                .await
                .map(|r| r.suggestions)
                .unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// Profession catalog as the backend knows it. Empty on any failure.
    pub async fn professions(&self) -> Vec<CatalogItem> {
        let result = self
            .client
            .get(format!("{}/api/professions", self.base_url))
            .send()
            .await;

        match result {
            Ok(response) => Self::parse_response::<ProfessionsResponse>(response)
                .await
                .map(|r| r.professions)
                .unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// Hobby catalog as the backend knows it. Empty on any failure.
    pub async fn hobbies(&self) -> Vec<CatalogItem> {
        let result = self
            .client
            .get(format!("{}/api/hobbies", self.base_url))
            .send()
            .await;

        match result {
            Ok(response) => Self::parse_response::<HobbiesResponse>(response)
                .await
                .map(|r| r.hobbies)
                .unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// Liveness probe. Sends `GET /health`; any non-2xx or transport error
    /// reads as down.
    pub async fn health(&self) -> bool {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map(|response| response.status().is_success())
            .unwrap_or(false)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. On failure, reads the
    /// body and normalizes it into a [`MatchApiError::Api`].
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, MatchApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MatchApiError::Api {
                status: status.as_u16(),
                detail: error_detail(status.as_u16(), &body),
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, MatchApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
