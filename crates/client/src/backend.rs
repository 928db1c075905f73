//! Matching-backend abstraction.

use async_trait::async_trait;

use crate::api::MatchApi;
use crate::error::MatchApiError;
use crate::types::{CatalogItem, GenerateRequest, ParsedIntent, ToolkitResponse};

/// The operations the orchestrator needs from a matching backend.
///
/// [`MatchApi`] is the production implementation; tests substitute
/// counting or failing stubs.
#[async_trait]
pub trait MatchBackend: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<ToolkitResponse, MatchApiError>;

    async fn parse(&self, input: &str) -> Result<ParsedIntent, MatchApiError>;

    async fn smart_generate(&self, input: &str) -> Result<ToolkitResponse, MatchApiError>;

    async fn suggest(&self, query: &str) -> Vec<String>;

    async fn professions(&self) -> Vec<CatalogItem>;

    async fn hobbies(&self) -> Vec<CatalogItem>;

    async fn health(&self) -> bool;
}

#[async_trait]
impl MatchBackend for MatchApi {
    async fn generate(&self, request: &GenerateRequest) -> Result<ToolkitResponse, MatchApiError> {
        MatchApi::generate(self, request).await
    }

    async fn parse(&self, input: &str) -> Result<ParsedIntent, MatchApiError> {
        MatchApi::parse(self, input).await
    }

    async fn smart_generate(&self, input: &str) -> Result<ToolkitResponse, MatchApiError> {
        MatchApi::smart_generate(self, input).await
    }

    async fn suggest(&self, query: &str) -> Vec<String> {
        MatchApi::suggest(self, query).await
    }

    async fn professions(&self) -> Vec<CatalogItem> {
        MatchApi::professions(self).await
    }

    async fn hobbies(&self) -> Vec<CatalogItem> {
        MatchApi::hobbies(self).await
    }

    async fn health(&self) -> bool {
        MatchApi::health(self).await
    }
}
