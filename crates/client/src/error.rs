//! Matching-backend error types.

/// Errors from the matching-backend REST layer.
#[derive(Debug, thiserror::Error)]
pub enum MatchApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("{detail}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Normalized human-readable message.
        detail: String,
    },
}

/// Normalize an error body: prefer the backend's JSON `detail` field, fall
/// back to a generic status message.
pub fn error_detail(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("detail")?.as_str().map(String::from))
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| format!("API error: {status}"))
}
