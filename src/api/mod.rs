//! Backend API Client
//!
//! HTTP bindings to the todo backend, organized by resource.

mod error;
mod todo;

use serde::de::DeserializeOwned;

pub use error::ApiError;
pub use todo::*;

/// Thin wrapper over `reqwest::Client` bound to one backend origin
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an API path such as `/api/v1/todos/`
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a response into `T`, mapping non-success statuses to `ApiError::Status`
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(ApiError::from)?;

    if !status.is_success() {
        return Err(ApiError::from_status(status.as_u16(), &body));
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.url("/api/v1/todos/"), "http://localhost:8000/api/v1/todos/");
    }
}
