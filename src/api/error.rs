use thiserror::Error;

/// Failure talking to the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status
    #[error("{detail} (HTTP {status})")]
    Status { status: u16, detail: String },
    /// The response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error, extracting the backend's `detail` field.
    ///
    /// `detail` is either a string or, for validation failures, a list of
    /// objects carrying `msg`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| match v.get("detail")? {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Array(errors) => errors
                    .first()
                    .and_then(|e| e.get("msg"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string),
                _ => None,
            })
            .unwrap_or_else(|| "Something went wrong.".to_string());
        ApiError::Status { status, detail }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let err = ApiError::from_status(404, r#"{"detail": "Todo not found"}"#);
        assert_eq!(err, ApiError::Status { status: 404, detail: "Todo not found".into() });
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Todo not found (HTTP 404)");
    }

    #[test]
    fn test_validation_detail() {
        let body = r#"{"detail": [{"loc": ["body", "title"], "msg": "String should have at least 1 character"}]}"#;
        let err = ApiError::from_status(422, body);
        assert_eq!(
            err,
            ApiError::Status { status: 422, detail: "String should have at least 1 character".into() }
        );
    }

    #[test]
    fn test_unparseable_body() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err, ApiError::Status { status: 502, detail: "Something went wrong.".into() });
        assert!(!err.is_not_found());
    }
}
