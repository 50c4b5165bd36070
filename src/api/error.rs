//! Job API-specific error types.

/// Errors that can occur while talking to the job listings API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API request failed with status {status}")]
    Request { status: u16 },

    /// The response body did not match the expected shape
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A single-job lookup returned no matching posting
    #[error("Job not found: {job_id}")]
    NotFound { job_id: String },

    /// A path segment that URL normalization would remove
    #[error("Invalid path segment: '{0}'")]
    InvalidPathSegment(String),

    /// The configured base URL cannot be used to build request URLs
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::Request { status: 503 };
        assert!(error.to_string().contains("503"));

        let error = ApiError::NotFound {
            job_id: "job-42".to_string(),
        };
        assert!(error.to_string().contains("Job not found"));
        assert!(error.to_string().contains("job-42"));

        let error = ApiError::InvalidBaseUrl("not a url".to_string());
        assert!(error.to_string().contains("not a url"));
    }

    #[test]
    fn test_api_error_from_serde_error() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ApiError = serde_error.into();
        assert!(matches!(error, ApiError::Decode(_)));
        assert!(error.to_string().contains("decode"));
    }
}
