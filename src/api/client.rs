//! HTTP client for job API requests.
//!
//! This module provides a low-level HTTP client wrapper that builds request
//! URLs from path segments, checks response status and decodes JSON bodies.

use super::error::ApiError;
use log::*;
use reqwest::{Method, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Makes requests to the job API and tries to conform response data to the
/// requested type.
///
#[derive(Clone)]
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL. The transport default
    /// applies when no timeout is given.
    ///
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: builder.build()?,
        })
    }

    /// Returns the URL for the given path segments and query parameters.
    /// Each segment is percent-encoded as a single path component. Dot
    /// segments are rejected since URL parsing would resolve them away.
    ///
    pub(crate) fn url(&self, segments: &[&str], params: &[(&str, String)]) -> Result<Url, ApiError> {
        if let Some(segment) = segments.iter().find(|s| **s == "." || **s == "..") {
            return Err(ApiError::InvalidPathSegment(segment.to_string()));
        }
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        if !params.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Issue a GET request and decode the JSON body into `T`.
    ///
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.call(Method::GET, segments, params).await?;
        let bytes = response.bytes().await?;
        match serde_json::from_slice::<T>(&bytes) {
            Ok(data) => Ok(data),
            Err(e) => {
                error!(
                    "Failed to deserialize API response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&bytes)
                );
                Err(e.into())
            }
        }
    }

    /// Issue a GET request and only check the response status.
    ///
    pub async fn probe(&self, segments: &[&str]) -> Result<(), ApiError> {
        self.call(Method::GET, segments, &[]).await?;
        Ok(())
    }

    /// Make request and return the response if its status is a success.
    ///
    async fn call(
        &self,
        method: Method,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<Response, ApiError> {
        let url = self.url(segments, params)?;
        debug!("Requesting {} {}...", method, url);
        let response = self.http_client.request(method, url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            error!("API request failed with status {}: {}", status, body);
            return Err(ApiError::Request {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_segments_onto_base() {
        let client = Client::new("http://localhost:8000", None).unwrap();
        let url = client
            .url(&["data"], &[("page", "2".to_string()), ("size", "10".to_string())])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/data?page=2&size=10");
    }

    #[test]
    fn url_keeps_base_path_prefix() {
        let client = Client::new("https://jobs.example.com/api/", None).unwrap();
        let url = client.url(&["health"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://jobs.example.com/api/health");
    }

    #[test]
    fn url_encodes_filter_value_as_one_segment() {
        let client = Client::new("http://localhost:8000", None).unwrap();
        let url = client.url(&["data", "DevOps and Sysadmin"], &[]).unwrap();
        assert_eq!(url.path(), "/data/DevOps%20and%20Sysadmin");

        let url = client.url(&["data", "AC/DC Labs"], &[]).unwrap();
        assert_eq!(url.path(), "/data/AC%2FDC%20Labs");
    }

    #[test]
    fn url_rejects_dot_segments() {
        let client = Client::new("http://localhost:8000", None).unwrap();
        for value in [".", ".."] {
            assert!(matches!(
                client.url(&["data", value], &[("page", "1".to_string())]),
                Err(ApiError::InvalidPathSegment(segment)) if segment == value
            ));
        }
        let url = client.url(&["data", "..."], &[]).unwrap();
        assert_eq!(url.path(), "/data/...");
    }

    #[test]
    fn url_rejects_invalid_base() {
        let client = Client::new("not a url", None).unwrap();
        assert!(matches!(
            client.url(&["data"], &[]),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
