mod client;
mod error;
mod resource;

pub use error::ApiError;
pub use resource::*;

use client::Client;
use log::*;
use serde::Deserialize;
use std::time::Duration;

/// Categories mirrored from the server's job schema.
///
pub const CATEGORIES: [&str; 10] = [
    "Programming",
    "Full-Stack Programming",
    "Front-End Programming",
    "Back-End Programming",
    "DevOps and Sysadmin",
    "Management and Finance",
    "Product",
    "Customer Support",
    "Sales and Marketing",
    "All Other Remote Jobs",
];

/// Body of a single-job lookup. The server routes `/data/{param}` through its
/// filtered listing, so both shapes are accepted.
///
#[derive(Deserialize)]
#[serde(untagged)]
enum JobLookup {
    Posting(Box<JobPosting>),
    Page(PageResult),
}

/// Responsible for asynchronous interaction with the job listings API
/// including transformation of response data into explicitly-defined types.
///
#[derive(Clone)]
pub struct JobBank {
    client: Client,
}

impl JobBank {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<JobBank, ApiError> {
        debug!("Initializing job API client for {}...", base_url);
        Ok(JobBank {
            client: Client::new(base_url, timeout)?,
        })
    }

    /// Returns one page of job postings, narrowed by the filter value if one
    /// is given. The filter kind is not part of the request; the server tells
    /// categories and company searches apart by value alone.
    ///
    pub async fn list_jobs(
        &self,
        page: u32,
        size: u32,
        filter_value: Option<&str>,
    ) -> Result<PageResult, ApiError> {
        let params = [("page", page.to_string()), ("size", size.to_string())];
        let result: PageResult = match filter_value {
            Some(value) => {
                debug!(
                    "Requesting page {} (size {}) of jobs matching '{}'...",
                    page, size, value
                );
                self.client.get(&["data", value], &params).await?
            }
            None => {
                debug!("Requesting page {} (size {}) of all jobs...", page, size);
                self.client.get(&["data"], &params).await?
            }
        };
        debug!(
            "Retrieved {} jobs ({} total across {} pages)",
            result.items.len(),
            result.total,
            result.pages
        );
        Ok(result)
    }

    /// Returns the posting with the given identifier.
    ///
    pub async fn get_job(&self, job_id: &str) -> Result<JobPosting, ApiError> {
        debug!("Requesting job {}...", job_id);
        match self.client.get::<JobLookup>(&["data", job_id], &[]).await? {
            JobLookup::Posting(job) => Ok(*job),
            JobLookup::Page(page) => page
                .items
                .into_iter()
                .find(|job| job.job_id == job_id)
                .ok_or_else(|| ApiError::NotFound {
                    job_id: job_id.to_string(),
                }),
        }
    }

    /// Returns the categories jobs can be filtered by. The set is fixed by
    /// the server schema, so no request is made.
    ///
    pub async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        Ok(CATEGORIES.iter().map(|c| c.to_string()).collect())
    }

    /// Checks that the API answers its health endpoint.
    ///
    pub async fn health(&self) -> Result<(), ApiError> {
        self.client.probe(&["health"]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use serde_json::json;

    fn job_json(job: &JobPosting) -> serde_json::Value {
        serde_json::to_value(job).unwrap()
    }

    #[tokio::test]
    async fn list_jobs_unfiltered() -> Result<()> {
        let jobs: [JobPosting; 2] = Faker.fake();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/data")
                    .query_param("page", "1")
                    .query_param("size", "10");
                then.status(200).json_body(json!({
                    "items": [job_json(&jobs[0]), job_json(&jobs[1])],
                    "total": 2,
                    "page": 1,
                    "size": 10,
                    "pages": 1
                }));
            })
            .await;

        let api = JobBank::new(&server.base_url(), None)?;
        let result = api.list_jobs(1, 10, None).await?;
        mock.assert_async().await;
        assert_eq!(result.items, jobs.to_vec());
        assert_eq!(result.total, 2);
        assert_eq!(result.pages, 1);
        Ok(())
    }

    #[tokio::test]
    async fn list_jobs_filtered_by_value() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/data/Product")
                    .query_param("page", "3")
                    .query_param("size", "20");
                then.status(200)
                    .json_body(json!({ "items": [], "total": 0, "pages": 1 }));
            })
            .await;

        let api = JobBank::new(&server.base_url(), None)?;
        let result = api.list_jobs(3, 20, Some("Product")).await?;
        mock.assert_async().await;
        assert!(result.items.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn list_jobs_non_success_status() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/data");
                then.status(500);
            })
            .await;

        let api = JobBank::new(&server.base_url(), None).unwrap();
        let result = api.list_jobs(1, 10, None).await;
        mock.assert_async().await;
        assert!(matches!(result, Err(ApiError::Request { status: 500 })));
    }

    #[tokio::test]
    async fn list_jobs_malformed_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/data");
                then.status(200).body("<html>oops</html>");
            })
            .await;

        let api = JobBank::new(&server.base_url(), None).unwrap();
        let result = api.list_jobs(1, 10, None).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn list_jobs_transport_failure() {
        // Nothing listens on the discard port
        let api = JobBank::new("http://127.0.0.1:9", None).unwrap();
        let result = api.list_jobs(1, 10, None).await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[tokio::test]
    async fn get_job_bare_posting() -> Result<()> {
        let job: JobPosting = Faker.fake();
        let job_id = "job-123".to_string();
        let mut expected = job.clone();
        expected.job_id = job_id.clone();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/data/job-123");
                then.status(200).json_body(job_json(&expected));
            })
            .await;

        let api = JobBank::new(&server.base_url(), None)?;
        let fetched = api.get_job(&job_id).await?;
        mock.assert_async().await;
        assert_eq!(fetched, expected);
        Ok(())
    }

    #[tokio::test]
    async fn get_job_from_page_envelope() -> Result<()> {
        let mut wanted: JobPosting = Faker.fake();
        wanted.job_id = "wanted".to_string();
        let mut other: JobPosting = Faker.fake();
        other.job_id = "other".to_string();

        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/data/wanted");
                then.status(200).json_body(json!({
                    "items": [job_json(&other), job_json(&wanted)],
                    "total": 2,
                    "pages": 1
                }));
            })
            .await;

        let api = JobBank::new(&server.base_url(), None)?;
        assert_eq!(api.get_job("wanted").await?, wanted);
        Ok(())
    }

    #[tokio::test]
    async fn get_job_missing_from_envelope() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/data/gone");
                then.status(200)
                    .json_body(json!({ "items": [], "total": 0, "pages": 0 }));
            })
            .await;

        let api = JobBank::new(&server.base_url(), None).unwrap();
        assert!(matches!(
            api.get_job("gone").await,
            Err(ApiError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn list_categories_is_fixed_set() -> Result<()> {
        let api = JobBank::new("http://localhost:8000", None)?;
        let categories = api.list_categories().await?;
        assert_eq!(categories.len(), CATEGORIES.len());
        assert_eq!(categories[0], "Programming");
        assert!(categories.contains(&"Product".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn health_success_and_failure() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/health");
                then.status(200).json_body(json!({ "status": "healthy" }));
            })
            .await;
        let api = JobBank::new(&server.base_url(), None).unwrap();
        assert!(api.health().await.is_ok());
        mock.assert_async().await;

        let down = MockServer::start_async().await;
        down.mock_async(|when, then| {
            when.method("GET").path("/health");
            then.status(503);
        })
        .await;
        let api = JobBank::new(&down.base_url(), None).unwrap();
        assert!(matches!(
            api.health().await,
            Err(ApiError::Request { status: 503 })
        ));
    }
}
