use crate::api::JobBank;
use crate::state::{ApiStatus, JobsRequest, State};
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Health,
    Categories,
    Jobs(JobsRequest),
    JobDetail { job_id: String },
}

/// Specify struct for managing state with network events. Cheap to clone so
/// each event can be handled on its own task.
///
#[derive(Clone)]
pub struct Handler {
    state: Arc<Mutex<State>>,
    job_bank: JobBank,
}

impl Handler {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &Arc<Mutex<State>>, job_bank: JobBank) -> Self {
        Handler {
            state: Arc::clone(state),
            job_bank,
        }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::Health => self.health().await,
            Event::Categories => self.categories().await?,
            Event::Jobs(request) => self.jobs(request).await,
            Event::JobDetail { job_id } => self.job_detail(job_id).await?,
        }
        Ok(())
    }

    /// Update state with the result of the health probe.
    ///
    async fn health(&self) {
        let status = match self.job_bank.health().await {
            Ok(()) => {
                info!("Job API is reachable.");
                ApiStatus::Reachable
            }
            Err(e) => {
                warn!("Job API health check failed: {}", e);
                ApiStatus::Unreachable
            }
        };
        self.state.lock().await.set_api_status(status);
    }

    /// Update state with the categories jobs can be filtered by.
    ///
    async fn categories(&self) -> Result<()> {
        info!("Fetching job categories...");
        let categories = self.job_bank.list_categories().await?;
        let mut state = self.state.lock().await;
        state.set_categories(categories);
        Ok(())
    }

    /// Run one list query and hand the outcome to the controller, which drops
    /// it if a newer fetch cycle has started.
    ///
    async fn jobs(&self, request: JobsRequest) {
        info!(
            "Fetching page {} of jobs (fetch cycle {})...",
            request.page, request.sequence
        );
        let outcome = self
            .job_bank
            .list_jobs(request.page, request.size, request.filter.value())
            .await;
        let mut state = self.state.lock().await;
        state.complete_fetch(request.sequence, outcome);
    }

    /// Update state with a fresh copy of the open job.
    ///
    async fn job_detail(&self, job_id: String) -> Result<()> {
        info!("Fetching details for job {}...", job_id);
        let job = self.job_bank.get_job(&job_id).await?;
        let mut state = self.state.lock().await;
        state.set_job_detail(job);
        info!("Job details loaded successfully.");
        Ok(())
    }
}
