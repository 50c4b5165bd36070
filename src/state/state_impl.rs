use crate::api::{ApiError, JobPosting, PageResult};
use crate::app::NetworkEventSender;
use crate::config::ViewHotkeys;
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tui_textarea::{Input, TextArea};

use super::error::StateError;
use super::fetch::{FetchState, FilterKind, FilterSpec, JobListView, JobsRequest};
use super::navigation::{ApiStatus, Focus, View};
use super::theme::{ThemeMode, ThemeStore};

/// Houses data representative of application state: the job list
/// controller (page, filter, fetch lifecycle) plus the ephemeral UI state
/// the widgets need.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    page: u32,
    page_size: u32,
    filter: FilterSpec,
    fetch_state: FetchState,
    fetch_sequence: u64,
    categories: Vec<String>,
    api_status: ApiStatus,
    terminal_size: Rect,
    spinner_index: usize,
    current_focus: Focus,
    view: View,
    jobs_list_state: ListState,
    categories_list_state: ListState,
    search_input: TextArea<'static>,
    job_detail: Option<JobPosting>,
    detail_scroll: u16,
    detail_max_scroll: u16,
    log_visible: bool,
    log_entries: LogBuffer,
    theme: ThemeStore,
    hotkeys: ViewHotkeys,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            page: 1,
            page_size: 10,
            filter: FilterSpec::NoFilter,
            fetch_state: FetchState::Idle,
            fetch_sequence: 0,
            categories: vec![],
            api_status: ApiStatus::Unknown,
            terminal_size: Rect::default(),
            spinner_index: 0,
            current_focus: Focus::Jobs,
            view: View::JobList,
            jobs_list_state: ListState::default(),
            categories_list_state: ListState::default(),
            search_input: TextArea::default(),
            job_detail: None,
            detail_scroll: 0,
            detail_max_scroll: 0,
            log_visible: false,
            log_entries: LogBuffer::default(),
            theme: ThemeStore::default(),
            hotkeys: ViewHotkeys::default(),
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        page_size: u32,
        theme: ThemeStore,
        hotkeys: ViewHotkeys,
        log_entries: LogBuffer,
    ) -> Self {
        State {
            net_sender: Some(net_sender),
            page_size,
            theme,
            hotkeys,
            log_entries,
            ..State::default()
        }
    }

    /// Request start-up data: the health probe, the category list and the
    /// first page of jobs.
    ///
    pub fn start(&mut self) -> &mut Self {
        self.dispatch(NetworkEvent::Health);
        self.dispatch(NetworkEvent::Categories);
        self.fetch_cycle();
        self
    }

    /// Returns the current page number.
    ///
    pub fn get_page(&self) -> u32 {
        self.page
    }

    /// Returns the active filter.
    ///
    pub fn get_filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Returns the lifecycle state of the current job list request.
    ///
    pub fn get_fetch_state(&self) -> &FetchState {
        &self.fetch_state
    }

    /// Returns the sequence number of the latest fetch cycle.
    ///
    pub fn get_fetch_sequence(&self) -> u64 {
        self.fetch_sequence
    }

    /// Returns what the job list area should show.
    ///
    pub fn list_view(&self) -> JobListView<'_> {
        JobListView::from_fetch_state(&self.fetch_state)
    }

    /// Begin a fetch cycle for the current page and filter. Any response to
    /// an earlier cycle is ignored from here on.
    ///
    pub fn fetch_cycle(&mut self) -> u64 {
        self.fetch_sequence += 1;
        self.fetch_state = FetchState::Loading;
        let request = JobsRequest {
            sequence: self.fetch_sequence,
            page: self.page,
            size: self.page_size,
            filter: self.filter.clone(),
        };
        debug!(
            "Starting fetch cycle {} for page {} with filter {:?}",
            request.sequence, request.page, request.filter
        );
        self.dispatch(NetworkEvent::Jobs(request));
        self.fetch_sequence
    }

    /// Re-request the current page and filter.
    ///
    pub fn refresh(&mut self) -> &mut Self {
        info!("Refreshing jobs...");
        self.fetch_cycle();
        self
    }

    /// Apply the outcome of a list query. Returns false when the response
    /// belongs to a superseded fetch cycle and was dropped.
    ///
    pub fn complete_fetch(
        &mut self,
        sequence: u64,
        outcome: Result<PageResult, ApiError>,
    ) -> bool {
        if sequence != self.fetch_sequence {
            debug!(
                "Discarding response for fetch cycle {} (latest is {})",
                sequence, self.fetch_sequence
            );
            return false;
        }
        match outcome {
            Ok(result) => {
                info!(
                    "Received {} jobs ({} total, page {} of {}).",
                    result.items.len(),
                    result.total,
                    self.page,
                    result.pages
                );
                self.jobs_list_state
                    .select(if result.items.is_empty() { None } else { Some(0) });
                self.fetch_state = FetchState::Ready(result);
            }
            Err(e) => {
                error!("Failed to fetch jobs: {}", e);
                self.jobs_list_state.select(None);
                self.fetch_state = FetchState::Failed(e.to_string());
            }
        }
        true
    }

    /// Move to the given page of the current result set. Only pages of the
    /// last successful result are accepted.
    ///
    pub fn set_page(&mut self, page: u32) -> Result<(), StateError> {
        let pages = self
            .fetch_state
            .ready()
            .map(|result| result.pages)
            .ok_or(StateError::NoResults)?;
        if page < 1 || page > pages {
            return Err(StateError::PageOutOfRange { page, pages });
        }
        if page != self.page {
            self.page = page;
            self.fetch_cycle();
        }
        Ok(())
    }

    /// Move to the next page.
    ///
    pub fn next_page(&mut self) -> Result<(), StateError> {
        self.set_page(self.page + 1)
    }

    /// Move to the previous page.
    ///
    pub fn previous_page(&mut self) -> Result<(), StateError> {
        self.set_page(self.page.saturating_sub(1))
    }

    /// Narrow the job list by category or company, starting again from the
    /// first page.
    ///
    pub fn apply_filter(&mut self, kind: FilterKind, value: &str) -> Result<(), StateError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(StateError::EmptyFilterValue);
        }
        if value == "." || value == ".." {
            return Err(StateError::UnroutableFilterValue(value.to_string()));
        }
        info!("Filtering jobs by {}: {}", kind.label(), value);
        self.filter = FilterSpec::Active {
            kind,
            value: value.to_string(),
        };
        self.page = 1;
        self.fetch_cycle();
        Ok(())
    }

    /// Return to the unfiltered listing at the first page.
    ///
    pub fn clear_filter(&mut self) -> &mut Self {
        info!("Clearing job filter.");
        self.filter = FilterSpec::NoFilter;
        self.page = 1;
        self.fetch_cycle();
        self
    }

    /// Returns the categories jobs can be filtered by.
    ///
    pub fn get_categories(&self) -> &[String] {
        &self.categories
    }

    /// Sets the categories jobs can be filtered by.
    ///
    pub fn set_categories(&mut self, categories: Vec<String>) -> &mut Self {
        self.categories_list_state
            .select(if categories.is_empty() { None } else { Some(0) });
        self.categories = categories;
        self
    }

    /// Returns the categories list state for rendering.
    ///
    pub fn get_categories_list_state(&mut self) -> &mut ListState {
        &mut self.categories_list_state
    }

    /// Select the next category, wrapping around.
    ///
    pub fn next_category(&mut self) -> &mut Self {
        if let Some(next) = next_index(self.categories_list_state.selected(), self.categories.len()) {
            self.categories_list_state.select(Some(next));
        }
        self
    }

    /// Select the previous category, wrapping around.
    ///
    pub fn previous_category(&mut self) -> &mut Self {
        if let Some(previous) =
            previous_index(self.categories_list_state.selected(), self.categories.len())
        {
            self.categories_list_state.select(Some(previous));
        }
        self
    }

    /// Filter by the highlighted category.
    ///
    pub fn select_current_category(&mut self) -> Result<(), StateError> {
        let category = self
            .categories_list_state
            .selected()
            .and_then(|i| self.categories.get(i))
            .cloned()
            .unwrap_or_default();
        self.apply_filter(FilterKind::Category, &category)
    }

    /// Returns the jobs list state for rendering.
    ///
    pub fn get_jobs_list_state(&mut self) -> &mut ListState {
        &mut self.jobs_list_state
    }

    fn displayed_jobs(&self) -> &[JobPosting] {
        self.fetch_state
            .ready()
            .map(|result| result.items.as_slice())
            .unwrap_or(&[])
    }

    /// Select the next job on the page, wrapping around.
    ///
    pub fn next_job(&mut self) -> &mut Self {
        if let Some(next) = next_index(self.jobs_list_state.selected(), self.displayed_jobs().len()) {
            self.jobs_list_state.select(Some(next));
        }
        self
    }

    /// Select the previous job on the page, wrapping around.
    ///
    pub fn previous_job(&mut self) -> &mut Self {
        if let Some(previous) =
            previous_index(self.jobs_list_state.selected(), self.displayed_jobs().len())
        {
            self.jobs_list_state.select(Some(previous));
        }
        self
    }

    /// Returns the highlighted job, if any.
    ///
    pub fn get_selected_job(&self) -> Option<&JobPosting> {
        self.jobs_list_state
            .selected()
            .and_then(|i| self.displayed_jobs().get(i))
    }

    /// Open the detail overlay for the highlighted job.
    ///
    pub fn open_selected_job(&mut self) -> Result<(), StateError> {
        let job = self
            .get_selected_job()
            .cloned()
            .ok_or(StateError::NoJobSelected)?;
        debug!("Opening details for job {}", job.job_id);
        self.job_detail = Some(job);
        self.detail_scroll = 0;
        self.detail_max_scroll = 0;
        self.view = View::JobDetail;
        Ok(())
    }

    /// Close the detail overlay.
    ///
    pub fn close_job_detail(&mut self) -> &mut Self {
        self.job_detail = None;
        self.view = View::JobList;
        self
    }

    /// Returns the job shown in the detail overlay.
    ///
    pub fn get_job_detail(&self) -> Option<&JobPosting> {
        self.job_detail.as_ref()
    }

    /// Replace the open job with a freshly fetched copy. Ignored when the
    /// overlay has been closed or shows another job.
    ///
    pub fn set_job_detail(&mut self, job: JobPosting) -> &mut Self {
        let is_open = matches!(&self.job_detail, Some(open) if open.job_id == job.job_id);
        if is_open && self.view == View::JobDetail {
            self.job_detail = Some(job);
        } else {
            debug!("Ignoring details for job {} no longer open", job.job_id);
        }
        self
    }

    /// Request a fresh copy of the open job.
    ///
    pub fn refresh_job_detail(&mut self) -> Result<(), StateError> {
        let job_id = self
            .job_detail
            .as_ref()
            .map(|job| job.job_id.clone())
            .ok_or(StateError::NoJobSelected)?;
        self.dispatch(NetworkEvent::JobDetail { job_id });
        Ok(())
    }

    /// Returns the detail overlay scroll offset.
    ///
    pub fn get_detail_scroll(&self) -> u16 {
        self.detail_scroll
    }

    /// Record how far the overlay can scroll before its last line leaves
    /// the bottom edge. Set on every draw.
    ///
    pub fn set_detail_max_scroll(&mut self, max_scroll: u16) -> &mut Self {
        self.detail_max_scroll = max_scroll;
        self.detail_scroll = self.detail_scroll.min(max_scroll);
        self
    }

    pub fn scroll_detail_down(&mut self) -> &mut Self {
        if self.detail_scroll < self.detail_max_scroll {
            self.detail_scroll += 1;
        }
        self
    }

    pub fn scroll_detail_up(&mut self) -> &mut Self {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
        self
    }

    /// Return the current view.
    ///
    pub fn current_view(&self) -> &View {
        &self.view
    }

    /// Return the current focus.
    ///
    pub fn current_focus(&self) -> &Focus {
        &self.current_focus
    }

    /// Toggle focus between the category list and the job list.
    ///
    pub fn switch_focus(&mut self) -> &mut Self {
        self.current_focus = match self.current_focus {
            Focus::Categories => Focus::Jobs,
            Focus::Jobs | Focus::Search => Focus::Categories,
        };
        self
    }

    /// Give the company search box focus.
    ///
    pub fn enter_search_mode(&mut self) -> &mut Self {
        self.current_focus = Focus::Search;
        self
    }

    /// Leave the company search box, keeping its text.
    ///
    pub fn exit_search_mode(&mut self) -> &mut Self {
        self.current_focus = Focus::Jobs;
        self
    }

    pub fn is_search_mode(&self) -> bool {
        self.current_focus == Focus::Search
    }

    /// Forward a key press to the company search box.
    ///
    pub fn search_input(&mut self, input: impl Into<Input>) -> &mut Self {
        self.search_input.input(input);
        self
    }

    /// Returns the company search box for rendering.
    ///
    pub fn get_search_textarea(&mut self) -> &mut TextArea<'static> {
        &mut self.search_input
    }

    /// Returns the text typed into the company search box.
    ///
    pub fn get_search_text(&self) -> String {
        self.search_input.lines().join(" ")
    }

    /// Filter by the typed company name and leave search mode. Blank input is
    /// rejected and search mode stays active.
    ///
    pub fn submit_search(&mut self) -> Result<(), StateError> {
        let text = self.get_search_text();
        self.apply_filter(FilterKind::Company, &text)?;
        self.exit_search_mode();
        Ok(())
    }

    /// Returns the result of the start-up health probe.
    ///
    pub fn get_api_status(&self) -> ApiStatus {
        self.api_status
    }

    pub fn set_api_status(&mut self, status: ApiStatus) -> &mut Self {
        self.api_status = status;
        self
    }

    /// Sets the terminal size.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    /// Show or hide the log pane.
    ///
    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    /// Returns a snapshot of the captured log entries, oldest first.
    ///
    pub fn get_log_entries(&self) -> Vec<String> {
        self.log_entries.snapshot()
    }

    /// Returns the current light/dark mode.
    ///
    pub fn get_theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    /// Returns the colour palette for the current mode.
    ///
    pub fn get_theme(&self) -> Theme {
        Theme::for_mode(self.theme.mode())
    }

    /// Flip between light and dark.
    ///
    pub fn toggle_theme(&mut self) -> &mut Self {
        self.theme.toggle();
        self
    }

    /// Returns the hotkey bindings.
    ///
    pub fn get_hotkeys(&self) -> &ViewHotkeys {
        &self.hotkeys
    }

    /// Send a network event to the network worker.
    ///
    pub fn dispatch(&self, event: NetworkEvent) {
        if let Some(tx) = &self.net_sender {
            if let Err(err) = tx.send(event) {
                error!("Recieved error from network dispatch: {}", err);
            }
        }
    }
}

fn next_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(i) if i + 1 < len => i + 1,
        _ => 0,
    })
}

fn previous_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(i) if i > 0 && i < len => i - 1,
        _ => len - 1,
    })
}
