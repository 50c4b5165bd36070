//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds the job list controller and UI state
//! - Filter and fetch lifecycle types (FilterSpec, FetchState, etc.)
//! - Navigation types (View, Focus, ApiStatus)
//! - The light/dark theme store
//! - State error handling

mod error;
mod fetch;
mod navigation;
mod state_impl;
mod theme;

pub use error::StateError;
pub use fetch::{
    pagination_targets, FetchState, FilterKind, FilterSpec, JobListView, JobsRequest,
    FETCH_FAILED_MESSAGE,
};
pub use navigation::{ApiStatus, Focus, View};
pub use state_impl::State;
pub use theme::{ambient_preference, ThemeMode, ThemePreference, ThemeStore};
