//! Navigation-related state types.
//!
//! This module contains enums related to views, focus and the API status shown
//! in the header.

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Categories,
    Jobs,
    Search,
}

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum View {
    JobList,
    JobDetail,
}

/// Result of the start-up health probe.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ApiStatus {
    Unknown,
    Reachable,
    Unreachable,
}
