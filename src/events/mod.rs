//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: job listings API requests, one task per event
//! - Terminal events: key presses mapped through the configured hotkeys

pub mod network;
pub mod terminal;
