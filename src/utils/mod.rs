//! Utility modules.

pub mod text_processing;
