//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Requested page is outside the pages of the last result
    #[error("Page {page} is out of range (1..={pages})")]
    PageOutOfRange { page: u32, pages: u32 },

    /// Filter value is empty after trimming
    #[error("Filter value must not be empty")]
    EmptyFilterValue,

    /// Filter value is a dot segment, which URLs normalize away
    #[error("Filter value '{0}' cannot be used as a search term")]
    UnroutableFilterValue(String),

    /// Pagination requested while no result is displayed
    #[error("No job results loaded")]
    NoResults,

    /// No job is selected or open
    #[error("No job selected")]
    NoJobSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::PageOutOfRange { page: 7, pages: 3 };
        assert!(error.to_string().contains("Page 7"));
        assert!(error.to_string().contains("1..=3"));

        let error = StateError::EmptyFilterValue;
        assert!(error.to_string().contains("must not be empty"));

        let error = StateError::UnroutableFilterValue("..".to_string());
        assert!(error.to_string().contains("'..'"));

        let error = StateError::NoResults;
        assert!(error.to_string().contains("No job results"));

        let error = StateError::NoJobSelected;
        assert!(error.to_string().contains("No job selected"));
    }
}
