//! Shared Test Helpers for Cross-Crate Use
//!
//! This module provides centralized test utilities that can be used across
//! both the `processing` and `receipts` crates to avoid code duplication.

// =============================================================================
// UNIFIED TEST ERROR HANDLING
// =============================================================================

/// Unified error type for all test failures
#[derive(Debug, thiserror::Error)]
pub enum TestError {
    #[error("Assertion failed: {message}")]
    AssertionFailure { message: String },

    #[error("HTTP error: {source}")]
    HttpError {
        #[from]
        source: http::Error,
    },

    #[error("Generic test error: {message}")]
    Generic { message: String },
}

impl TestError {
    pub fn assertion_failure(message: impl Into<String>) -> Self {
        Self::AssertionFailure {
            message: message.into(),
        }
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }
}

/// Alias for the standard test result type
pub type TestResult<T = ()> = Result<T, TestError>;

/// Helper macro for test assertions that return TestError instead of panicking
#[macro_export]
macro_rules! test_assert {
    ($condition:expr) => {
        if !($condition) {
            return Err($crate::test_helpers::TestError::assertion_failure(
                format!("assertion failed: {}", stringify!($condition))
            ));
        }
    };
    ($condition:expr, $message:expr $(, $arg:expr)*) => {
        if !($condition) {
            return Err($crate::test_helpers::TestError::assertion_failure(
                format!($message $(, $arg)*)
            ));
        }
    };
}

/// Helper macro for test assertions with equality
#[macro_export]
macro_rules! test_assert_eq {
    ($left:expr, $right:expr) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val == *right_val) {
                    return Err($crate::test_helpers::TestError::assertion_failure(
                        format!("assertion failed: `(left == right)`\n  left: `{:?}`,\n right: `{:?}`",
                                left_val, right_val)
                    ));
                }
            }
        }
    };
    ($left:expr, $right:expr, $message:expr $(, $arg:expr)*) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val == *right_val) {
                    return Err($crate::test_helpers::TestError::assertion_failure(
                        format!($message $(, $arg)*)
                    ));
                }
            }
        }
    };
}

/// Utility functions for common test operations
pub mod test_utils {
    use super::*;

    /// Safe HTTP request builder that returns TestError
    pub fn build_request(
        method: &str,
        uri: &str,
        body: Option<String>,
    ) -> TestResult<http::Request<String>> {
        let mut builder = http::Request::builder().uri(uri).method(method);

        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }

        let request = builder
            .body(body.unwrap_or_default())
            .map_err(TestError::from)?;

        Ok(request)
    }

    /// Safe response status check
    pub fn check_status_code(
        actual: http::StatusCode,
        expected: http::StatusCode,
    ) -> TestResult<()> {
        if actual != expected {
            return Err(TestError::assertion_failure(format!(
                "Status code mismatch: expected {}, got {}",
                expected, actual
            )));
        }
        Ok(())
    }

    /// Safe error containment check
    pub fn check_error_contains(
        error: &dyn std::error::Error,
        expected_substring: &str,
    ) -> TestResult<()> {
        let error_msg = error.to_string();
        if !error_msg.contains(expected_substring) {
            return Err(TestError::assertion_failure(format!(
                "Error message '{}' does not contain '{}'",
                error_msg, expected_substring
            )));
        }
        Ok(())
    }
}
