//! Common utilities shared across the receipt points workspace
//!
//! This crate provides shared functionality that can be used by both the
//! generic `processing` engine and the `receipts` domain crate:
//!
//! - Service configuration loading
//! - Shared test utilities, assertion macros and error types

pub mod config;

// Test helpers module - available for both development and test builds
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

// Re-export commonly used test utilities for easier access
#[cfg(any(test, feature = "test-helpers"))]
pub use test_helpers::{TestError, TestResult};
