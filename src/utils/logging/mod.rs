//! Logging utilities for output
//!
//! This module provides utilities for consistent operation logging.

pub mod log;

// Re-export commonly used functions for convenience
pub use log::{log_operation_complete, log_operation_start, log_path_operation_start, log_warning};
