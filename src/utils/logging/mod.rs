//! Logging utilities for census operations

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{FileOperation, log_operation_complete, log_operation_start, log_warning};
