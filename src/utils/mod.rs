//! Utilities for file exchange and logging

pub mod io;
pub mod logging;

pub use io::{format_results, read_people, write_people, write_results, write_summary_json};
