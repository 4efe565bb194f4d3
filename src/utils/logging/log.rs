//! Logging utilities
//!
//! Consistent log lines for the file operations of a census run.

use std::path::Path;
use std::time::Duration;

/// File operations performed during a census run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    ReadPeople,
    WritePeople,
    WriteResults,
    WriteSummary,
}

impl FileOperation {
    fn verb(self) -> &'static str {
        match self {
            Self::ReadPeople => "Reading people from",
            Self::WritePeople => "Writing people to",
            Self::WriteResults => "Writing census results to",
            Self::WriteSummary => "Writing census summary to",
        }
    }

    fn done(self) -> &'static str {
        match self {
            Self::ReadPeople => "read",
            _ => "wrote",
        }
    }

    fn items(self) -> &'static str {
        match self {
            Self::ReadPeople | Self::WritePeople => "people",
            Self::WriteResults => "census years",
            Self::WriteSummary => "summaries",
        }
    }
}

/// Log the start of a file operation
pub fn log_operation_start(operation: FileOperation, path: &Path) {
    log::info!("{} {}", operation.verb(), path.display());
}

/// Log the completion of a file operation
///
/// # Arguments
/// * `operation` - The operation that finished
/// * `path` - Path of the file that was operated on
/// * `items` - Number of items processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: FileOperation,
    path: &Path,
    items: usize,
    elapsed: Option<Duration>,
) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {} {} {} ({}) in {:?}",
            operation.done(),
            items,
            operation.items(),
            path.display(),
            duration
        ),
        None => log::info!(
            "Successfully {} {} {} ({})",
            operation.done(),
            items,
            operation.items(),
            path.display()
        ),
    }
}

/// Log a warning, optionally tied to a file
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{}: {}", message, path.display()),
        None => log::warn!("{message}"),
    }
}
