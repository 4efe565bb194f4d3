//! Error handling for the census engine and its driver.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Broad classification of a [`CensusError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A record could not be constructed (birth after death)
    Construction,
    /// The census was queried before a sweep reflected the current data
    InvalidState,
    /// A year or year range was outside what the operation accepts
    Range,
    /// Reading or writing a file failed
    Io,
    /// A line of the people file could not be parsed
    Parse,
    /// The JSON summary could not be produced
    Serialization,
}

/// Specialized error type for census operations
#[derive(Debug, thiserror::Error)]
pub enum CensusError {
    /// Person cannot die before being born
    #[error("{name} cannot die in {death_year} before being born in {birth_year}")]
    InvalidLifespan {
        name: String,
        birth_year: i32,
        death_year: i32,
    },

    /// Population was requested without a sweep over the current data
    #[error("the census must be started before querying populations")]
    NotSwept,

    /// Sweep requested with the end year before the start year
    #[error("end year {end_year} cannot be before start year {start_year}")]
    InvalidRange { start_year: i32, end_year: i32 },

    /// Population requested for a year the last sweep did not cover
    #[error("year {year} is outside the census data ({start_year}-{end_year})")]
    YearOutOfRange {
        year: i32,
        start_year: i32,
        end_year: i32,
    },

    /// Error opening, reading or writing a file
    #[error("{context}: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        context: String,
        #[source]
        source: io::Error,
    },

    /// Malformed people-file line
    #[error("line {line}: {reason}: {content:?}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    /// JSON encoding failure
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CensusError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for a line that is not tied to a file position yet
    pub fn parse(content: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            line: 0,
            content: content.into(),
            reason: reason.into(),
        }
    }

    /// Attach a 1-based line number to a parse error; other errors pass through
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::Parse {
                content, reason, ..
            } => Self::Parse {
                line,
                content,
                reason,
            },
            other => other,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLifespan { .. } => ErrorKind::Construction,
            Self::NotSwept => ErrorKind::InvalidState,
            Self::InvalidRange { .. } | Self::YearOutOfRange { .. } => ErrorKind::Range,
            Self::Io { .. } => ErrorKind::Io,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Serialization(_) => ErrorKind::Serialization,
        }
    }
}

/// Result type for census operations
pub type Result<T> = std::result::Result<T, CensusError>;
