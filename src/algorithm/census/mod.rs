//! Year-by-year population census
//!
//! This module provides the census engine, the snapshots its sweeps
//! produce, summary statistics and a generator of synthetic people.

pub mod engine;
pub mod generator;
pub mod snapshot;
pub mod statistics;

// Re-export commonly used items
pub use engine::{Census, CensusState, PersonId};
pub use generator::PeopleGenerator;
pub use snapshot::CensusSnapshot;
pub use statistics::CensusSummary;
