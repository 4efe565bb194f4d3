//! A Rust library for simulating a population census: generate people with
//! random lifespans, sweep the population of every year in a range and
//! find the year of peak population.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod runner;
pub mod utils;

// Re-export the most common types for easier use
pub use algorithm::census::{
    Census, CensusSnapshot, CensusState, CensusSummary, PeopleGenerator, PersonId,
};
pub use config::CensusConfig;
pub use error::{CensusError, ErrorKind, Result};
pub use models::Person;
pub use runner::run;
