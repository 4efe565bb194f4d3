//! Configuration for a census run.

use std::fmt;
use std::path::PathBuf;

use crate::algorithm::census::PeopleGenerator;
use crate::error::{CensusError, Result};

/// Configuration for generating people and running the census over them
#[derive(Debug, Clone)]
pub struct CensusConfig {
    /// Number of people to generate
    pub people_count: usize,
    /// Earliest generated birth year
    pub birth_year_low: i32,
    /// Latest generated birth (and death) year
    pub birth_year_high: i32,
    /// First year of the census sweep
    pub census_start_year: i32,
    /// Last year of the census sweep (inclusive)
    pub census_end_year: i32,
    /// File the generated people are written to and read back from
    pub people_path: PathBuf,
    /// File receiving the per-year results
    pub results_path: PathBuf,
    /// Optional JSON summary output
    pub summary_path: Option<PathBuf>,
    /// Seed for reproducible generation
    pub random_seed: Option<u64>,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            people_count: 100,
            birth_year_low: 1900,
            birth_year_high: 2000,
            census_start_year: 1900,
            census_end_year: 2000,
            people_path: PathBuf::from("listOfPeople.txt"),
            results_path: PathBuf::from("censusResults.txt"),
            summary_path: None,
            random_seed: None,
        }
    }
}

impl CensusConfig {
    /// Check that both year ranges are in order
    pub fn validate(&self) -> Result<()> {
        if self.birth_year_high < self.birth_year_low {
            return Err(CensusError::InvalidRange {
                start_year: self.birth_year_low,
                end_year: self.birth_year_high,
            });
        }
        if self.census_end_year < self.census_start_year {
            return Err(CensusError::InvalidRange {
                start_year: self.census_start_year,
                end_year: self.census_end_year,
            });
        }
        Ok(())
    }

    /// Generator matching the configured population parameters
    #[must_use]
    pub fn generator(&self) -> PeopleGenerator {
        PeopleGenerator {
            count: self.people_count,
            birth_year_low: self.birth_year_low,
            birth_year_high: self.birth_year_high,
            random_seed: self.random_seed,
        }
    }
}

impl fmt::Display for CensusConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Census Configuration:")?;
        writeln!(f, "  People: {}", self.people_count)?;
        writeln!(
            f,
            "  Birth Years: {}-{}",
            self.birth_year_low, self.birth_year_high
        )?;
        writeln!(
            f,
            "  Census Years: {}-{}",
            self.census_start_year, self.census_end_year
        )?;
        writeln!(f, "  People File: {}", self.people_path.display())?;
        writeln!(f, "  Results File: {}", self.results_path.display())?;
        if let Some(summary) = &self.summary_path {
            writeln!(f, "  Summary File: {}", summary.display())?;
        }
        if let Some(seed) = self.random_seed {
            writeln!(f, "  Random Seed: {seed}")?;
        }
        Ok(())
    }
}
