//! Synthetic population generation
//!
//! Produces people with random lifespans for exercising the census.

use rand::prelude::*;

use crate::error::{CensusError, Result};
use crate::models::Person;

/// Generator of people with random birth and death years
#[derive(Debug, Clone)]
pub struct PeopleGenerator {
    /// Number of people to generate
    pub count: usize,
    /// Earliest possible birth year
    pub birth_year_low: i32,
    /// Latest possible birth and death year
    pub birth_year_high: i32,
    /// Seed for reproducible output; drawn from the OS when `None`
    pub random_seed: Option<u64>,
}

impl Default for PeopleGenerator {
    fn default() -> Self {
        Self {
            count: 100,
            birth_year_low: 1900,
            birth_year_high: 2000,
            random_seed: None,
        }
    }
}

impl PeopleGenerator {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_years(mut self, low: i32, high: i32) -> Self {
        self.birth_year_low = low;
        self.birth_year_high = high;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Generate `count` people named `Person0`, `Person1`, ...
    ///
    /// Birth years are uniform over the configured range and each death
    /// year is uniform between the birth year and the end of the range.
    pub fn generate(&self) -> Result<Vec<Person>> {
        if self.birth_year_high < self.birth_year_low {
            return Err(CensusError::InvalidRange {
                start_year: self.birth_year_low,
                end_year: self.birth_year_high,
            });
        }

        let mut rng = match self.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        (0..self.count)
            .map(|i| {
                let birth_year = rng.random_range(self.birth_year_low..=self.birth_year_high);
                let death_year = rng.random_range(birth_year..=self.birth_year_high);
                Person::new(format!("Person{i}"), birth_year, death_year)
            })
            .collect()
    }
}
