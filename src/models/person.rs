//! Person entity model
//!
//! A `Person` is one individual of the census: a name and the years of
//! birth and death. The lifespan is validated once at construction and the
//! record is immutable afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CensusError, Result};

/// An individual counted by the census
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPerson")]
pub struct Person {
    name: String,
    birth_year: i32,
    death_year: i32,
}

impl Person {
    /// Create a new person, rejecting a death year before the birth year
    ///
    /// Years are not restricted to any era.
    pub fn new(name: impl Into<String>, birth_year: i32, death_year: i32) -> Result<Self> {
        let name = name.into();
        if birth_year > death_year {
            return Err(CensusError::InvalidLifespan {
                name,
                birth_year,
                death_year,
            });
        }
        Ok(Self {
            name,
            birth_year,
            death_year,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }

    #[must_use]
    pub fn death_year(&self) -> i32 {
        self.death_year
    }

    /// Number of years between birth and death
    #[must_use]
    pub fn lifespan(&self) -> i64 {
        i64::from(self.death_year) - i64::from(self.birth_year)
    }

    /// Whether the person counts towards the population of `year`
    ///
    /// The death year itself is not counted.
    #[must_use]
    pub fn is_alive_in(&self, year: i32) -> bool {
        self.birth_year <= year && year < self.death_year
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.name, self.birth_year, self.death_year)
    }
}

impl FromStr for Person {
    type Err = CensusError;

    /// Parse a `"<name> <birth>-<death>"` line
    fn from_str(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        let (name, years) = trimmed
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| CensusError::parse(line, "expected \"<name> <birth>-<death>\""))?;

        let name = name.trim_end();
        if name.is_empty() {
            return Err(CensusError::parse(line, "missing name"));
        }

        // Skip the first character so a negative birth year keeps its sign
        let split = years
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i)
            .ok_or_else(|| CensusError::parse(line, "missing '-' between years"))?;

        let parse_year = |raw: &str, which: &str| {
            raw.parse::<i32>()
                .map_err(|e| CensusError::parse(line, format!("invalid {which} year {raw:?}: {e}")))
        };
        let birth_year = parse_year(&years[..split], "birth")?;
        let death_year = parse_year(&years[split + 1..], "death")?;

        Self::new(name, birth_year, death_year)
    }
}

#[derive(Deserialize)]
struct RawPerson {
    name: String,
    birth_year: i32,
    death_year: i32,
}

impl TryFrom<RawPerson> for Person {
    type Error = CensusError;

    fn try_from(raw: RawPerson) -> Result<Self> {
        Self::new(raw.name, raw.birth_year, raw.death_year)
    }
}
