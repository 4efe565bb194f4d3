//! Census statistics and summaries
//!
//! This module derives summary figures from a census and one of its sweeps.

use std::fmt;

use serde::Serialize;

use super::engine::Census;
use super::snapshot::CensusSnapshot;

/// Summary figures of a census sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CensusSummary {
    /// First year of the swept range
    pub start_year: i32,
    /// Last year of the swept range
    pub end_year: i32,
    /// Number of people tracked by the census
    pub people_count: usize,
    /// First year with the highest population
    pub peak_year: i32,
    /// Population in the peak year
    pub peak_population: i64,
    /// Mean population over the swept years
    pub mean_population: f64,
    /// Births falling inside the swept range
    pub births_in_range: usize,
    /// Deaths falling inside the swept range
    pub deaths_in_range: usize,
    /// Mean years between birth and death, if anyone is tracked
    pub mean_lifespan: Option<f64>,
}

impl CensusSummary {
    /// Summarise `snapshot` taken over the people of `census`
    #[must_use]
    pub fn new(census: &Census, snapshot: &CensusSnapshot) -> Self {
        let people_count = census.len();

        let mean_population = snapshot.mean_population();

        let births_in_range = census
            .people()
            .filter(|(_, p)| snapshot.contains(p.birth_year()))
            .count();
        let deaths_in_range = census
            .people()
            .filter(|(_, p)| snapshot.contains(p.death_year()))
            .count();

        let mean_lifespan = (people_count > 0).then(|| {
            census
                .people()
                .map(|(_, p)| p.lifespan() as f64)
                .sum::<f64>()
                / people_count as f64
        });

        Self {
            start_year: snapshot.start_year(),
            end_year: snapshot.end_year(),
            people_count,
            peak_year: snapshot.peak_year(),
            peak_population: snapshot.peak_population(),
            mean_population,
            births_in_range,
            deaths_in_range,
            mean_lifespan,
        }
    }

    /// The `Biggest population was <population> in <year>` headline
    #[must_use]
    pub fn headline(&self) -> String {
        format!(
            "Biggest population was {} in {}",
            self.peak_population, self.peak_year
        )
    }
}

impl fmt::Display for CensusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Census Summary:")?;
        writeln!(f, "  Years: {}-{}", self.start_year, self.end_year)?;
        writeln!(f, "  Total People: {}", self.people_count)?;
        writeln!(
            f,
            "  Peak Population: {} in {}",
            self.peak_population, self.peak_year
        )?;
        writeln!(f, "  Mean Population: {:.2}", self.mean_population)?;
        writeln!(f, "  Births in Range: {}", self.births_in_range)?;
        writeln!(f, "  Deaths in Range: {}", self.deaths_in_range)?;
        if let Some(lifespan) = self.mean_lifespan {
            writeln!(f, "  Mean Lifespan: {lifespan:.1} years")?;
        }
        Ok(())
    }
}
