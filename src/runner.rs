//! End-to-end census run
//!
//! Generates a population, round-trips it through the people file, runs
//! the census and writes the results.

use crate::algorithm::census::{Census, CensusSummary};
use crate::config::CensusConfig;
use crate::error::Result;
use crate::utils::io::{read_people, write_people, write_results, write_summary_json};

/// Run a complete census as described by `config`
///
/// Every file error is returned to the caller; an unreadable people file
/// never turns into an empty population.
pub fn run(config: &CensusConfig) -> Result<CensusSummary> {
    config.validate()?;
    log::debug!("{config}");

    let generated = config.generator().generate()?;
    write_people(&config.people_path, &generated)?;

    let people = read_people(&config.people_path)?;
    let mut census = Census::from_people(people);
    census.start_census(config.census_start_year, config.census_end_year)?;

    let snapshot = census.snapshot()?;
    write_results(&config.results_path, snapshot)?;

    let summary = CensusSummary::new(&census, snapshot);
    if let Some(path) = &config.summary_path {
        write_summary_json(path, &summary)?;
    }

    log::info!("{}", summary.headline());
    Ok(summary)
}
