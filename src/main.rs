use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use census::CensusConfig;

#[derive(Parser, Debug)]
#[command(name = "census")]
#[command(about = "Generate random people and find the year of peak population")]
struct Args {
    /// Number of people to generate
    #[arg(short = 'n', long, default_value = "100")]
    people: usize,

    /// Earliest birth year of generated people
    #[arg(long, default_value = "1900")]
    birth_low: i32,

    /// Latest birth and death year of generated people
    #[arg(long, default_value = "2000")]
    birth_high: i32,

    /// First year of the census
    #[arg(long, default_value = "1900")]
    start: i32,

    /// Last year of the census (inclusive)
    #[arg(long, default_value = "2000")]
    end: i32,

    /// File the generated people are written to
    #[arg(long, default_value = "listOfPeople.txt")]
    people_file: PathBuf,

    /// File the census results are written to
    #[arg(long, default_value = "censusResults.txt")]
    results_file: PathBuf,

    /// Also write a JSON summary to this file
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,
}

impl From<Args> for CensusConfig {
    fn from(args: Args) -> Self {
        Self {
            people_count: args.people,
            birth_year_low: args.birth_low,
            birth_year_high: args.birth_high,
            census_start_year: args.start,
            census_end_year: args.end,
            people_path: args.people_file,
            results_path: args.results_file,
            summary_path: args.summary,
            random_seed: args.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = CensusConfig::from(Args::parse());
    let summary = census::run(&config).context("census run failed")?;

    println!("{}", summary.headline());
    print!("{summary}");
    Ok(())
}
