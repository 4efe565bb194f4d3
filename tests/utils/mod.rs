use std::path::PathBuf;

use census::{CensusConfig, Person};
use tempfile::TempDir;

/// Build a person that is known to be valid
#[must_use]
pub fn person(name: &str, birth_year: i32, death_year: i32) -> Person {
    Person::new(name, birth_year, death_year).expect("valid lifespan")
}

/// Three overlapping lifespans peaking at 1940
#[must_use]
pub fn overlapping_people() -> Vec<Person> {
    vec![
        person("Person0", 1900, 1950),
        person("Person1", 1925, 1975),
        person("Person2", 1940, 2000),
    ]
}

/// Count the people alive in `year` without going through the census
#[must_use]
pub fn brute_force_population(people: &[Person], year: i32) -> i64 {
    people.iter().filter(|p| p.is_alive_in(year)).count() as i64
}

/// Net births minus deaths in `start..=year`, the value a sweep from
/// `start` reports for `year`
#[must_use]
pub fn windowed_population(people: &[Person], start: i32, year: i32) -> i64 {
    let window = start..=year;
    let births = people.iter().filter(|p| window.contains(&p.birth_year())).count();
    let deaths = people.iter().filter(|p| window.contains(&p.death_year())).count();
    births as i64 - deaths as i64
}

/// Config writing every file into `dir`
#[must_use]
pub fn scratch_config(dir: &TempDir) -> CensusConfig {
    CensusConfig {
        people_path: scratch_file(dir, "listOfPeople.txt"),
        results_path: scratch_file(dir, "censusResults.txt"),
        random_seed: Some(42),
        ..CensusConfig::default()
    }
}

#[must_use]
pub fn scratch_file(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
