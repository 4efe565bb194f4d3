//! Census engine
//!
//! The engine tracks people, keeps a per-year tally of births and deaths
//! and sweeps a running sum over a year range to find the population of
//! every year in it.

use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::snapshot::CensusSnapshot;
use crate::error::{CensusError, Result};
use crate::models::Person;

/// Handle assigned to a person when it is added to a [`Census`]
///
/// Handles increase monotonically and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PersonId(u64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether the last sweep still reflects the tracked people
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CensusState {
    /// Nothing swept yet, or the people changed since the last sweep
    Dirty,
    /// A snapshot of the current people is available
    Swept,
}

/// Births and deaths recorded for one year
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct YearTally {
    births: usize,
    deaths: usize,
}

impl YearTally {
    fn net(self) -> i64 {
        self.births as i64 - self.deaths as i64
    }

    fn is_empty(self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}

/// Population census over a set of people
#[derive(Debug, Clone, Default)]
pub struct Census {
    /// Tracked people in insertion order
    people: BTreeMap<PersonId, Person>,
    next_id: u64,
    /// Only years that some tracked person is born or dies in
    tallies: FxHashMap<i32, YearTally>,
    /// Result of the last sweep, dropped on every change to `people`
    snapshot: Option<CensusSnapshot>,
}

impl Census {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a census already tracking `people`
    pub fn from_people(people: impl IntoIterator<Item = Person>) -> Self {
        let mut census = Self::new();
        census.add_all_persons(people);
        census
    }

    /// Track a person and record their birth and death
    ///
    /// Any previous sweep becomes stale.
    pub fn add_person(&mut self, person: Person) -> PersonId {
        self.tallies.entry(person.birth_year()).or_default().births += 1;
        self.tallies.entry(person.death_year()).or_default().deaths += 1;

        let id = PersonId(self.next_id);
        self.next_id += 1;
        log::trace!("Added {person} as {id}");
        self.people.insert(id, person);
        self.snapshot = None;
        id
    }

    /// Add every person in order; returns whether at least one was added
    pub fn add_all_persons(&mut self, people: impl IntoIterator<Item = Person>) -> bool {
        let mut added = false;
        for person in people {
            self.add_person(person);
            added = true;
        }
        added
    }

    /// Remove the earliest-added person equal to `person`
    ///
    /// Returns `false` and leaves the census untouched, including any
    /// current sweep, when no equal person is tracked.
    pub fn remove_person(&mut self, person: &Person) -> bool {
        let found = self
            .people
            .iter()
            .find_map(|(id, tracked)| (tracked == person).then_some(*id));

        match found {
            Some(id) => self.remove_by_id(id).is_some(),
            None => {
                log::warn!("Cannot remove {person}: not part of the census");
                false
            }
        }
    }

    /// Remove the person added under `id`
    pub fn remove_by_id(&mut self, id: PersonId) -> Option<Person> {
        let person = self.people.remove(&id)?;
        self.untally(person.birth_year(), |tally| tally.births -= 1);
        self.untally(person.death_year(), |tally| tally.deaths -= 1);
        log::trace!("Removed {person} ({id})");
        self.snapshot = None;
        Some(person)
    }

    /// Remove each person in turn; returns whether at least one was removed
    pub fn remove_all_persons<'a>(&mut self, people: impl IntoIterator<Item = &'a Person>) -> bool {
        people
            .into_iter()
            .fold(false, |removed, person| self.remove_person(person) || removed)
    }

    fn untally(&mut self, year: i32, adjust: impl FnOnce(&mut YearTally)) {
        if let Some(tally) = self.tallies.get_mut(&year) {
            adjust(tally);
            if tally.is_empty() {
                self.tallies.remove(&year);
            }
        }
    }

    /// Sweep `start_year..=end_year` and return the year of peak population
    ///
    /// The running total starts from zero at `start_year`; people born
    /// before the range only count through their deaths inside it. Ties for
    /// the peak go to the earliest year.
    pub fn start_census(&mut self, start_year: i32, end_year: i32) -> Result<i32> {
        if end_year < start_year {
            return Err(CensusError::InvalidRange {
                start_year,
                end_year,
            });
        }

        let mut deltas: Vec<(i32, i64)> = self
            .tallies
            .iter()
            .filter(|&(year, _)| (start_year..=end_year).contains(year))
            .map(|(&year, tally)| (year, tally.net()))
            .collect();
        deltas.sort_unstable_by_key(|&(year, _)| year);

        let snapshot = CensusSnapshot::from_deltas(start_year, end_year, deltas);
        let peak_year = snapshot.peak_year();
        log::debug!(
            "Census {start_year}-{end_year} over {} people: peak {} in {peak_year}",
            self.people.len(),
            snapshot.peak_population()
        );
        self.snapshot = Some(snapshot);
        Ok(peak_year)
    }

    /// The last sweep, if it reflects the current people
    pub fn snapshot(&self) -> Result<&CensusSnapshot> {
        self.snapshot.as_ref().ok_or(CensusError::NotSwept)
    }

    /// Population of `year` according to the last sweep
    pub fn population(&self, year: i32) -> Result<i64> {
        let snapshot = self.snapshot()?;
        snapshot
            .population(year)
            .ok_or(CensusError::YearOutOfRange {
                year,
                start_year: snapshot.start_year(),
                end_year: snapshot.end_year(),
            })
    }

    /// Listing of every swept year with its population, one line per year
    pub fn all_years(&self) -> Result<String> {
        self.snapshot().map(ToString::to_string)
    }

    #[must_use]
    pub fn state(&self) -> CensusState {
        if self.snapshot.is_some() {
            CensusState::Swept
        } else {
            CensusState::Dirty
        }
    }

    /// Net population change recorded at `year`
    #[must_use]
    pub fn delta(&self, year: i32) -> i64 {
        self.tallies.get(&year).map_or(0, |tally| tally.net())
    }

    /// Every recorded year with its net change, in ascending year order
    #[must_use]
    pub fn deltas(&self) -> BTreeMap<i32, i64> {
        self.tallies
            .iter()
            .map(|(&year, tally)| (year, tally.net()))
            .collect()
    }

    #[must_use]
    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    /// Tracked people in insertion order
    pub fn people(&self) -> impl Iterator<Item = (PersonId, &Person)> + '_ {
        self.people.iter().map(|(id, person)| (*id, person))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl FromIterator<Person> for Census {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Self::from_people(iter)
    }
}

impl Extend<Person> for Census {
    fn extend<I: IntoIterator<Item = Person>>(&mut self, iter: I) {
        self.add_all_persons(iter);
    }
}
