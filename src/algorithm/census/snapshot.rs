//! Immutable result of a census sweep

use std::fmt;

use serde::Serialize;

/// Absolute population of every year in an inclusive year range
///
/// Only the years where the population changes are stored, so the range
/// may span any `i32` years. A snapshot is produced whole by a sweep and
/// never modified; a new sweep replaces it instead of updating it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CensusSnapshot {
    start_year: i32,
    end_year: i32,
    /// `(year, population)` from that year on, ascending; the first is `start_year`
    changes: Vec<(i32, i64)>,
    peak_year: i32,
    peak_population: i64,
}

impl CensusSnapshot {
    /// Run a prefix sum from zero over `deltas`, the `(year, net change)`
    /// entries inside `start_year..=end_year` in ascending year order.
    pub(crate) fn from_deltas(
        start_year: i32,
        end_year: i32,
        deltas: impl IntoIterator<Item = (i32, i64)>,
    ) -> Self {
        let mut running = 0;
        let mut changes = vec![(start_year, 0)];
        for (year, delta) in deltas {
            debug_assert!((start_year..=end_year).contains(&year));
            running += delta;
            match changes.last_mut() {
                Some(last) if last.0 == year => last.1 = running,
                _ => changes.push((year, running)),
            }
        }

        // Strictly greater advances the record, so ties keep the earliest year
        let (peak_year, peak_population) = changes
            .iter()
            .fold((start_year, i64::MIN), |best, &(year, population)| {
                if population > best.1 {
                    (year, population)
                } else {
                    best
                }
            });

        Self {
            start_year,
            end_year,
            changes,
            peak_year,
            peak_population,
        }
    }

    #[must_use]
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    #[must_use]
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Whether `year` lies in the swept range
    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }

    /// Population of `year`, or `None` outside the swept range
    #[must_use]
    pub fn population(&self, year: i32) -> Option<i64> {
        if !self.contains(year) {
            return None;
        }
        let index = self.changes.partition_point(|&(from, _)| from <= year);
        self.changes.get(index.checked_sub(1)?).map(|&(_, p)| p)
    }

    /// First year reaching the highest population
    #[must_use]
    pub fn peak_year(&self) -> i32 {
        self.peak_year
    }

    #[must_use]
    pub fn peak_population(&self) -> i64 {
        self.peak_population
    }

    /// Number of years covered
    #[must_use]
    pub fn years(&self) -> u64 {
        (i64::from(self.end_year) - i64::from(self.start_year) + 1) as u64
    }

    /// Number of years covered, saturating where `usize` is narrower
    #[must_use]
    pub fn len(&self) -> usize {
        usize::try_from(self.years()).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Runs of equal population as `(first_year, last_year, population)`
    pub fn segments(&self) -> impl Iterator<Item = (i32, i32, i64)> + '_ {
        self.changes.iter().enumerate().map(|(i, &(from, population))| {
            let to = self
                .changes
                .get(i + 1)
                .map_or(self.end_year, |&(next, _)| next - 1);
            (from, to, population)
        })
    }

    /// Mean population over the swept years
    #[must_use]
    pub fn mean_population(&self) -> f64 {
        let total: f64 = self
            .segments()
            .map(|(from, to, population)| {
                (i64::from(to) - i64::from(from) + 1) as f64 * population as f64
            })
            .sum();
        total / self.years() as f64
    }

    /// `(year, population)` pairs in ascending year order
    pub fn iter(&self) -> impl Iterator<Item = (i32, i64)> + '_ {
        self.segments()
            .flat_map(|(from, to, population)| (from..=to).map(move |year| (year, population)))
    }
}

impl fmt::Display for CensusSnapshot {
    /// One `Population in <year>: <population>` line per year
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (year, population) in self.iter() {
            writeln!(f, "Population in {year}: {population}")?;
        }
        Ok(())
    }
}
