//! Text file exchange for people lists and census results
//!
//! The people file holds one `"<name> <birth>-<death>"` line per person.
//! The results file starts with the `Biggest population was ...` headline
//! followed by one `Population in <year>: <population>` line per year.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use crate::algorithm::census::{CensusSnapshot, CensusSummary};
use crate::error::util::{create_file, open_file};
use crate::error::{CensusError, Result};
use crate::models::Person;
use crate::utils::logging::{FileOperation, log_operation_complete, log_operation_start, log_warning};

/// Write one line per person
pub fn write_people(path: &Path, people: &[Person]) -> Result<()> {
    log_operation_start(FileOperation::WritePeople, path);
    let start = Instant::now();

    let mut writer = BufWriter::new(create_file(path, "writing people")?);
    let write_err = |e| CensusError::io(path, "Failed to write people", e);
    for person in people {
        writeln!(writer, "{person}").map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    log_operation_complete(FileOperation::WritePeople, path, people.len(), Some(start.elapsed()));
    Ok(())
}

/// Read a people file, skipping blank lines
///
/// Parse errors report the 1-based line they occurred on.
pub fn read_people(path: &Path) -> Result<Vec<Person>> {
    log_operation_start(FileOperation::ReadPeople, path);
    let start = Instant::now();

    let reader = BufReader::new(open_file(path, "reading people")?);
    let mut people = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CensusError::io(path, "Failed to read people", e))?;
        if line.trim().is_empty() {
            continue;
        }
        let person = line
            .parse::<Person>()
            .map_err(|e| e.at_line(index + 1))?;
        people.push(person);
    }

    if people.is_empty() {
        log_warning("No people found", Some(path));
    }
    log_operation_complete(FileOperation::ReadPeople, path, people.len(), Some(start.elapsed()));
    Ok(people)
}

/// Render the results file contents for a sweep
#[must_use]
pub fn format_results(snapshot: &CensusSnapshot) -> String {
    format!(
        "Biggest population was {} in {}\n{snapshot}",
        snapshot.peak_population(),
        snapshot.peak_year()
    )
}

/// Write the headline and the per-year listing of a sweep
pub fn write_results(path: &Path, snapshot: &CensusSnapshot) -> Result<()> {
    log_operation_start(FileOperation::WriteResults, path);

    let mut writer = BufWriter::new(create_file(path, "writing census results")?);
    let write_err = |e| CensusError::io(path, "Failed to write census results", e);
    writer
        .write_all(format_results(snapshot).as_bytes())
        .map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    log_operation_complete(FileOperation::WriteResults, path, snapshot.len(), None);
    Ok(())
}

/// Write a census summary as pretty-printed JSON
pub fn write_summary_json(path: &Path, summary: &CensusSummary) -> Result<()> {
    log_operation_start(FileOperation::WriteSummary, path);

    let mut writer = BufWriter::new(create_file(path, "writing census summary")?);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writeln!(writer).map_err(|e| CensusError::io(path, "Failed to write census summary", e))?;
    writer
        .flush()
        .map_err(|e| CensusError::io(path, "Failed to write census summary", e))?;

    log_operation_complete(FileOperation::WriteSummary, path, 1, None);
    Ok(())
}
