use census::utils::io::{format_results, read_people, write_people, write_results};
use census::{Census, CensusError, ErrorKind};

use crate::utils::{overlapping_people, scratch_file};

#[test]
fn test_people_file_format() -> census::Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_file(&dir, "people.txt");

    write_people(&path, &overlapping_people())?;
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "Person0 1900-1950\nPerson1 1925-1975\nPerson2 1940-2000\n"
    );

    assert_eq!(read_people(&path)?, overlapping_people());
    Ok(())
}

#[test]
fn test_read_rejects_invalid_lifespan() {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_file(&dir, "people.txt");
    std::fs::write(&path, "Person0 1900-1950\nPerson1 1990-1980\n").unwrap();

    let err = read_people(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Construction);
}

#[test]
fn test_read_empty_file() -> census::Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_file(&dir, "people.txt");
    std::fs::write(&path, "\n   \n").unwrap();
    assert!(read_people(&path)?.is_empty());
    Ok(())
}

#[test]
fn test_missing_people_file_is_not_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_people(&scratch_file(&dir, "nowhere.txt")).unwrap_err();
    match err {
        CensusError::Io { path, .. } => assert!(path.ends_with("nowhere.txt")),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_results_file_format() -> census::Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = scratch_file(&dir, "results.txt");

    let mut census = Census::from_people(overlapping_people());
    census.start_census(1938, 1941)?;
    write_results(&path, census.snapshot()?)?;

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "Biggest population was 1 in 1940\n\
         Population in 1938: 0\n\
         Population in 1939: 0\n\
         Population in 1940: 1\n\
         Population in 1941: 1\n"
    );
    assert_eq!(contents, format_results(census.snapshot()?));
    Ok(())
}

#[test]
fn test_results_to_unwritable_path() -> census::Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let mut census = Census::from_people(overlapping_people());
    census.start_census(1900, 2000)?;

    let path = dir.path().join("missing").join("results.txt");
    let err = write_results(&path, census.snapshot()?).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    Ok(())
}
