use census::{ErrorKind, PeopleGenerator};

#[test]
fn test_generated_people_respect_bounds() {
    let people = PeopleGenerator::new(500).with_seed(7).generate().unwrap();
    assert_eq!(people.len(), 500);

    for (i, person) in people.iter().enumerate() {
        assert_eq!(person.name(), format!("Person{i}"));
        assert!((1900..=2000).contains(&person.birth_year()));
        assert!(person.birth_year() <= person.death_year());
        assert!(person.death_year() <= 2000);
    }
}

#[test]
fn test_seed_is_reproducible() {
    let generator = PeopleGenerator::new(50).with_years(1800, 1850).with_seed(1234);
    assert_eq!(generator.generate().unwrap(), generator.generate().unwrap());
}

#[test]
fn test_zero_people() {
    assert!(PeopleGenerator::new(0).generate().unwrap().is_empty());
}

#[test]
fn test_inverted_years_fail() {
    let err = PeopleGenerator::new(3)
        .with_years(2000, 1999)
        .generate()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}
