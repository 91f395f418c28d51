use contactbook_core::{Contact, ContactBook, SortKey, StoreError};

fn contact(first: &str, last: &str, dob: &str) -> Contact {
    Contact::new(
        first,
        "",
        last,
        dob,
        format!("{}@example.com", first.to_lowercase()),
        "+7 999 123 45 67",
    )
}

fn sample_book() -> ContactBook {
    let mut book = ContactBook::new();
    book.add(contact("Anna", "Ivanova", "01-01-1990"));
    book.add(contact("Boris", "Petrov", "15-06-1985"));
    book.add(contact("Vera", "Sidorova", "23-11-1992"));
    book
}

#[test]
fn add_appends_at_the_end_without_deduplication() {
    let mut book = ContactBook::new();
    let anna = contact("Anna", "Ivanova", "01-01-1990");
    book.add(anna.clone());
    book.add(anna.clone());
    assert_eq!(book.len(), 2);
    assert_eq!(book.get(0), Some(&anna));
    assert_eq!(book.get(1), Some(&anna));
}

#[test]
fn entries_pair_each_record_with_its_current_index() {
    let book = sample_book();
    let listed: Vec<(usize, String)> = book
        .entries()
        .map(|(index, record)| (index, record.first_name.clone()))
        .collect();
    assert_eq!(
        listed,
        vec![
            (0, "Anna".to_string()),
            (1, "Boris".to_string()),
            (2, "Vera".to_string()),
        ]
    );
}

#[test]
fn remove_shifts_later_records_left_by_one() {
    let mut book = sample_book();
    let removed = book.remove_at(1).unwrap();
    assert_eq!(removed.first_name, "Boris");
    assert_eq!(book.len(), 2);
    // What sat at index 2 is now reachable at index 1.
    assert_eq!(book.get(1).unwrap().first_name, "Vera");
}

#[test]
fn out_of_range_index_is_reported_and_leaves_the_store_unchanged() {
    let mut book = sample_book();
    let before = book.clone();

    let remove_err = book.remove_at(3).unwrap_err();
    assert_eq!(remove_err, StoreError::OutOfRange { index: 3, len: 3 });

    let replace_err = book
        .replace_at(7, contact("Igor", "Novikov", "02-02-1980"))
        .unwrap_err();
    assert_eq!(replace_err, StoreError::OutOfRange { index: 7, len: 3 });

    assert_eq!(book, before);
}

#[test]
fn replace_swaps_the_whole_record_in_place() {
    let mut book = sample_book();
    let replacement = contact("Igor", "Novikov", "02-02-1980");
    let old = book.replace_at(1, replacement.clone()).unwrap();
    assert_eq!(old.first_name, "Boris");
    assert_eq!(book.get(1), Some(&replacement));
    // Neighbors keep their positions.
    assert_eq!(book.get(0).unwrap().first_name, "Anna");
    assert_eq!(book.get(2).unwrap().first_name, "Vera");
}

#[test]
fn sort_by_last_name_is_non_decreasing_and_stable() {
    let mut book = ContactBook::new();
    book.add(contact("Zoya", "Petrov", "01-01-1990"));
    book.add(contact("Anna", "Ivanova", "01-01-1990"));
    book.add(contact("Boris", "Petrov", "01-01-1990"));

    book.sort_by(SortKey::LastName);

    let order: Vec<(&str, &str)> = book
        .records()
        .iter()
        .map(|record| (record.last_name.as_str(), record.first_name.as_str()))
        .collect();
    // Equal last names keep their prior relative order: Zoya before Boris.
    assert_eq!(
        order,
        vec![("Ivanova", "Anna"), ("Petrov", "Zoya"), ("Petrov", "Boris")]
    );
}

#[test]
fn sort_keys_parse_from_caller_facing_names() {
    assert_eq!("firstName".parse::<SortKey>().unwrap(), SortKey::FirstName);
    assert_eq!("lastName".parse::<SortKey>().unwrap(), SortKey::LastName);
    assert_eq!("dob".parse::<SortKey>().unwrap(), SortKey::BirthDate);
    assert_eq!(
        "date_of_birth".parse::<SortKey>().unwrap(),
        SortKey::BirthDate
    );
    assert_eq!(
        "height".parse::<SortKey>().unwrap_err(),
        StoreError::UnknownSortKey("height".to_string())
    );
}

#[test]
fn birth_dates_sort_as_text_not_chronologically() {
    let mut book = ContactBook::new();
    // 2 Jan 1990 is chronologically earlier than 1 Feb 1991, but the
    // day-first text form orders the other way around.
    book.add(contact("Anna", "Ivanova", "02-01-1990"));
    book.add(contact("Boris", "Petrov", "01-02-1991"));

    book.sort_by(SortKey::BirthDate);

    let dates: Vec<&str> = book
        .records()
        .iter()
        .map(|record| record.birth_date.as_str())
        .collect();
    assert_eq!(dates, vec!["01-02-1991", "02-01-1990"]);
}

#[test]
fn search_is_case_sensitive_substring_match() {
    let mut book = ContactBook::new();
    book.add(Contact::new(
        "Anna",
        "",
        "Ivanova",
        "01-01-1990",
        "a@b.com",
        "+7 999 123 45 67",
    ));

    let hits = book.search("Ivan");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, 0);
    assert_eq!(hits[0].1.last_name, "Ivanova");

    assert!(book.search("zzz").is_empty());
    assert!(book.search("ivan").is_empty());
}

#[test]
fn search_covers_every_field() {
    let book = sample_book();
    // Birth date substring.
    assert_eq!(book.search("15-06").len(), 1);
    // Email substring.
    assert_eq!(book.search("vera@").len(), 1);
    // Phone substring shared by all records.
    assert_eq!(book.search("999").len(), 3);
}

#[test]
fn replace_all_swaps_the_full_contents() {
    let mut book = sample_book();
    book.replace_all(vec![contact("Igor", "Novikov", "02-02-1980")]);
    assert_eq!(book.len(), 1);
    assert_eq!(book.get(0).unwrap().first_name, "Igor");

    book.clear();
    assert!(book.is_empty());
}
