use contactbook_core::db::migrations::latest_version;
use contactbook_core::db::{open_db, open_db_in_memory};
use contactbook_core::{Contact, ContactRepository, ContactService, SqliteContactRepository};

fn contact(first: &str, last: &str) -> Contact {
    Contact::new(
        first,
        "Petrovna",
        last,
        "01-01-1990",
        format!("{}@example.com", first.to_lowercase()),
        "+7 999 123 45 67",
    )
}

#[test]
fn export_appends_and_import_drains() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);

    let mut service = ContactService::new();
    service.add_unchecked(contact("Anna", "Ivanova"));
    service.add_unchecked(contact("Boris", "Petrov"));

    // Two exports of a 2-record store accumulate four rows.
    assert_eq!(service.export_to_repository(&repo).unwrap(), 2);
    assert_eq!(service.export_to_repository(&repo).unwrap(), 2);

    let imported = service.import_from_repository(&repo).unwrap();
    assert_eq!(imported, 4);
    assert_eq!(service.book().len(), 4);

    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM contacts;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(remaining, 0);
}

#[test]
fn drain_preserves_insertion_order_and_field_values() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);

    let records = vec![
        contact("Anna", "Ivanova"),
        contact("Boris", "Petrov"),
        contact("Vera", "Sidorova"),
    ];
    repo.append_all(&records).unwrap();

    let drained = repo.drain_all().unwrap();
    assert_eq!(drained, records);
}

#[test]
fn drain_on_an_empty_table_yields_an_empty_store() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);

    let mut service = ContactService::new();
    service.add_unchecked(contact("Anna", "Ivanova"));

    assert_eq!(service.import_from_repository(&repo).unwrap(), 0);
    assert!(service.book().is_empty());
}

#[test]
fn null_columns_surface_as_empty_strings() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO contacts (firstName, lastName) VALUES ('Anna', 'Ivanova');",
        [],
    )
    .unwrap();

    let repo = SqliteContactRepository::new(&conn);
    let drained = repo.drain_all().unwrap();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].first_name, "Anna");
    assert_eq!(drained[0].last_name, "Ivanova");
    assert_eq!(drained[0].middle_name, "");
    assert_eq!(drained[0].birth_date, "");
    assert_eq!(drained[0].email, "");
    assert_eq!(drained[0].phone, "");
}

#[test]
fn failed_export_leaves_the_store_untouched() {
    let conn = open_db_in_memory().unwrap();
    // Simulate a backend without the expected table.
    conn.execute_batch("DROP TABLE contacts;").unwrap();
    let repo = SqliteContactRepository::new(&conn);

    let mut service = ContactService::new();
    service.add_unchecked(contact("Anna", "Ivanova"));

    assert!(service.export_to_repository(&repo).is_err());
    assert!(service.import_from_repository(&repo).is_err());
    assert_eq!(service.book().len(), 1);
}

#[test]
fn opening_a_database_file_applies_the_schema_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.db");

    {
        let conn = open_db(&path).unwrap();
        let version: u32 = conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, latest_version());
    }

    // Reopening an already-migrated file is a no-op.
    let conn = open_db(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn data_written_through_one_connection_survives_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.db");

    let mut service = ContactService::new();
    service.add_unchecked(contact("Anna", "Ivanova"));

    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteContactRepository::new(&conn);
        service.export_to_repository(&repo).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteContactRepository::new(&conn);
    let mut restored = ContactService::new();
    assert_eq!(restored.import_from_repository(&repo).unwrap(), 1);
    assert_eq!(restored.book().get(0).unwrap().first_name, "Anna");
}
