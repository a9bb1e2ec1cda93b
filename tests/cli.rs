use assert_cmd::Command;
use libris::catalog::Catalog;
use libris::model::Entry;
use libris::store::fs::FileStore;
use libris::store::CatalogStore;
use predicates::prelude::*;

fn entry(title: &str, author: &str, publisher: &str) -> Entry {
    let mut e = Entry::new();
    e.set_title(title.into());
    e.set_author(author.into());
    e.set_publisher(publisher.into());
    e
}

fn seed_catalog(path: &std::path::Path) {
    let mut catalog = Catalog::new();
    catalog.add(&entry("A", "Ann", "Orbit"));
    catalog.add(&entry("B", "Bob", "Tor"));
    catalog.add(&entry("C", "Cyd", "Orbit"));
    FileStore::new(path).save(&catalog).unwrap();
}

#[test]
fn exit_immediately_writes_an_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_file = dir.path().join("books.catalog");

    Command::cargo_bin("libris")
        .unwrap()
        .arg("--catalog")
        .arg(&catalog_file)
        .write_stdin("0\n")
        .assert()
        .success();

    // count:u32le == 0
    assert_eq!(std::fs::read(&catalog_file).unwrap(), vec![0, 0, 0, 0]);
}

#[test]
fn added_entry_survives_to_the_next_session() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_file = dir.path().join("books.catalog");

    // [1] add, nine field lines, [0] exit.
    let add_input = "1\nDune\nFrank Herbert\n412\n1st\nEnglish\nChilton\n1965\n978-0441013593\nDesert planet.\n0\n";
    Command::cargo_bin("libris")
        .unwrap()
        .arg("--catalog")
        .arg(&catalog_file)
        .write_stdin(add_input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added to the catalog: Dune"));

    // [2] display, [0] exit.
    Command::cargo_bin("libris")
        .unwrap()
        .arg("--catalog")
        .arg(&catalog_file)
        .write_stdin("2\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Frank Herbert, Dune (Chilton)"));
}

#[test]
fn search_lists_numbered_hits() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_file = dir.path().join("books.catalog");
    seed_catalog(&catalog_file);

    // [5] find by publisher, term, [0] back, [0] exit.
    Command::cargo_bin("libris")
        .unwrap()
        .arg("--catalog")
        .arg(&catalog_file)
        .write_stdin("5\nOrbit\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("List of entries found"))
        .stdout(predicate::str::contains("1. Ann, A (Orbit)"))
        .stdout(predicate::str::contains("2. Cyd, C (Orbit)"));
}

#[test]
fn search_with_no_hits_reports_and_returns_to_the_menu() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_file = dir.path().join("books.catalog");
    seed_catalog(&catalog_file);

    Command::cargo_bin("libris")
        .unwrap()
        .arg("--catalog")
        .arg(&catalog_file)
        .write_stdin("4\nno-such-name\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found for \"no-such-name\""));
}

#[test]
fn delete_by_index_persists_on_exit() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_file = dir.path().join("books.catalog");
    seed_catalog(&catalog_file);

    // [7] delete, index 2, [0] exit.
    Command::cargo_bin("libris")
        .unwrap()
        .arg("--catalog")
        .arg(&catalog_file)
        .write_stdin("7\n2\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book removed from the catalog: B"));

    let catalog = FileStore::new(&catalog_file).load().unwrap();
    assert_eq!(catalog.len(), 2);
    let titles: Vec<_> = catalog
        .iter()
        .map(|(_, e)| e.borrow().title().to_string())
        .collect();
    assert_eq!(titles, ["A", "C"]);
}

#[test]
fn editing_a_search_hit_edits_the_catalog_entry() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_file = dir.path().join("books.catalog");
    seed_catalog(&catalog_file);

    // [3] find by title "B", [1] edit, index 1, field [3] pages, value,
    // [0] back out of the field menu, [0] back, [0] exit.
    Command::cargo_bin("libris")
        .unwrap()
        .arg("--catalog")
        .arg(&catalog_file)
        .write_stdin("3\nB\n1\n1\n3\n512\n0\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pages updated"));

    let catalog = FileStore::new(&catalog_file).load().unwrap();
    let second = catalog.entry(catalog.get(1).unwrap()).unwrap();
    assert_eq!(second.borrow().title(), "B");
    assert_eq!(second.borrow().pages(), "512");
}

#[test]
fn login_with_valid_credentials_opens_the_listed_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_file = dir.path().join("ada.catalog");
    let credentials = dir.path().join("credentials.txt");
    std::fs::write(
        &credentials,
        format!("# accounts\nada:secret:{}\n", catalog_file.display()),
    )
    .unwrap();

    Command::cargo_bin("libris")
        .unwrap()
        .arg("--credentials")
        .arg(&credentials)
        .write_stdin("ada\nsecret\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("User ada logged in"));

    assert!(catalog_file.exists());
}

#[test]
fn login_with_wrong_password_fails() {
    let dir = tempfile::tempdir().unwrap();
    let credentials = dir.path().join("credentials.txt");
    std::fs::write(&credentials, "ada:secret:books.catalog\n").unwrap();

    Command::cargo_bin("libris")
        .unwrap()
        .arg("--credentials")
        .arg(&credentials)
        .write_stdin("ada\nwrong\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Login failed"));
}

#[test]
fn missing_credentials_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("libris")
        .unwrap()
        .arg("--credentials")
        .arg(dir.path().join("no-such.txt"))
        .write_stdin("ada\nsecret\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
