use assert_cmd::prelude::*;
use assert_fs::{fixture::PathChild, TempDir};
use std::process::Command;

// We check the --help output in order to confirm that the clap cli is setup correctly.
// Any arguments that are incorrectly will cause clap to panic regardless of the arguments or
// options provided.
// Calling help does not require any application logic so if this tests fails then we know it
// is to do with the clap cli setup code.
#[test]
fn check_clap_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("shelf")?;

    cmd.arg("--help");
    cmd.assert().success();

    Ok(())
}

#[test]
fn init_creates_serial_library_with_header() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let library = dir.child("serials.csv");

    Command::cargo_bin("shelf")?
        .args(["init", "serials", "--file"])
        .arg(library.path())
        .assert()
        .success();

    let content = std::fs::read_to_string(library.path())?;
    assert_eq!(
        "ISSN,ISSN Type,Title,Publisher,Subjects,Year,Month,Volume,Issue\n",
        content
    );

    Ok(())
}

#[test]
fn init_twice_without_force_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let library = dir.child("books.csv");

    for expected_success in [true, false] {
        let assert = Command::cargo_bin("shelf")?
            .args(["init", "books", "--file"])
            .arg(library.path())
            .assert();

        if expected_success {
            assert.success();
        } else {
            assert.failure().code(2);
        }
    }

    Command::cargo_bin("shelf")?
        .args(["init", "books", "--force", "--file"])
        .arg(library.path())
        .assert()
        .success();

    Ok(())
}

// Invalid identifiers are rejected before any request is made, so these run without a network.
#[test]
fn batch_of_invalid_isbns_fails_but_keeps_header() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let library = dir.child("books.csv");

    let output = Command::cargo_bin("shelf")?
        .args(["isbn", "not-an-isbn", "978-0-099-52848-8", "--file"])
        .arg(library.path())
        .output()?;

    assert_eq!(Some(2), output.status.code());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains("None of the 2 identifiers could be added"),
        "{stderr}"
    );

    let content = std::fs::read_to_string(library.path())?;
    assert_eq!("ISBN-13,Title,Authors,Publisher,Year,Language\n", content);

    Ok(())
}

#[test]
fn invalid_issn_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let library = dir.child("serials.csv");

    let output = Command::cargo_bin("shelf")?
        .args(["issn", "0028-0837", "--year", "2021", "--file"])
        .arg(library.path())
        .output()?;

    assert_eq!(Some(2), output.status.code());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("'0028-0837' is not a valid ISSN"), "{stderr}");

    Ok(())
}

#[test]
fn isbn_without_identifiers_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("shelf")?.arg("isbn").assert().failure();

    Ok(())
}
