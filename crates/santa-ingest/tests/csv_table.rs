use std::fs;
use std::path::PathBuf;

use santa_ingest::{CsvOptions, IngestError, participants_from_table, read_csv_table};
use santa_model::SantaError;
use tempfile::TempDir;

fn temp_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_participants_with_header() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_file(
        &dir,
        "participants.csv",
        "Name,Team,Department\nDasher,A,North\nDancer,B,\nPrancer,B,South\n",
    );
    let table = read_csv_table(&path, &CsvOptions::default()).expect("read csv");
    let participants = participants_from_table(&table).expect("participants");

    assert_eq!(participants.len(), 3);
    assert_eq!(participants.criterion_count(), 2);
    let dancer = participants.get(1).expect("dancer");
    assert_eq!(dancer.name, "Dancer");
    assert_eq!(dancer.criterion(1), Some("B"));
    assert_eq!(dancer.criterion(2), None);
}

#[test]
fn headerless_file_keeps_first_row() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_file(&dir, "no_header.csv", "Dasher,A\nDancer,B\n");
    let table = read_csv_table(&path, &CsvOptions::headerless()).expect("read csv");
    let participants = participants_from_table(&table).expect("participants");
    let names: Vec<&str> = participants.names().collect();
    assert_eq!(names, vec!["Dasher", "Dancer"]);
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let err = read_csv_table(&dir.path().join("absent.csv"), &CsvOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn duplicate_names_surface_as_participant_errors() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_file(&dir, "dupes.csv", "Name\nComet\nCupid\nComet\n");
    let table = read_csv_table(&path, &CsvOptions::default()).expect("read csv");
    let err = participants_from_table(&table).unwrap_err();
    assert!(matches!(
        err,
        IngestError::Participants(SantaError::DuplicateParticipant { ref name }) if name == "Comet"
    ));
}
