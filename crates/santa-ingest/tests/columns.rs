//! Column normalization behavior.

use santa_ingest::{CsvOptions, CsvTable, normalize_columns, read_csv_reader};

fn headers(table: &CsvTable) -> Vec<&str> {
    table.headers.iter().map(String::as_str).collect()
}

#[test]
fn labeled_columns_are_renamed() {
    let table = CsvTable::new(
        vec!["Name".to_string(), "Team".to_string()],
        vec![vec!["Dasher".to_string(), "A".to_string()]],
    );
    let normalized = normalize_columns(&table);
    assert_eq!(headers(&normalized), vec!["name", "criterion-1"]);
    assert_eq!(normalized.rows, table.rows);
    // Input is left untouched.
    assert_eq!(headers(&table), vec!["Name", "Team"]);
}

#[test]
fn unlabeled_columns_get_the_same_scheme() {
    let table = read_csv_reader(
        "Dasher,A,North\nDancer,B,South\n".as_bytes(),
        &CsvOptions::headerless(),
    )
    .expect("read csv");
    let normalized = normalize_columns(&table);
    assert_eq!(headers(&normalized), vec!["name", "criterion-1", "criterion-2"]);
    assert_eq!(normalized.rows.len(), 2);
}

#[test]
fn single_unlabeled_column_is_only_name() {
    let table = read_csv_reader("Dasher\nDancer\nPrancer\n".as_bytes(), &CsvOptions::headerless())
        .expect("read csv");
    let normalized = normalize_columns(&table);
    assert_eq!(headers(&normalized), vec!["name"]);
    assert_eq!(normalized.rows.len(), 3);
}

#[test]
fn normalizing_twice_changes_nothing() {
    let table = CsvTable::new(
        vec!["Who".to_string(), "Team".to_string(), "Dept".to_string()],
        vec![vec!["Vixen".to_string(), "A".to_string(), "Ops".to_string()]],
    );
    let once = normalize_columns(&table);
    let twice = normalize_columns(&once);
    assert_eq!(once, twice);
}
