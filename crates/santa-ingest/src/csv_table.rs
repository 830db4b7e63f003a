use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Label used in errors for tables read from an in-memory reader.
const READER_SOURCE: &str = "<reader>";

/// Loader settings for participant lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Whether the first non-blank row holds column labels.
    pub has_header: bool,
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: b',',
        }
    }
}

impl CsvOptions {
    /// Options for a file whose first row is already data.
    pub fn headerless() -> Self {
        Self {
            has_header: false,
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// A raw rectangular table of text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a participant CSV file.
///
/// Blank rows are skipped and short rows are padded with empty cells. When
/// `has_header` is false the columns are labeled by position (`0`, `1`, ...).
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] for a missing path,
/// [`IngestError::Csv`] for unreadable input and [`IngestError::EmptyCsv`]
/// when no rows remain.
pub fn read_csv_table(path: &Path, options: &CsvOptions) -> Result<CsvTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let reader = builder(options)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    read_records(reader, path, options)
}

/// Reads a participant table from any byte source.
///
/// # Errors
///
/// Same as [`read_csv_table`], minus the missing-file case.
pub fn read_csv_reader<R: Read>(input: R, options: &CsvOptions) -> Result<CsvTable> {
    let reader = builder(options).from_reader(input);
    read_records(reader, Path::new(READER_SOURCE), options)
}

fn builder(options: &CsvOptions) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter);
    builder
}

fn read_records<R: Read>(mut reader: Reader<R>, path: &Path, options: &CsvOptions) -> Result<CsvTable> {
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: PathBuf::from(path),
        });
    }

    let width = raw_rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut rows = raw_rows.into_iter();
    let mut headers: Vec<String> = if options.has_header {
        rows.next().unwrap_or_default()
    } else {
        Vec::new()
    };
    // Unlabeled trailing columns keep their position as label.
    for position in headers.len()..width {
        headers.push(position.to_string());
    }
    let rows: Vec<Vec<String>> = rows
        .map(|mut row| {
            row.resize(width, String::new());
            row
        })
        .collect();

    debug!(
        source = %path.display(),
        columns = width,
        rows = rows.len(),
        has_header = options.has_header,
        "loaded participant csv"
    );
    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_row_is_split_from_data() {
        let input = "Name,Team\nDasher,A\nDancer,B\n";
        let table = read_csv_reader(input.as_bytes(), &CsvOptions::default()).unwrap();
        assert_eq!(table.headers, vec!["Name", "Team"]);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn headerless_input_gets_positional_labels() {
        let input = "Dasher,A,North\nDancer,B,South\n";
        let table = read_csv_reader(input.as_bytes(), &CsvOptions::headerless()).unwrap();
        assert_eq!(table.headers, vec!["0", "1", "2"]);
        assert_eq!(table.rows[0], vec!["Dasher", "A", "North"]);
    }

    #[test]
    fn short_rows_are_padded_and_blank_rows_skipped() {
        let input = "Name,Team,Dept\nDasher,A\n,,\nDancer,B,Ops\n";
        let table = read_csv_reader(input.as_bytes(), &CsvOptions::default()).unwrap();
        assert_eq!(table.rows, vec![
            vec!["Dasher".to_string(), "A".to_string(), String::new()],
            vec!["Dancer".to_string(), "B".to_string(), "Ops".to_string()],
        ]);
    }

    #[test]
    fn bom_and_whitespace_are_trimmed() {
        let input = "\u{feff}Name , Team\n Vixen , A \n";
        let table = read_csv_reader(input.as_bytes(), &CsvOptions::default()).unwrap();
        assert_eq!(table.headers, vec!["Name", "Team"]);
        assert_eq!(table.rows[0], vec!["Vixen", "A"]);
    }

    #[test]
    fn custom_delimiter() {
        let input = "Name;Team\nComet;B\n";
        let options = CsvOptions::default().with_delimiter(b';');
        let table = read_csv_reader(input.as_bytes(), &options).unwrap();
        assert_eq!(table.headers, vec!["Name", "Team"]);
        assert_eq!(table.rows[0], vec!["Comet", "B"]);
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = read_csv_reader("\n,\n".as_bytes(), &CsvOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyCsv { .. }));
    }
}
