//! Column relabeling for participant tables.
//!
//! The first column always holds participant names; every remaining column is
//! an exclusion criterion, ordered from highest to lowest priority. Headers
//! are not inspected, so labeled and unlabeled inputs come out the same.

use crate::csv_table::CsvTable;

/// Label of the participant name column.
pub const NAME_COLUMN: &str = "name";

/// Label of criterion column `position` (1-based).
pub fn criterion_column(position: usize) -> String {
    format!("criterion-{position}")
}

/// Canonical labels for a table `width` columns wide.
pub fn normalized_headers(width: usize) -> Vec<String> {
    (0..width)
        .map(|index| {
            if index == 0 {
                NAME_COLUMN.to_string()
            } else {
                criterion_column(index)
            }
        })
        .collect()
}

/// Returns a copy of `table` with canonical column labels.
pub fn normalize_columns(table: &CsvTable) -> CsvTable {
    CsvTable {
        headers: normalized_headers(table.width()),
        rows: table.rows.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_has_no_labels() {
        assert!(normalized_headers(0).is_empty());
    }

    #[test]
    fn criterion_labels_are_one_based() {
        assert_eq!(criterion_column(1), "criterion-1");
        assert_eq!(normalized_headers(3), vec!["name", "criterion-1", "criterion-2"]);
    }
}
