//! Built-in participant list used by `santa example`.

use anyhow::{Context, Result};
use santa_ingest::{CsvOptions, participants_from_table, read_csv_reader};
use santa_model::ParticipantTable;

/// Eight reindeer split over two teams and two departments.
pub const EXAMPLE_CSV: &str = "\
Name,Team,Department
Dasher,A,Sleigh
Dancer,B,Sleigh
Prancer,B,Stables
Vixen,A,Stables
Comet,B,Sleigh
Cupid,A,Stables
Donder,A,Sleigh
Blitzen,B,Stables
";

/// Parses [`EXAMPLE_CSV`] through the regular ingestion path.
pub fn example_participants() -> Result<ParticipantTable> {
    let table = read_csv_reader(EXAMPLE_CSV.as_bytes(), &CsvOptions::default())
        .context("parse example participants")?;
    participants_from_table(&table).context("build example participants")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_has_eight_reindeer_and_two_criteria() {
        let participants = example_participants().unwrap();
        assert_eq!(participants.len(), 8);
        assert_eq!(participants.criterion_count(), 2);
        assert_eq!(participants.names().next(), Some("Dasher"));
    }
}
