use santa_model::{Participant, ParticipantTable};
use tracing::debug;

use crate::columns::normalize_columns;
use crate::csv_table::CsvTable;
use crate::error::{IngestError, Result};

/// Normalizes `table` and turns each row into a [`Participant`].
///
/// # Errors
///
/// Returns [`IngestError::NoColumns`] for a table without columns and
/// [`IngestError::Participants`] when names are blank or repeated.
pub fn participants_from_table(table: &CsvTable) -> Result<ParticipantTable> {
    if table.width() == 0 {
        return Err(IngestError::NoColumns);
    }
    let normalized = normalize_columns(table);
    let participants: Vec<Participant> = normalized
        .rows
        .iter()
        .map(|row| match row.split_first() {
            Some((name, criteria)) => Participant::with_criteria(name.as_str(), criteria),
            None => Participant::new(String::new()),
        })
        .collect();
    let participants = ParticipantTable::new(participants)?;
    debug!(
        participants = participants.len(),
        criteria = participants.criterion_count(),
        columns = ?normalized.headers,
        "built participant table"
    );
    Ok(participants)
}
