//! Draw orchestration shared by the `shuffle` and `example` commands.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use tracing::{info, info_span, trace};

use santa_core::{AssignmentStats, assign_with_seed};
use santa_ingest::{CsvOptions, participants_from_table, read_csv_table};
use santa_model::{ParticipantTable, SantaPair, ShuffleOptions};

use crate::logging::redact_value;

/// What to draw and how.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawRequest {
    pub options: ShuffleOptions,
    /// Fixed seed; a random one is chosen and reported when absent.
    pub seed: Option<u64>,
}

/// A finished draw with the context needed to report it.
#[derive(Debug, Clone)]
pub struct DrawResult {
    pub source: String,
    pub participants: usize,
    pub criterion_columns: usize,
    pub seed: u64,
    pub pairs: Vec<SantaPair>,
    pub stats: AssignmentStats,
}

/// JSON body listing the drawn pairs.
#[derive(Debug, Serialize)]
pub struct PairsResponse<'a> {
    pub pairs: &'a [SantaPair],
}

/// Loads and normalizes a participant CSV.
pub fn load_participants(path: &Path, options: &CsvOptions) -> Result<ParticipantTable> {
    let table = read_csv_table(path, options)
        .with_context(|| format!("read participants: {}", path.display()))?;
    participants_from_table(&table)
        .with_context(|| format!("build participants: {}", path.display()))
}

/// Runs one draw over `participants`.
pub fn run_draw(participants: &ParticipantTable, source: &str, request: &DrawRequest) -> Result<DrawResult> {
    let seed = request.seed.unwrap_or_else(|| rand::rng().random());
    let span = info_span!("draw", source = %source, seed);
    let _guard = span.enter();

    let start = Instant::now();
    let assignment = assign_with_seed(participants, &request.options, seed)
        .with_context(|| format!("draw pairs for {source}"))?;
    for pair in &assignment.pairs {
        trace!(
            giver = redact_value(&pair.giver),
            receiver = redact_value(&pair.receiver),
            "pair drawn"
        );
    }
    info!(
        participants = participants.len(),
        duration_ms = start.elapsed().as_millis(),
        "draw finished"
    );

    Ok(DrawResult {
        source: source.to_string(),
        participants: participants.len(),
        criterion_columns: participants.criterion_count(),
        seed,
        pairs: assignment.pairs,
        stats: assignment.stats,
    })
}

/// Renders pairs as `{"pairs": [{"giver": ..., "receiver": ...}]}`.
pub fn render_json(pairs: &[SantaPair]) -> Result<String> {
    serde_json::to_string_pretty(&PairsResponse { pairs }).context("serialize pairs")
}
