use anyhow::{Result, bail};
use tracing::debug;

use santa_cli::draw::{DrawRequest, DrawResult, load_participants, run_draw};
use santa_cli::example::example_participants;
use santa_ingest::CsvOptions;
use santa_model::{ExhaustionPolicy, ShuffleMode, ShuffleOptions};

use crate::cli::{DrawArgs, ModeArg, ShuffleArgs};

pub fn run_shuffle(args: &ShuffleArgs) -> Result<DrawResult> {
    let csv_options = csv_options(args)?;
    let participants = load_participants(&args.input, &csv_options)?;
    let request = draw_request(&args.draw);
    run_draw(&participants, &args.input.display().to_string(), &request)
}

pub fn run_example(args: &DrawArgs) -> Result<DrawResult> {
    let participants = example_participants()?;
    run_draw(&participants, "example", &draw_request(args))
}

fn csv_options(args: &ShuffleArgs) -> Result<CsvOptions> {
    if !args.delimiter.is_ascii() {
        bail!("delimiter must be an ASCII character, got {:?}", args.delimiter);
    }
    let options = CsvOptions {
        has_header: !args.no_header,
        delimiter: args.delimiter as u8,
    };
    debug!(has_header = options.has_header, delimiter = %args.delimiter, "csv options");
    Ok(options)
}

fn draw_request(args: &DrawArgs) -> DrawRequest {
    let mode = match args.mode {
        ModeArg::Name => ShuffleMode::NameOnly,
        ModeArg::Criteria => ShuffleMode::MultiCriterion,
    };
    let exhaustion = if args.ignore_criteria {
        ExhaustionPolicy::IgnoreCriteria
    } else {
        ExhaustionPolicy::Fail
    };
    DrawRequest {
        options: ShuffleOptions::new(mode)
            .with_criteria(args.criteria)
            .with_exhaustion(exhaustion),
        seed: args.seed,
    }
}
