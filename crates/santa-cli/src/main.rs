//! Secret Santa CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use santa_cli::draw::{DrawResult, render_json};
use santa_cli::logging::{LogConfig, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, OutputFormatArg};
use crate::commands::{run_example, run_shuffle};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let (result, format) = match &cli.command {
        Command::Shuffle(args) => (run_shuffle(args), args.draw.format),
        Command::Example(args) => (run_example(args), args.format),
    };
    let exit_code = match result.and_then(|result| report(&result, format)) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn report(result: &DrawResult, format: OutputFormatArg) -> anyhow::Result<()> {
    match format {
        OutputFormatArg::Table => print_summary(result),
        OutputFormatArg::Json => println!("{}", render_json(&result.pairs)?),
    }
    Ok(())
}

/// `--log-level` wins over `-v`/`-q`; either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = cli
        .log_level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter,
        use_env_filter: !cli.verbosity.is_present() && cli.log_level.is_none(),
        with_ansi,
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
        log_data: cli.log_data,
        ..LogConfig::default()
    }
}
