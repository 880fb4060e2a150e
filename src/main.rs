use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::error;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

mod roster;

use roster::report::ReportMode;

/// Sort a student roster and write a filtered report
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path of the roster input file
    input: PathBuf,
    /// Path of the report output file
    output: PathBuf,
    /// Report mode: 1|domestic, 2|international or 3|all
    #[arg(value_parser = ReportMode::parse)]
    mode: ReportMode,
}

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("failed to initialize the logger");

    let cli = Cli::parse();

    if let Err(e) = roster::run(&cli.input, &cli.output, cli.mode) {
        error!("{}", e);
        process::exit(1);
    }
}
