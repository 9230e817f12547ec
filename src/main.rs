use std::process::ExitCode;

use clap::Parser;
use quotewall::cli::{self, Cli, EXIT_INTERRUPTED};
use quotewall::output::Printer;
use tracing::level_filters::LevelFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = ctrlc::set_handler(|| {
        Printer::new().error("Interrupted", "by user");
        std::process::exit(EXIT_INTERRUPTED);
    }) {
        tracing::warn!(error = %e, "could not install interrupt handler");
    }

    let printer = Printer::new();
    let result = cli::run(cli.into_command(), &printer);
    let code = cli::exit_code(&result);

    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
    }

    ExitCode::from(code)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
