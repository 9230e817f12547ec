pub mod completions;
pub mod generate;
pub mod init;

use clap::{ArgAction, Parser, Subcommand};

use crate::error::Result;
use crate::output::Printer;

/// Exit status when any wallpaper or precondition failed.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status after a user interrupt.
pub const EXIT_INTERRUPTED: i32 = 130;

/// quotewall - Render lines of text as centered desktop wallpapers
#[derive(Parser, Debug)]
#[command(name = "quotewall")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: generate::GenerateArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate wallpapers from a text file (default when no command is given)
    Generate(generate::GenerateArgs),

    /// Write a default quotewall.yaml settings file
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Cli {
    /// The command to run, falling back to `generate` with top-level flags.
    pub fn into_command(self) -> Commands {
        self.command
            .unwrap_or(Commands::Generate(self.generate))
    }
}

/// Run a parsed command.
pub fn run(command: Commands, printer: &Printer) -> Result<()> {
    match command {
        Commands::Generate(args) => generate::run(args, printer),
        Commands::Init(args) => init::run(args, printer),
        Commands::Completions(args) => completions::run(args),
    }
}

/// Process exit status for a finished command.
pub fn exit_code(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => EXIT_FAILURE,
    }
}
