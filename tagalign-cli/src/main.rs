//! tagalign command-line entry point

use clap::Parser;
use std::process::ExitCode;
use tagalign_cli::commands::{init_logging, Commands};

/// Convert span annotations into sequence-labeling formats
#[derive(Debug, Parser)]
#[command(name = "tagalign", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable logging
    #[arg(long, global = true)]
    silent: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.silent);
    log::debug!("Arguments: {:?}", cli);

    let result = match &cli.command {
        Commands::Convert(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
