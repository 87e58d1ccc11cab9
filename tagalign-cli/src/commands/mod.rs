//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use tagalign_core::{Format, ViewKind};

pub mod convert;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert annotated JSON lines into IOB2, BILOU or JSON lines
    Convert(convert::ConvertArgs),

    /// Check that every entity aligns and nothing overlaps
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write the default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available text views
    Views,
}

impl ListCommands {
    /// Lines printed for this listing
    pub fn entries(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => Format::ALL
                .iter()
                .map(|format| {
                    let about = match format {
                        Format::Jsonl => "one JSON object per document",
                        Format::Iob2 => "unit<TAB>tag lines, B/I/O tags",
                        Format::Bilou => "unit<TAB>tag lines, B/I/L/O/U tags",
                    };
                    format!("{:<8}{about}", format.name())
                })
                .collect(),
            ListCommands::Views => ViewKind::ALL
                .iter()
                .map(|view| {
                    let about = match view {
                        ViewKind::Raw => "one unit per character",
                        ViewKind::Token => "one unit per token (needs `tokens`)",
                    };
                    format!("{:<8}{about}", view.name())
                })
                .collect(),
        }
    }

    /// Print the listing to stdout
    pub fn execute(&self) -> Result<()> {
        for entry in self.entries() {
            println!("{entry}");
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_formats_entries() {
        let entries = ListCommands::Formats.entries();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].starts_with("jsonl"));
        assert!(entries[1].starts_with("iob2"));
        assert!(entries[2].starts_with("bilou"));
    }

    #[test]
    fn test_list_views_entries() {
        let entries = ListCommands::Views.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].starts_with("raw"));
        assert!(entries[1].contains("tokens"));
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Views,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Views"));
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(1, false);
        init_logging(3, false);
        init_logging(0, true);
    }
}
