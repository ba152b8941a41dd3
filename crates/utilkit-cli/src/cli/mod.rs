//! CLI for utilkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use utilkit_core::calendar::DateLayout;
use utilkit_core::config::{self, UtilkitConfig};
use utilkit_core::percent::TrailingEscape;

use commands::{run_completions, run_date, run_decode, run_hash, run_unique};

/// Top-level CLI for utilkit.
#[derive(Debug, Parser)]
#[command(name = "utilkit")]
#[command(about = "utilkit: percent-decoding, date parsing, small hashes and unique file names", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Percent-decode a string (`%XX` escapes, `+` as space).
    Decode {
        /// Encoded text.
        text: String,
        /// Handling of a `%` in the last two bytes (default from config).
        #[arg(long, value_enum)]
        trailing: Option<TrailingArg>,
    },

    /// Parse a UTC date string and print epoch milliseconds.
    Date {
        /// Date such as 20090211T180303Z or 2010-02-23T16:00:00.000Z.
        date: String,
        /// Layout of DATE (default from config).
        #[arg(long, value_enum)]
        layout: Option<LayoutArg>,
    },

    /// Print the small hash of a value.
    Hash {
        /// Value to hash (UTF-8).
        value: String,
        /// Also print the full SHA-1 digest.
        #[arg(long)]
        digest: bool,
    },

    /// Create an empty file with a unique name in DIR and print its path.
    Unique {
        /// Target directory.
        dir: PathBuf,
        /// Desired file name; `-2`, `-3`, ... is inserted before the extension on collision.
        filename: String,
    },

    /// Print a shell completion script.
    Completions {
        /// Shell to generate for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TrailingArg {
    Reject,
    Keep,
}

impl From<TrailingArg> for TrailingEscape {
    fn from(a: TrailingArg) -> Self {
        match a {
            TrailingArg::Reject => TrailingEscape::Reject,
            TrailingArg::Keep => TrailingEscape::Keep,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Compact,
    Extended,
}

impl From<LayoutArg> for DateLayout {
    fn from(a: LayoutArg) -> Self {
        match a {
            LayoutArg::Compact => DateLayout::Compact,
            LayoutArg::Extended => DateLayout::Extended,
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        cli.command.run(&cfg, &mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Execute this command, writing results to `out`.
    pub fn run(self, cfg: &UtilkitConfig, out: &mut dyn Write) -> Result<()> {
        match self {
            CliCommand::Decode { text, trailing } => {
                let trailing = trailing.map(Into::into).unwrap_or(cfg.trailing_escape);
                run_decode(&text, trailing, out)?;
            }
            CliCommand::Date { date, layout } => {
                let layout = layout.map(Into::into).unwrap_or(cfg.date_layout);
                run_date(&date, layout, out)?;
            }
            CliCommand::Hash { value, digest } => run_hash(&value, digest, out)?,
            CliCommand::Unique { dir, filename } => {
                run_unique(&dir, &filename, cfg.unique_counter_limit(), out)?;
            }
            CliCommand::Completions { shell } => run_completions(shell, out)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
