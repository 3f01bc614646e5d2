use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

pub(crate) const DEFAULT_INTERVAL_MS: u64 = 16;

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// Poll the virtual controller in the foreground and log its changes.
    Run {
        /// The profile to load
        #[clap(short, long)]
        profile: Option<PathBuf>,
        /// Milliseconds between polls
        #[clap(short, long, default_value_t = DEFAULT_INTERVAL_MS)]
        interval_ms: u64,
    },
    /// Print the capabilities reported for a slot.
    Caps {
        /// The slot to query
        #[clap(short, long, default_value_t = 0)]
        slot: u32,
    },
    /// Validate a profile and print the resulting key map.
    Check {
        /// The profile to check
        #[clap(short, long)]
        profile: Option<PathBuf>,
    },
}

/// Drive software that expects a gamepad from the keyboard.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}
