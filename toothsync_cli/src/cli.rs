//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Keeps the non-blocking file appender alive for the process lifetime.
pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "toothsync", version, about = "Toothed-wheel sync detector")]
pub struct Cli {
    /// Path to config TOML
    #[arg(long, value_name = "FILE", default_value = "etc/toothsync.toml")]
    pub config: PathBuf,

    /// Emit per-event records and logs as JSON lines
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace); falls back to
    /// logging.level from the config, then "info"
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Feed a tick sequence through the detector and report every event
    Simulate {
        /// Recorded trace CSV (header: interval_ticks); a synthetic
        /// constant-speed trace is generated when omitted
        #[arg(long, value_name = "FILE")]
        trace: Option<PathBuf>,

        /// Number of synthetic events (overrides sim.events)
        #[arg(long, value_name = "N")]
        events: Option<u64>,

        /// Print the belief distribution after every event
        #[arg(long, action = ArgAction::SetTrue)]
        belief: bool,
    },
    /// Parse and validate the config file, then exit
    CheckConfig,
}
