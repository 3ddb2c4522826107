//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with the recognized startup
//! flags. The five logging flags mirror the host application's surface;
//! none of them are new here.

use clap::Parser;

use casalog_core::{DEFAULT_LOGGER_COMMAND, StartupFlags};

use crate::commands::Commands;

/// Command-line interface definition for the casalog bootstrap.
#[derive(Parser)]
#[command(name = "casalog")]
#[command(about = "Resolve the log target, launch the viewer, initialize the log sink")]
#[command(version = casalog_build_info::LONG_VERSION)]
pub struct Cli {
    /// Log file path (overrides any configured default)
    #[arg(long, env = "CASALOG_LOGFILE")]
    pub logfile: Option<String>,

    /// Viewer executable, or "console" for the platform's default viewer
    #[arg(long, env = "CASALOG_LOGGER", default_value = DEFAULT_LOGGER_COMMAND)]
    pub logger: String,

    /// Deprecated: use --nologger
    #[arg(long)]
    pub nolog: bool,

    /// Do not write a log file
    #[arg(long)]
    pub nologfile: bool,

    /// Do not launch the external log viewer
    #[arg(long)]
    pub nologger: bool,

    /// Disable all GUI components, including the log viewer
    #[arg(long)]
    pub nogui: bool,

    /// Echo log messages to the terminal
    #[arg(long)]
    pub log2term: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The recognized startup flags as a value the resolver consumes.
    #[must_use]
    pub const fn startup_flags(&self) -> StartupFlags {
        StartupFlags {
            nolog: self.nolog,
            nologfile: self.nologfile,
            nologger: self.nologger,
            nogui: self.nogui,
            log2term: self.log2term,
        }
    }
}
