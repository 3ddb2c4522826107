//! Subcommand definitions.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Relaunch the log viewer on the current log file.
    ///
    /// Use this if the viewer dies or you close it. The previous viewer, if
    /// still running, is left alone; multiple windows can coexist. If the
    /// sink's log file was changed, the new viewer picks up the new name.
    Respawn,
}
