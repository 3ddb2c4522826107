//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together for
//! the CLI adapter: the file-backed sink, the OS process spawner behind the
//! viewer launcher, and the execution-environment probe.

use std::sync::Arc;

use casalog_core::{ConfigFiles, Helpers, StartupFlags, cwd_is_writable};
use casalog_runtime::{ExecutionEnv, FileLogSink, OsProcessSpawner, Platform, ViewerLauncher};

use crate::parser::Cli;

/// Inputs to [`bootstrap`], extracted from the parsed CLI.
#[derive(Debug, Clone, Default)]
pub struct BootstrapConfig {
    pub files: ConfigFiles,
    pub helpers: Helpers,
    pub flags: StartupFlags,
}

impl BootstrapConfig {
    /// Materialize the configuration store from CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            files: ConfigFiles {
                logfile: cli.logfile.clone(),
            },
            helpers: Helpers {
                logger: cli.logger.clone(),
            },
            flags: cli.startup_flags(),
        }
    }
}

/// Fully composed context for the startup sequence.
///
/// Owns the singleton sink (shared by handle, not through a global) and the
/// viewer launcher with its process registry.
pub struct CliContext {
    pub files: ConfigFiles,
    pub flags: StartupFlags,
    pub sink: Arc<FileLogSink>,
    pub launcher: ViewerLauncher,
    pub env: ExecutionEnv,
    /// Result of the working-directory write probe, taken once at
    /// composition time so the startup sequence stays deterministic.
    pub cwd_writable: bool,
}

/// Bootstrap the CLI application.
///
/// Detects the platform once, probes the execution environment and the
/// working directory, and wires the real spawner and sink together.
#[must_use]
pub fn bootstrap(config: BootstrapConfig) -> CliContext {
    let launcher = ViewerLauncher::new(
        Platform::current(),
        config.helpers.logger,
        Arc::new(OsProcessSpawner),
    );

    CliContext {
        files: config.files,
        flags: config.flags,
        sink: Arc::new(FileLogSink::new()),
        launcher,
        env: ExecutionEnv::detect(),
        cwd_writable: cwd_is_writable(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn config_from_cli_carries_logfile_and_logger() {
        let cli = Cli::parse_from(["casalog", "--logfile", "run.log", "--logger", "viewerbin"]);
        let config = BootstrapConfig::from_cli(&cli);

        assert_eq!(config.files.logfile.as_deref(), Some("run.log"));
        assert_eq!(config.helpers.logger, "viewerbin");
    }

    #[test]
    fn bootstrap_starts_with_empty_registry() {
        let ctx = bootstrap(BootstrapConfig::default());
        assert!(ctx.launcher.registry().is_empty());
        assert!(!ctx.sink.is_global());
        // The test runner's cwd accepts files, so the probe must agree.
        assert!(ctx.cwd_writable);
    }
}
