//! Execution-environment identification.
//!
//! Supplies the processor-origin string attached to emitted log messages:
//! the plain application identifier in single-process mode, or
//! `<host>:<rank>` when running under a multi-process launcher.

use sysinfo::System;

/// Origin used in single-process mode.
pub const APP_ORIGIN: &str = "casa";

/// Rank environment variables set by common MPI launchers.
const RANK_VARS: [&str; 3] = ["OMPI_COMM_WORLD_RANK", "PMI_RANK", "PMIX_RANK"];

/// What the surrounding execution environment looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionEnv {
    /// Identifier attached to emitted log messages.
    pub processor_origin: String,
    /// External log-to-console setting; the initializer ORs this with
    /// `--log2term`.
    pub log_to_console: bool,
}

impl ExecutionEnv {
    /// Detect the environment of the running process.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_rank(launcher_rank().as_deref())
    }

    /// Build the environment from an optional launcher rank.
    ///
    /// Non-root ranks have no viewer attached to their log file, so their
    /// messages are echoed to the terminal instead.
    #[must_use]
    pub fn from_rank(rank: Option<&str>) -> Self {
        match rank {
            Some(rank) => {
                let host = System::host_name().unwrap_or_else(|| "localhost".to_string());
                Self {
                    processor_origin: format!("{host}:{rank}"),
                    log_to_console: rank != "0",
                }
            }
            None => Self {
                processor_origin: APP_ORIGIN.to_string(),
                log_to_console: false,
            },
        }
    }
}

fn launcher_rank() -> Option<String> {
    RANK_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .filter(|rank| !rank.is_empty())
}
