//! External log-viewer process management.
//!
//! Launches the platform-appropriate interactive viewer as a non-blocking,
//! fire-and-forget subprocess and records its pid. Built around the
//! [`ProcessSpawner`] port so dispatch and registry behavior are testable
//! without real processes.

use std::path::Path;
use std::sync::Arc;

use casalog_core::{Pid, ProcessSpawner, SpawnError, SpawnSpec};
use tracing::info;

use crate::platform::Platform;

/// Literal logger command selecting the platform's default console viewer
/// (macOS only).
pub const CONSOLE_LOGGER: &str = "console";

/// Append-only record of viewer pids spawned during this process.
///
/// Owned by the launcher and exposed to the caller; never pruned. Entries
/// for viewers that have since exited are stale by design.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessRegistry {
    pids: Vec<Pid>,
}

impl ProcessRegistry {
    fn record(&mut self, pid: Pid) {
        self.pids.push(pid);
    }

    /// All recorded pids, oldest first.
    pub fn pids(&self) -> &[Pid] {
        &self.pids
    }

    pub fn len(&self) -> usize {
        self.pids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pids.is_empty()
    }
}

/// Outcome of a spawn request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// Viewer launched; pid recorded in the registry.
    Launched(Pid),
    /// No viewer mechanism on this platform; informational, nothing spawned.
    Unsupported,
}

/// Launches external viewer processes for a log file.
pub struct ViewerLauncher {
    platform: Platform,
    logger_command: String,
    spawner: Arc<dyn ProcessSpawner>,
    registry: ProcessRegistry,
}

impl ViewerLauncher {
    pub fn new(
        platform: Platform,
        logger_command: impl Into<String>,
        spawner: Arc<dyn ProcessSpawner>,
    ) -> Self {
        Self {
            platform,
            logger_command: logger_command.into(),
            spawner,
            registry: ProcessRegistry::default(),
        }
    }

    /// Spawn a viewer on `logfile` and record its pid.
    ///
    /// Call this again after the sink's log file changes to get a viewer on
    /// the new file. The previous viewer is left running on purpose so
    /// multiple windows can coexist; callers rely on that.
    ///
    /// Returns [`SpawnOutcome::Unsupported`] on platforms without a viewer
    /// mechanism. A failed spawn primitive surfaces as [`SpawnError`] for
    /// the caller to degrade gracefully; viewer unavailability must not
    /// abort the host application.
    pub fn spawn(&mut self, logfile: &Path) -> Result<SpawnOutcome, SpawnError> {
        let logfile = logfile.to_string_lossy();
        let spec = match self.platform {
            Platform::MacOs if self.logger_command == CONSOLE_LOGGER => SpawnSpec::new("open")
                .arg("-a")
                .arg("console")
                .arg(logfile.as_ref()),
            // XCode writes debug messages to the viewer's stderr, which would
            // end up back in the console; discard them.
            Platform::MacOs => SpawnSpec::new(&self.logger_command)
                .arg(logfile.as_ref())
                .silence_stderr(),
            Platform::Linux => SpawnSpec::new(&self.logger_command).arg(logfile.as_ref()),
            Platform::Unsupported => {
                info!("logger unavailable for this platform");
                return Ok(SpawnOutcome::Unsupported);
            }
        };

        let pid = self.spawner.spawn(&spec)?;
        self.registry.record(pid);
        info!(pid, logfile = %logfile, "log viewer launched");
        Ok(SpawnOutcome::Launched(pid))
    }

    /// The pids spawned so far.
    pub fn registry(&self) -> &ProcessRegistry {
        &self.registry
    }
}
