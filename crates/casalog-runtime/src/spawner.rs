//! OS process spawner: the real implementation of the spawn port.

use std::process::{Command, Stdio};

use casalog_core::{Pid, ProcessSpawner, SpawnError, SpawnSpec};
use tracing::debug;

/// Spawner backed by `std::process::Command`.
///
/// The child handle is dropped immediately after launch, which detaches the
/// process without killing it (fire-and-forget). Nothing waits on the child,
/// so a viewer that exits on its own is simply gone.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsProcessSpawner;

impl ProcessSpawner for OsProcessSpawner {
    fn spawn(&self, spec: &SpawnSpec) -> Result<Pid, SpawnError> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        if spec.stderr_to_null {
            cmd.stderr(Stdio::null());
        }

        let child = cmd.spawn().map_err(|err| SpawnError::Io {
            program: spec.program.clone(),
            reason: err.to_string(),
        })?;

        let pid = child.id();
        debug!(program = %spec.program, pid, "spawned subprocess");
        Ok(pid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_a_typed_error() {
        let spec = SpawnSpec::new("/nonexistent/casalog-viewer").arg("casa.log");

        let err = OsProcessSpawner.spawn(&spec).unwrap_err();

        let SpawnError::Io { program, .. } = err;
        assert_eq!(program, "/nonexistent/casalog-viewer");
    }

    #[test]
    #[cfg(unix)]
    fn spawn_returns_pid_without_waiting() {
        // `true` exits immediately; the pid must come back before that.
        let spec = SpawnSpec::new("true");

        let pid = OsProcessSpawner.spawn(&spec).unwrap();
        assert!(pid > 0);
    }
}
