//! Process spawn port: fire-and-forget subprocess launch.

use thiserror::Error;

/// Operating-system process identifier.
pub type Pid = u32;

/// What to launch: a program, its arguments, and stream disposition.
///
/// Intent-based so tests can record and assert on invocations without
/// touching `std::process`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnSpec {
    /// Program name or path, resolved through `PATH` by the implementation.
    pub program: String,
    /// Arguments, in order.
    pub args: Vec<String>,
    /// Redirect the child's stderr to a discard sink.
    pub stderr_to_null: bool,
}

impl SpawnSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stderr_to_null: false,
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Discard the child's stderr.
    #[must_use]
    pub const fn silence_stderr(mut self) -> Self {
        self.stderr_to_null = true;
        self
    }
}

/// Errors from the spawn primitive itself (binary missing, fork/exec
/// rejected). Callers treat these as recoverable: a missing viewer must not
/// abort the host application.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("failed to launch {program}: {reason}")]
    Io { program: String, reason: String },
}

/// Launch a subprocess without waiting for it.
pub trait ProcessSpawner: Send + Sync {
    /// Start the process described by `spec` and return its pid immediately.
    ///
    /// The call must not block on the child's lifecycle.
    fn spawn(&self, spec: &SpawnSpec) -> Result<Pid, SpawnError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_builder_accumulates_args_in_order() {
        let spec = SpawnSpec::new("viewerbin")
            .arg("casa.log")
            .arg("--extra");

        assert_eq!(spec.program, "viewerbin");
        assert_eq!(spec.args, vec!["casa.log", "--extra"]);
        assert!(!spec.stderr_to_null);
    }

    #[test]
    fn silence_stderr_sets_disposition() {
        let spec = SpawnSpec::new("viewerbin").silence_stderr();
        assert!(spec.stderr_to_null);
    }
}
