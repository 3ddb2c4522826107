//! Global sink initialization sequence.
//!
//! Drives a [`LogSinkPort`] through the fixed startup order: set the log
//! file (if configured), register globally, set the processor origin,
//! configure console echo, then post the startup message. The underlying
//! sink implementation faults if the file is set after global registration,
//! so the order here is an invariant, not a preference.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::StartupFlags;
use crate::ports::{LogSinkPort, SinkError};

/// States of the initialization sequence, in the only legal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    Uninitialized,
    FileSet,
    GlobalRegistered,
    OriginSet,
    ConsoleConfigured,
    /// Startup message posted; the sink now serves the whole process.
    Ready,
    /// The startup post failed; the process must terminate.
    AbortedUnwritable,
}

/// Fatal initialization failure.
#[derive(Debug, Error)]
pub enum InitError {
    /// The mandatory startup message could not be written.
    #[error("the logfile is not writable: {source}")]
    PostFailure {
        #[source]
        source: SinkError,
    },
}

impl InitError {
    /// The terminal state this failure leaves the sequence in.
    pub const fn terminal_state(&self) -> InitState {
        match self {
            Self::PostFailure { .. } => InitState::AbortedUnwritable,
        }
    }
}

/// Inputs to the initialization sequence.
#[derive(Debug, Clone, Copy)]
pub struct InitParams<'a> {
    /// Effective log file path, if one is configured.
    pub logfile: Option<&'a str>,
    /// Identifier attached to emitted messages (`casa`, or `<host>:<rank>`
    /// under a multi-process launcher).
    pub processor_origin: &'a str,
    /// Echo posted messages to the terminal.
    pub console_echo: bool,
    /// Build/version string for the startup message.
    pub version: &'a str,
}

/// Compute the console-echo flag: an external log-to-console setting or the
/// `--log2term` startup flag enables it.
pub const fn console_echo(log_to_console: bool, flags: &StartupFlags) -> bool {
    log_to_console || flags.log2term
}

/// Run the initialization sequence against `sink`.
///
/// Returns [`InitState::Ready`] on success. A failed startup post returns
/// [`InitError::PostFailure`]; the caller is expected to print a diagnostic
/// and terminate the process with a non-zero status. All earlier steps are
/// non-fatal: a rejected `set_log_file` is logged and the sequence
/// continues without a file.
pub fn initialize(sink: &dyn LogSinkPort, params: &InitParams<'_>) -> Result<InitState, InitError> {
    // 1. File first. The sink faults if the file arrives after global
    //    registration.
    if let Some(path) = params.logfile {
        if let Err(err) = sink.set_log_file(Path::new(path)) {
            warn!(%err, logfile = path, "could not set log file, continuing without one");
        }
        debug!(state = ?InitState::FileSet, logfile = path, "log file configured");
    }

    // 2. From here on, all log emission in the process routes through this
    //    sink instance.
    sink.set_global(true);
    debug!(state = ?InitState::GlobalRegistered, "sink registered as process-wide target");

    // 3. Origin before echo: echoed lines already carry the origin tag.
    sink.set_processor_origin(params.processor_origin);
    debug!(state = ?InitState::OriginSet, origin = params.processor_origin, "origin set");

    sink.set_console_echo(params.console_echo);
    debug!(state = ?InitState::ConsoleConfigured, echo = params.console_echo, "console echo set");

    // 4. The startup post doubles as the write-access check on the final
    //    destination. Failure here is fatal for the host application.
    sink.post(&format!("CASA Version {}", params.version))
        .map_err(|source| InitError::PostFailure { source })?;

    debug!(state = ?InitState::Ready, "log sink initialized");
    Ok(InitState::Ready)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Fake sink that records every call, optionally failing `post`.
    #[derive(Default)]
    struct RecordingSink {
        calls: Mutex<Vec<String>>,
        fail_post: bool,
    }

    impl RecordingSink {
        fn failing() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_post: true,
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }
    }

    impl LogSinkPort for RecordingSink {
        fn set_log_file(&self, path: &Path) -> Result<(), SinkError> {
            self.record(format!("set_log_file({})", path.display()));
            Ok(())
        }

        fn set_global(&self, enabled: bool) {
            self.record(format!("set_global({enabled})"));
        }

        fn set_processor_origin(&self, origin: &str) {
            self.record(format!("set_processor_origin({origin})"));
        }

        fn set_console_echo(&self, enabled: bool) {
            self.record(format!("set_console_echo({enabled})"));
        }

        fn post(&self, message: &str) -> Result<(), SinkError> {
            self.record(format!("post({message})"));
            if self.fail_post {
                return Err(SinkError::Unwritable {
                    path: PathBuf::from("casa.log"),
                    reason: "permission denied".into(),
                });
            }
            Ok(())
        }
    }

    fn params<'a>(logfile: Option<&'a str>) -> InitParams<'a> {
        InitParams {
            logfile,
            processor_origin: "casa",
            console_echo: false,
            version: "0.1.0",
        }
    }

    #[test]
    fn sequence_runs_in_exact_order() {
        let sink = RecordingSink::default();

        let state = initialize(&sink, &params(Some("casa.log"))).unwrap();

        assert_eq!(state, InitState::Ready);
        assert_eq!(
            sink.calls(),
            vec![
                "set_log_file(casa.log)",
                "set_global(true)",
                "set_processor_origin(casa)",
                "set_console_echo(false)",
                "post(CASA Version 0.1.0)",
            ]
        );
    }

    #[test]
    fn no_logfile_skips_file_step_only() {
        let sink = RecordingSink::default();

        initialize(&sink, &params(None)).unwrap();

        assert_eq!(
            sink.calls(),
            vec![
                "set_global(true)",
                "set_processor_origin(casa)",
                "set_console_echo(false)",
                "post(CASA Version 0.1.0)",
            ]
        );
    }

    #[test]
    fn post_failure_is_fatal_and_terminal() {
        let sink = RecordingSink::failing();

        let err = initialize(&sink, &params(Some("casa.log"))).unwrap_err();

        assert!(matches!(err, InitError::PostFailure { .. }));
        assert_eq!(err.terminal_state(), InitState::AbortedUnwritable);
        // The failing post was still the last call made.
        assert_eq!(
            sink.calls().last().map(String::as_str),
            Some("post(CASA Version 0.1.0)")
        );
    }

    #[test]
    fn console_echo_is_or_of_setting_and_flag() {
        let log2term = StartupFlags {
            log2term: true,
            ..StartupFlags::default()
        };
        let none = StartupFlags::default();

        assert!(console_echo(true, &none));
        assert!(console_echo(false, &log2term));
        assert!(console_echo(true, &log2term));
        assert!(!console_echo(false, &none));
    }
}
