//! File-backed log sink.
//!
//! The default [`LogSinkPort`] implementation: appends timestamped,
//! origin-tagged lines to the configured file and optionally echoes them to
//! stderr. One instance is created at startup and shared by handle for the
//! rest of the process; a mutex keeps `post` safe under concurrent callers.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use casalog_core::{LogSinkPort, SinkError};
use chrono::Utc;

/// Message priority recorded on each line. Startup only posts at INFO.
const PRIORITY: &str = "INFO";

#[derive(Debug, Default)]
struct SinkState {
    logfile: Option<PathBuf>,
    global: bool,
    origin: String,
    echo: bool,
}

/// Thread-safe, file-backed log sink.
pub struct FileLogSink {
    state: Mutex<SinkState>,
}

impl FileLogSink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SinkState::default()),
        }
    }

    // Sink state stays usable even if a writer panicked mid-post; the
    // guarded data is plain configuration, never left half-updated.
    fn state(&self) -> MutexGuard<'_, SinkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The configured log file, if any.
    pub fn logfile(&self) -> Option<PathBuf> {
        self.state().logfile.clone()
    }

    /// Whether this sink is registered as the process-wide target.
    pub fn is_global(&self) -> bool {
        self.state().global
    }

    /// The processor-origin tag attached to posted lines.
    pub fn origin(&self) -> String {
        self.state().origin.clone()
    }

    /// Whether posted lines are echoed to the console.
    pub fn console_echo(&self) -> bool {
        self.state().echo
    }
}

impl Default for FileLogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSinkPort for FileLogSink {
    fn set_log_file(&self, path: &Path) -> Result<(), SinkError> {
        let mut state = self.state();
        // A blank path clears the file; writability is checked by the first
        // post, not here.
        if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
            state.logfile = None;
        } else {
            state.logfile = Some(path.to_path_buf());
        }
        Ok(())
    }

    fn set_global(&self, enabled: bool) {
        self.state().global = enabled;
    }

    fn set_processor_origin(&self, origin: &str) {
        self.state().origin = origin.to_string();
    }

    fn set_console_echo(&self, enabled: bool) {
        self.state().echo = enabled;
    }

    fn post(&self, message: &str) -> Result<(), SinkError> {
        let state = self.state();
        let line = format!(
            "{}\t{}\t{}\t{}",
            Utc::now().format("%Y-%m-%d %H:%M:%S"),
            PRIORITY,
            state.origin,
            message
        );

        if let Some(path) = &state.logfile {
            let mut file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(path)
                .map_err(|err| SinkError::Unwritable {
                    path: path.clone(),
                    reason: err.to_string(),
                })?;
            writeln!(file, "{line}").map_err(|err| SinkError::Unwritable {
                path: path.clone(),
                reason: err.to_string(),
            })?;
        }

        if state.echo {
            eprintln!("{line}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_appends_origin_tagged_line() {
        let dir = tempfile::tempdir().unwrap();
        let logfile = dir.path().join("casa.log");

        let sink = FileLogSink::new();
        sink.set_log_file(&logfile).unwrap();
        sink.set_processor_origin("casa");
        sink.post("CASA Version 0.1.0").unwrap();
        sink.post("second message").unwrap();

        let contents = std::fs::read_to_string(&logfile).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("INFO\tcasa\tCASA Version 0.1.0"));
        assert!(lines[1].ends_with("second message"));
    }

    #[test]
    fn post_without_file_succeeds() {
        let sink = FileLogSink::new();
        sink.set_processor_origin("casa");

        // Console-only operation: no file configured, nothing to fail.
        sink.post("hello").unwrap();
    }

    #[test]
    fn post_to_unwritable_path_fails() {
        let sink = FileLogSink::new();
        sink.set_log_file(Path::new("/nonexistent/dir/casa.log"))
            .unwrap();

        let err = sink.post("CASA Version 0.1.0").unwrap_err();
        assert!(matches!(err, SinkError::Unwritable { .. }));
    }

    #[test]
    fn blank_path_clears_the_file() {
        let sink = FileLogSink::new();
        sink.set_log_file(Path::new("casa.log")).unwrap();
        assert!(sink.logfile().is_some());

        sink.set_log_file(Path::new("   ")).unwrap();
        assert!(sink.logfile().is_none());
    }

    #[test]
    fn state_accessors_reflect_configuration() {
        let sink = FileLogSink::new();
        sink.set_global(true);
        sink.set_processor_origin("host0:3");
        sink.set_console_echo(true);

        assert!(sink.is_global());
        assert_eq!(sink.origin(), "host0:3");
        assert!(sink.console_echo());
    }

    #[test]
    fn post_is_safe_under_concurrent_callers() {
        use std::sync::Arc;

        let dir = tempfile::tempdir().unwrap();
        let logfile = dir.path().join("casa.log");
        let sink = Arc::new(FileLogSink::new());
        sink.set_log_file(&logfile).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let sink = sink.clone();
                std::thread::spawn(move || {
                    for j in 0..50 {
                        sink.post(&format!("thread {i} message {j}")).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let contents = std::fs::read_to_string(&logfile).unwrap();
        assert_eq!(contents.lines().count(), 400);
    }
}
