//! Log sink port: the process-wide logging destination.
//!
//! The sink is constructed once at startup and passed by handle into every
//! component that logs, preserving one-sink-per-process semantics without a
//! true global variable. After initialization it is shared, concurrently
//! accessed state, so implementations must make [`LogSinkPort::post`] safe
//! under concurrent invocation.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by sink operations.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The log destination rejected a write.
    #[error("log file {path} is not writable: {reason}")]
    Unwritable { path: PathBuf, reason: String },

    /// Any other I/O failure inside the sink.
    #[error("log sink I/O error: {0}")]
    Io(String),
}

/// Boundary operations of the logging sink.
///
/// The initialization sequence calls these in a fixed order; the underlying
/// implementation may crash if the order is violated, so callers go through
/// [`crate::init::initialize`] rather than driving the sink directly.
pub trait LogSinkPort: Send + Sync {
    /// Route file output to `path`. Must be called before global
    /// registration when a file is configured.
    fn set_log_file(&self, path: &Path) -> Result<(), SinkError>;

    /// Register (or unregister) this sink as the process-wide log target.
    fn set_global(&self, enabled: bool);

    /// Attach the processor-origin string to subsequently posted messages.
    fn set_processor_origin(&self, origin: &str);

    /// Echo posted messages to the console as well.
    fn set_console_echo(&self, enabled: bool);

    /// Post a message. May fail if the destination is unwritable.
    fn post(&self, message: &str) -> Result<(), SinkError>;
}
