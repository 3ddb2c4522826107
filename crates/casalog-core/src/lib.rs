//! Core domain types and port definitions for the casalog startup sequence.
//!
//! This crate holds everything the startup sequence decides, with no process
//! or adapter concerns: the configuration model, the log target resolver, the
//! sink initialization state machine, and the ports (trait abstractions) that
//! infrastructure crates implement.
#![deny(unsafe_code)]

pub mod config;
pub mod init;
pub mod ports;
pub mod resolve;

// Re-export commonly used types for convenience
pub use config::{ConfigFiles, DEFAULT_LOGGER_COMMAND, Helpers, StartupFlags};
pub use init::{InitError, InitParams, InitState, console_echo, initialize};
pub use ports::{LogSinkPort, Pid, ProcessSpawner, SinkError, SpawnError, SpawnSpec};
pub use resolve::{DEFAULT_LOGFILE, LogTarget, Notice, Resolution, cwd_is_writable, resolve};
