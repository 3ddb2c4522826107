//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the startup sequence expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `std::process` types in any signature
//! - Intent-based methods, not implementation-leaking ones
//! - Must support: recording fakes for call-order tests, the real OS
//!   spawner, alternative sink backends

pub mod log_sink;
pub mod process_spawner;

pub use log_sink::{LogSinkPort, SinkError};
pub use process_spawner::{Pid, ProcessSpawner, SpawnError, SpawnSpec};
