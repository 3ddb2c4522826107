//! OS-level concerns for the casalog startup sequence: platform detection,
//! viewer process launch, the file-backed sink, and execution-environment
//! identification.
#![deny(unsafe_code)]

pub mod environment;
pub mod platform;
pub mod sink;
pub mod spawner;
pub mod viewer;

// Re-export the main runtime types
pub use environment::ExecutionEnv;
pub use platform::Platform;
pub use sink::FileLogSink;
pub use spawner::OsProcessSpawner;
pub use viewer::{CONSOLE_LOGGER, ProcessRegistry, SpawnOutcome, ViewerLauncher};
