//! CLI adapter for the casalog startup sequence.
//!
//! Exposes the argument parser, the bootstrap composition root, and the
//! startup orchestration so integration tests can drive them with fakes.
#![deny(unsafe_code)]

pub mod bootstrap;
pub mod commands;
pub mod parser;
pub mod startup;

pub use bootstrap::{BootstrapConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use parser::Cli;
pub use startup::{StartupReport, run_respawn, run_startup};
