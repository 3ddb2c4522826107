//! Startup orchestration: resolve, deploy, initialize.
//!
//! Runs the three startup components in their fixed order. Everything here
//! degrades gracefully except the final sink initialization, whose post
//! failure is fatal for the host application.

use std::path::PathBuf;

use casalog_core::{
    DEFAULT_LOGFILE, InitError, InitParams, InitState, Notice, Resolution, SpawnError,
    console_echo, initialize, resolve,
};
use casalog_runtime::SpawnOutcome;
use tracing::warn;

use crate::bootstrap::CliContext;

/// What the startup sequence did, for callers and tests.
#[derive(Debug)]
pub struct StartupReport {
    pub resolution: Resolution,
    /// Viewer spawn outcome, if deployment was attempted and succeeded.
    pub viewer: Option<SpawnOutcome>,
    /// Final sink state; always [`InitState::Ready`] on `Ok`.
    pub state: InitState,
}

/// Run the full startup sequence.
///
/// Control flows linearly: resolver, then (conditionally) the viewer
/// launcher, then the sink initializer. A viewer spawn failure is reported
/// and swallowed; only [`InitError::PostFailure`] propagates, and the caller
/// must exit non-zero on it.
pub fn run_startup(ctx: &mut CliContext, version: &str) -> Result<StartupReport, InitError> {
    let resolution = resolve(&mut ctx.files, &ctx.flags, ctx.cwd_writable);
    for notice in &resolution.notices {
        surface_notice(*notice);
    }

    let mut viewer = None;
    if resolution.should_deploy() {
        if let Some(logfile) = resolution.target.path() {
            match ctx.launcher.spawn(logfile) {
                Ok(outcome) => {
                    if outcome == SpawnOutcome::Unsupported {
                        println!("No logger available for this platform");
                    }
                    viewer = Some(outcome);
                }
                Err(err) => {
                    warn!(%err, "log viewer unavailable");
                    eprintln!("Warning: could not launch the log viewer: {err}");
                }
            }
        }
    }

    let params = InitParams {
        logfile: ctx.files.logfile.as_deref(),
        processor_origin: &ctx.env.processor_origin,
        console_echo: console_echo(ctx.env.log_to_console, &ctx.flags),
        version,
    };
    let state = initialize(ctx.sink.as_ref(), &params)?;

    Ok(StartupReport {
        resolution,
        viewer,
        state,
    })
}

/// Relaunch the viewer on the current log file.
///
/// Used when the viewer died or was closed. Falls back to the `casa.log`
/// default (written back into the config store) when no file is configured.
/// Flags are not consulted; this is an explicit user request.
pub fn run_respawn(ctx: &mut CliContext) -> Result<SpawnOutcome, SpawnError> {
    let logfile = match ctx.files.logfile.as_deref().map(str::trim) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => {
            ctx.files.logfile = Some(DEFAULT_LOGFILE.to_string());
            PathBuf::from(DEFAULT_LOGFILE)
        }
    };
    ctx.launcher.spawn(&logfile)
}

fn surface_notice(notice: Notice) {
    match notice {
        Notice::NologDeprecated => println!("{}", notice.user_message()),
        Notice::CwdNotWritable => {
            eprintln!();
            eprintln!("{}", "*".repeat(80));
            eprintln!("{}", notice.user_message());
            eprintln!("{}", "*".repeat(80));
        }
    }
}
