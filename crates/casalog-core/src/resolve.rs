//! Effective log target resolution.
//!
//! Decides, once per process startup, where log output should go and whether
//! the external viewer should be deployed. The decision layers the explicit
//! configuration, the startup flags, and a write-access check on the current
//! directory.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::{ConfigFiles, StartupFlags};

/// Default log file name, relative to the current directory.
pub const DEFAULT_LOGFILE: &str = "casa.log";

/// Where log output goes for the remainder of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// No log file is written.
    Disabled,
    /// An explicitly configured (or defaulted) path.
    Named(PathBuf),
    /// A timestamped fallback used when the configured path was blank.
    Generated(PathBuf),
}

impl LogTarget {
    /// The file path, unless logging is disabled.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Disabled => None,
            Self::Named(path) | Self::Generated(path) => Some(path),
        }
    }

    pub const fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

/// User-visible conditions surfaced during resolution.
///
/// The resolver reports these as values; presentation belongs to the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// `--nolog` was given; it still works but `--nologger` replaces it.
    NologDeprecated,
    /// The current directory is not writable, so logging was disabled.
    CwdNotWritable,
}

impl Notice {
    /// One-line message suitable for printing to the user.
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::NologDeprecated => "--nolog is deprecated, please use --nologger",
            Self::CwdNotWritable => {
                "Warning: no write permission in current directory, no log files will be written."
            }
        }
    }
}

/// Outcome of [`resolve`]: the effective target, the viewer deploy decision,
/// and any notices to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub target: LogTarget,
    pub deploy: bool,
    pub notices: Vec<Notice>,
}

impl Resolution {
    /// Whether a viewer process should actually be launched.
    ///
    /// A disabled target never gets a viewer, whatever the deploy decision.
    pub fn should_deploy(&self) -> bool {
        self.deploy && !self.target.is_disabled()
    }
}

/// Resolve the effective log target and viewer deploy decision.
///
/// Priority order:
/// 1. `--nologfile` disables the target outright.
/// 2. A configured, non-blank `files.logfile` is used as-is.
/// 3. An unset `files.logfile` defaults to `casa.log` and the default is
///    written back into `files` for later subsystems. The writeback only
///    happens when the current directory is writable; otherwise the config
///    store keeps `None` so downstream consumers see no file at all.
/// 4. An unwritable current directory overrides the target to disabled and
///    cancels viewer deployment (non-fatal, warning surfaced). An explicitly
///    configured path is left in the config store untouched.
/// 5. A configured but blank path falls back to a timestamped
///    `casapy-<YYYYMMDD>-<HHMMSS>.log` (UTC); the file is created
///    best-effort and creation failure is swallowed.
pub fn resolve(files: &mut ConfigFiles, flags: &StartupFlags, cwd_is_writable: bool) -> Resolution {
    let mut deploy = true;
    let mut notices = Vec::new();

    if flags.nolog {
        notices.push(Notice::NologDeprecated);
        deploy = false;
    }
    if flags.nologger || flags.nogui {
        deploy = false;
    }

    let mut target = if flags.nologfile {
        LogTarget::Disabled
    } else {
        match files.logfile.as_deref() {
            Some(path) if !path.trim().is_empty() => LogTarget::Named(PathBuf::from(path)),
            // Blank but present: kept a Named placeholder here so the
            // unwritable check below can still win before we generate.
            Some(_) => LogTarget::Named(PathBuf::new()),
            None => {
                // The default must not leak into the config store when the
                // unwritable check below is going to disable the target;
                // later subsystems would otherwise try to open it and fail.
                if cwd_is_writable {
                    debug!(logfile = DEFAULT_LOGFILE, "no log file configured, using default");
                    files.logfile = Some(DEFAULT_LOGFILE.to_string());
                }
                LogTarget::Named(PathBuf::from(DEFAULT_LOGFILE))
            }
        }
    };

    if !cwd_is_writable {
        notices.push(Notice::CwdNotWritable);
        deploy = false;
        target = LogTarget::Disabled;
    }

    if matches!(&target, LogTarget::Named(path) if path.as_os_str().is_empty()) {
        let name = generated_logfile_name(Utc::now());
        // Best-effort creation; a failure here is deliberately swallowed.
        let _ = OpenOptions::new().append(true).create(true).open(&name);
        target = LogTarget::Generated(PathBuf::from(name));
    }

    Resolution {
        target,
        deploy,
        notices,
    }
}

/// Timestamped fallback filename, e.g. `casapy-20260830-142501.log`.
pub fn generated_logfile_name(now: DateTime<Utc>) -> String {
    now.format("casapy-%Y%m%d-%H%M%S.log").to_string()
}

/// Check whether the current directory accepts new files.
///
/// Probes by creating and removing a scratch file; permission metadata alone
/// is unreliable across filesystems.
pub fn cwd_is_writable() -> bool {
    dir_is_writable(Path::new("."))
}

fn dir_is_writable(dir: &Path) -> bool {
    let probe = dir.join(format!(".casalog_write_test_{}", std::process::id()));
    let result = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&probe);

    match result {
        Ok(mut file) => {
            let ok = file.write_all(b"test").is_ok();
            drop(file);
            let _ = std::fs::remove_file(&probe);
            ok
        }
        Err(_) => false,
    }
}
