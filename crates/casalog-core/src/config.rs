//! Host-application configuration consumed by the startup sequence.
//!
//! These types mirror the sections of the host configuration store that the
//! startup sequence reads: `files` (log file path), `helpers` (external
//! tools), and the recognized startup flags. The resolver mutates
//! [`ConfigFiles`] when it picks a default, so later subsystems observe the
//! same effective path.

use serde::{Deserialize, Serialize};

/// Default viewer executable name used when none is configured.
pub const DEFAULT_LOGGER_COMMAND: &str = "casalogger";

/// The `files` section of the host configuration store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFiles {
    /// Explicit log file path, if the user configured one.
    ///
    /// `None` means unset; an empty or whitespace-only string is a distinct
    /// state and resolves to a generated timestamped filename.
    pub logfile: Option<String>,
}

/// The `helpers` section: external tools the bootstrap may launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Helpers {
    /// Viewer executable name, or the literal `console` to open the log file
    /// with the platform's default console viewer (macOS only).
    pub logger: String,
}

impl Default for Helpers {
    fn default() -> Self {
        Self {
            logger: DEFAULT_LOGGER_COMMAND.to_string(),
        }
    }
}

/// The recognized startup flags.
///
/// This subsystem consumes these five flags and defines no new flag surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupFlags {
    /// Deprecated alias for `--nologger`; also emits a deprecation notice.
    pub nolog: bool,
    /// Disable the log file entirely.
    pub nologfile: bool,
    /// Do not launch the external log viewer.
    pub nologger: bool,
    /// No GUI components at all, which implies no viewer.
    pub nogui: bool,
    /// Echo posted messages to the terminal.
    pub log2term: bool,
}

impl StartupFlags {
    /// Build the flag set from raw argument strings.
    ///
    /// Unrecognized strings are ignored; they belong to other subsystems.
    pub fn from_flag_strings<'a, I>(flags: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut out = Self::default();
        for flag in flags {
            match flag {
                "--nolog" => out.nolog = true,
                "--nologfile" => out.nologfile = true,
                "--nologger" => out.nologger = true,
                "--nogui" => out.nogui = true,
                "--log2term" => out.log2term = true,
                _ => {}
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse_recognized_strings() {
        let flags = StartupFlags::from_flag_strings(["--nolog", "--log2term"]);
        assert!(flags.nolog);
        assert!(flags.log2term);
        assert!(!flags.nologfile);
        assert!(!flags.nologger);
        assert!(!flags.nogui);
    }

    #[test]
    fn flags_ignore_unrecognized_strings() {
        let flags = StartupFlags::from_flag_strings(["--colors=NoColor", "-c", "script.py"]);
        assert_eq!(flags, StartupFlags::default());
    }

    #[test]
    fn helpers_default_to_casalogger() {
        assert_eq!(Helpers::default().logger, "casalogger");
    }
}
