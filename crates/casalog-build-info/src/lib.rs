//! Build/version metadata shared across casalog frontends.

/// The `SemVer` version of the build (from Cargo).
pub const SEMVER: &str = env!("CARGO_PKG_VERSION");

/// The git SHA emitted by the build script.
///
/// This is expected to be a 7-character hex string when available; otherwise it
/// is set to `"unknown"`.
pub const GIT_SHA_SHORT: &str = env!("CASALOG_GIT_SHA");

/// True if the git SHA looks like a short hex hash.
pub const HAS_GIT_SHA: bool = is_short_hex(GIT_SHA_SHORT);

/// The nice version string used by CLI `--version` output and the startup
/// post to the log sink.
///
/// Examples:
/// - `0.1.0 (a1b2c3d)`
/// - `0.1.0` (when git data is unavailable)
pub const LONG_VERSION_WITH_SHA: &str =
    concat!(env!("CARGO_PKG_VERSION"), " (", env!("CASALOG_GIT_SHA"), ")");

pub const LONG_VERSION: &str = if HAS_GIT_SHA {
    LONG_VERSION_WITH_SHA
} else {
    SEMVER
};

const fn is_short_hex(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 {
        return false;
    }

    let mut i = 0;
    while i < 7 {
        let c = bytes[i];
        let is_digit = c >= b'0' && c <= b'9';
        let is_lower = c >= b'a' && c <= b'f';
        let is_upper = c >= b'A' && c <= b'F';
        if !(is_digit || is_lower || is_upper) {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semver_is_nonempty() {
        assert!(!SEMVER.is_empty());
    }

    #[test]
    fn short_hex_detection() {
        assert!(is_short_hex("a1b2c3d"));
        assert!(!is_short_hex("unknown"));
        assert!(!is_short_hex("a1b2c3"));
        assert!(!is_short_hex("a1b2c3dd"));
    }

    #[test]
    fn long_version_starts_with_semver() {
        assert!(LONG_VERSION.starts_with(SEMVER));
    }
}
