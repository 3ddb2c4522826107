//! Host platform identification for viewer dispatch.
//!
//! The platform is detected once at startup and carried as an enumerated
//! capability; spawn strategies match on the variant instead of comparing
//! OS strings at call sites.

/// Platforms with a known viewer launch mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    /// No known viewer launch mechanism; spawning is a no-op.
    Unsupported,
}

impl Platform {
    /// Detect the platform of the running process.
    #[must_use]
    pub fn current() -> Self {
        Self::from_os_id(std::env::consts::OS)
    }

    /// Map an OS identifier to a platform capability.
    ///
    /// Accepts both the Rust identifier (`macos`) and the uname-style one
    /// (`darwin`).
    #[must_use]
    pub fn from_os_id(os: &str) -> Self {
        match os {
            "macos" | "darwin" => Self::MacOs,
            "linux" => Self::Linux,
            _ => Self::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_os_ids_map_to_capabilities() {
        assert_eq!(Platform::from_os_id("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os_id("darwin"), Platform::MacOs);
        assert_eq!(Platform::from_os_id("linux"), Platform::Linux);
    }

    #[test]
    fn unknown_os_ids_are_unsupported() {
        assert_eq!(Platform::from_os_id("windows"), Platform::Unsupported);
        assert_eq!(Platform::from_os_id("freebsd"), Platform::Unsupported);
        assert_eq!(Platform::from_os_id(""), Platform::Unsupported);
    }

    #[test]
    fn current_matches_compile_target() {
        #[cfg(target_os = "linux")]
        assert_eq!(Platform::current(), Platform::Linux);
        #[cfg(target_os = "macos")]
        assert_eq!(Platform::current(), Platform::MacOs);
    }
}
