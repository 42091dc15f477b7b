//! Library interface version

use crate::validation::parse_version;
use crate::{PrimesError, Result};

/// Version of the calculator interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LibraryVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
    /// Pre-release tag, empty for releases
    pub prerelease: &'static str,
    /// Build metadata, may be empty
    pub build: &'static str,
}

/// The interface version implemented by this crate
pub const LIBRARY_VERSION: LibraryVersion = LibraryVersion {
    major: 1,
    minor: 2,
    micro: 0,
    prerelease: "alpha",
    build: "23",
};

impl LibraryVersion {
    /// A caller built against `major.minor` can use this library if the
    /// major versions match and ours is at least as new.
    pub const fn is_compatible_with(&self, major: u32, minor: u32) -> bool {
        self.major == major && self.minor >= minor
    }

    /// Parse `required` and check compatibility with it
    pub fn require(&self, required: &str) -> Result<()> {
        let (major, minor, _) = parse_version(required)?;
        if self.is_compatible_with(major, minor) {
            Ok(())
        } else {
            Err(PrimesError::InvalidVersion)
        }
    }
}

impl core::fmt::Display for LibraryVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}
