use crate::core::catalog::{self, ResourceDescriptor};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Linux,
    Other(String),
}

impl OsFamily {
    /// Maps an operating system name such as `std::env::consts::OS` to a family.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "windows" => OsFamily::Windows,
            "linux" => OsFamily::Linux,
            other => OsFamily::Other(other.to_string()),
        }
    }

    pub fn detect() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    pub fn name(&self) -> &str {
        match self {
            OsFamily::Windows => "windows",
            OsFamily::Linux => "linux",
            OsFamily::Other(name) => name,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The Flash plugin for a platform, if one exists.
pub fn select_plugin(family: &OsFamily) -> Option<&'static ResourceDescriptor> {
    match family {
        OsFamily::Windows => Some(&catalog::FLASH_WINDOWS),
        OsFamily::Linux => Some(&catalog::FLASH_LINUX),
        OsFamily::Other(_) => None,
    }
}
