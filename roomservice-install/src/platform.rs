use crate::error::{InstallError, Result};

/// A supported (OS, architecture) pair and the release asset triple built for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformDescriptor {
    pub os: &'static str,
    pub arch: &'static str,
    pub target: &'static str,
}

/// Platforms with a published release asset, in lookup order.
pub const SUPPORTED_PLATFORMS: &[PlatformDescriptor] = &[
    PlatformDescriptor {
        os: "linux",
        arch: "x86_64",
        target: "x86_64-unknown-linux-musl",
    },
    PlatformDescriptor {
        os: "macos",
        arch: "x86_64",
        target: "x86_64-apple-darwin",
    },
];

/// OS and architecture as reported by the running host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlatform {
    pub os: String,
    pub arch: String,
}

impl HostPlatform {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Platform this binary is running on
    pub fn current() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }
}

/// Find the release target for `host`, or fail listing every supported target.
pub fn resolve(host: &HostPlatform, name: &str) -> Result<&'static str> {
    SUPPORTED_PLATFORMS
        .iter()
        .find(|p| p.os == host.os && p.arch == host.arch)
        .map(|p| p.target)
        .ok_or_else(|| InstallError::UnsupportedPlatform {
            os: host.os.clone(),
            arch: host.arch.clone(),
            name: name.to_string(),
            supported: SUPPORTED_PLATFORMS
                .iter()
                .map(|p| p.target.to_string())
                .collect(),
        })
}
