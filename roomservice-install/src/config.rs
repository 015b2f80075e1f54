use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;

/// Release manifest embedded at build time
const EMBEDDED_RELEASE: &str = include_str!("../release.toml");

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub install: InstallConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PackageConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default = "default_repository")]
    pub repository: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            repository: default_repository(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstallConfig {
    #[serde(default = "default_bin_dir")]
    pub bin_dir: PathBuf,

    #[serde(default = "default_temp_subdir")]
    pub temp_subdir: String,

    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            bin_dir: default_bin_dir(),
            temp_subdir: default_temp_subdir(),
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

fn default_name() -> String {
    "roomservice".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_repository() -> String {
    env!("CARGO_PKG_REPOSITORY").to_string()
}

fn default_bin_dir() -> PathBuf {
    PathBuf::from("/usr/local/bin")
}

fn default_temp_subdir() -> String {
    "roomservice".to_string()
}

fn default_settle_delay_ms() -> u64 {
    3000
}

impl Config {
    /// Load the release manifest compiled into this binary
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_RELEASE)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Process-wide temp directory plus the fixed subfolder
    pub fn temp_install_dir(&self) -> PathBuf {
        std::env::temp_dir().join(&self.install.temp_subdir)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.install.settle_delay_ms)
    }
}
