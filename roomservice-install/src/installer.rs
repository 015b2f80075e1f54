use std::fmt;
use std::path::{Path, PathBuf};

use crate::acquirer::BinaryAcquirer;
use crate::config::Config;
use crate::error::{InstallError, Result};
use crate::platform::{self, HostPlatform};
use crate::release::InstallRequest;
use crate::utils;

/// Progress of a single run. Each stage either advances or ends in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStage {
    Start,
    Resolved,
    Acquired,
    Settled,
    Installed,
    Failed,
}

impl fmt::Display for InstallStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstallStage::Start => "start",
            InstallStage::Resolved => "resolved",
            InstallStage::Acquired => "acquired",
            InstallStage::Settled => "settled",
            InstallStage::Installed => "installed",
            InstallStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// The executable at its final location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledBinary {
    pub path: PathBuf,
}

pub struct Installer<A> {
    config: Config,
    acquirer: A,
    host: HostPlatform,
    temp_dir: PathBuf,
}

impl<A: BinaryAcquirer> Installer<A> {
    pub fn new(config: Config, acquirer: A) -> Self {
        let temp_dir = config.temp_install_dir();
        Self {
            config,
            acquirer,
            host: HostPlatform::current(),
            temp_dir,
        }
    }

    /// Install as if running on `host`
    pub fn with_host(mut self, host: HostPlatform) -> Self {
        self.host = host;
        self
    }

    /// Unpack into `temp_dir` instead of the process temp directory
    pub fn with_temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = temp_dir.into();
        self
    }

    pub fn destination(&self) -> PathBuf {
        self.config.install.bin_dir.join(&self.config.package.name)
    }

    pub async fn run(&self) -> Result<InstalledBinary> {
        let mut stage = InstallStage::Start;

        match self.advance(&mut stage).await {
            Ok(installed) => Ok(installed),
            Err(e) => {
                tracing::error!("Installation failed after stage '{}': {}", stage, e);
                stage = InstallStage::Failed;
                tracing::debug!("Stage: {}", stage);
                Err(e)
            }
        }
    }

    async fn advance(&self, stage: &mut InstallStage) -> Result<InstalledBinary> {
        let package = &self.config.package;
        tracing::debug!("Stage: {}", stage);

        let target = platform::resolve(&self.host, &package.name)?;
        transition(stage, InstallStage::Resolved);
        tracing::info!("Resolved target {} for {}/{}", target, self.host.os, self.host.arch);

        let request = InstallRequest::new(
            &package.repository,
            &package.version,
            target,
            &self.temp_dir,
            &package.name,
        );

        tracing::info!("Installing {} v{}", package.name, package.version);
        self.acquirer
            .install(&request.url, &request.install_dir)
            .await?;
        transition(stage, InstallStage::Acquired);

        // Unpacked files may not be visible yet when acquisition returns.
        let delay = self.config.settle_delay();
        tracing::debug!("Waiting {:?} for extracted files to settle", delay);
        tokio::time::sleep(delay).await;
        transition(stage, InstallStage::Settled);

        let installed = self.place(&request.extracted_path())?;
        transition(stage, InstallStage::Installed);

        tracing::info!("Installed {}", installed.path.display());
        Ok(installed)
    }

    fn place(&self, source: &Path) -> Result<InstalledBinary> {
        let dest = self.destination();
        tracing::info!("Moving {} to {}", source.display(), dest.display());

        utils::move_file(source, &dest).map_err(|e| InstallError::Placement {
            from: source.to_path_buf(),
            to: dest.clone(),
            source: e,
        })?;

        Ok(InstalledBinary { path: dest })
    }
}

fn transition(stage: &mut InstallStage, next: InstallStage) {
    *stage = next;
    tracing::debug!("Stage: {}", next);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopAcquirer;

    impl BinaryAcquirer for NoopAcquirer {
        async fn install(&self, _url: &str, _install_dir: &Path) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_destination_uses_bin_dir_and_name() {
        let installer = Installer::new(Config::default(), NoopAcquirer);
        assert_eq!(
            installer.destination(),
            PathBuf::from("/usr/local/bin/roomservice")
        );
    }

    #[test]
    fn test_default_temp_dir() {
        let installer = Installer::new(Config::default(), NoopAcquirer);
        assert_eq!(installer.temp_dir, std::env::temp_dir().join("roomservice"));
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(InstallStage::Start.to_string(), "start");
        assert_eq!(InstallStage::Settled.to_string(), "settled");
        assert_eq!(InstallStage::Failed.to_string(), "failed");
    }
}
