use std::path::{Path, PathBuf};

/// Download URL of the release asset for `target`.
///
/// `version` is the exact published version, without the leading `v`.
pub fn build_url(repository: &str, version: &str, target: &str) -> String {
    format!("{repository}/releases/download/v{version}/{target}.tar.gz")
}

/// Everything the acquisition and placement steps need for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub url: String,
    pub install_dir: PathBuf,
    pub executable: String,
    pub target: String,
}

impl InstallRequest {
    pub fn new(
        repository: &str,
        version: &str,
        target: &str,
        install_dir: &Path,
        executable: &str,
    ) -> Self {
        Self {
            url: build_url(repository, version, target),
            install_dir: install_dir.to_path_buf(),
            executable: executable.to_string(),
            target: target.to_string(),
        }
    }

    /// Where the archive layout puts the executable once unpacked
    pub fn extracted_path(&self) -> PathBuf {
        self.install_dir
            .join("bin")
            .join(&self.target)
            .join(&self.executable)
    }
}
