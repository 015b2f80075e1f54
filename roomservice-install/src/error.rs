use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error(
        "Platform with type \"{os}\" and architecture \"{arch}\" is not supported by {name}.\nYour system must be one of the following:\n\n{}",
        .supported.join(", ")
    )]
    UnsupportedPlatform {
        os: String,
        arch: String,
        name: String,
        supported: Vec<String>,
    },

    #[error("Failed to acquire {url}: {message}")]
    Acquisition { url: String, message: String },

    #[error("Failed to move {} to {}: {source}", .from.display(), .to.display())]
    Placement {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid release metadata: {0}")]
    Config(#[from] toml::de::Error),
}

impl InstallError {
    pub(crate) fn acquisition(url: &str, message: impl std::fmt::Display) -> Self {
        InstallError::Acquisition {
            url: url.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InstallError>;
