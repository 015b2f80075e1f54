//! # roomservice-install
//!
//! One-shot installer for the prebuilt `roomservice` binary.
//!
//! ## Overview
//!
//! The installer maps the host's OS and architecture to a release target
//! triple, downloads `{repository}/releases/download/v{version}/{target}.tar.gz`,
//! unpacks it into a temp directory and moves `bin/{target}/roomservice`
//! into `/usr/local/bin`.
//!
//! Only the platforms listed in [`platform::SUPPORTED_PLATFORMS`] are
//! installed; anything else fails before the network is touched.
//!
//! ## Usage
//!
//! ```bash
//! roomservice-install
//! ```
//!
//! Package name, version and repository come from `release.toml`, which is
//! compiled into the binary.

/// Downloading and unpacking release archives
pub mod acquirer;

/// Command-line interface definitions
pub mod cli;

/// Release metadata compiled into the installer
pub mod config;

/// Error types
pub mod error;

/// Orchestration of a single install run
pub mod installer;

/// Supported platforms and host resolution
pub mod platform;

/// Release asset URLs and extraction layout
pub mod release;

/// Archive extraction and file placement
pub mod utils;
