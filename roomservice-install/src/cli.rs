use clap::Parser;

/// Install the prebuilt roomservice binary for this platform.
///
/// The release version and download location are fixed when this installer
/// is built; there is nothing to configure at runtime.
#[derive(Parser, Debug, Clone, Default)]
#[clap(name = "roomservice-install", version, about, long_about = None)]
pub struct Args {
    /// Enable verbose output
    #[clap(long, short)]
    pub verbose: bool,
}

impl Args {
    /// Log filter used when RUST_LOG is not set
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
