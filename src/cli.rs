use clap::Parser;
use std::path::PathBuf;
use version::{DEFAULT_VERSION_FILE, VersionType};

#[derive(Parser, Debug)]
#[command(name = "bump")]
#[command(
    author,
    version,
    about = "Increment the version stored in a VERSION file"
)]
pub struct Cli {
    /// Increment the Minor version in the VERSION file. e.g. 1.2.3 => 1.3.0
    #[clap(long = "increment-minor", default_value_t = false)]
    pub increment_minor: bool,

    /// Version file to update
    #[clap(short, long, default_value = DEFAULT_VERSION_FILE)]
    pub file: PathBuf,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn version_type(&self) -> VersionType {
        VersionType::from_minor_flag(self.increment_minor)
    }
}
