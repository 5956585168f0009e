mod cli;
mod error;
mod ui;

use clap::Parser;
use cli::Cli;
use error::Result;
use std::process;
use version::{Bump, VersionStore};

fn execute(cli: &Cli) -> Result<Bump> {
    let version_type = cli.version_type();

    if cli.verbose {
        ui::info_message(&format!(
            "Version file: {} ({:?} increment)",
            cli.file.display(),
            version_type
        ));
    }

    let mut store = VersionStore::open(&cli.file)?;
    let bump = store.bump(version_type)?;

    if cli.verbose {
        ui::info_message(&format!("Previous version: {}", bump.previous));
    }

    Ok(bump)
}

fn main() {
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(bump) => ui::success_message(&format!("{} -> {}", bump.previous, bump.current)),
        Err(err) => {
            ui::error_message(&err.user_message());
            process::exit(1);
        }
    }
}
