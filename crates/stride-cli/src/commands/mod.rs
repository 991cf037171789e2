//! CLI subcommand implementations.

pub mod config;
pub mod snapshot;
pub mod stats;
pub mod task;

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::Shell;
use stride_core::{Config, Snapshot};
use tracing::debug;

/// Resolve the snapshot path: explicit flag, then config, then default.
pub fn snapshot_path(flag: Option<&Path>) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    let config = Config::load_or_default();
    Ok(config.snapshot_path()?)
}

/// Load the snapshot the analytics commands operate on.
pub fn load_snapshot(flag: Option<&Path>) -> Result<Snapshot, Box<dyn Error>> {
    let path = snapshot_path(flag)?;
    debug!(path = %path.display(), "loading snapshot");
    let snapshot = Snapshot::load(&path)?;
    debug!(
        goals = snapshot.goals.len(),
        tasks = snapshot.tasks.len(),
        completions = snapshot.completions.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

/// Print a shell completion script to stdout.
pub fn completions(shell: Shell) -> Result<(), Box<dyn Error>> {
    let mut cmd = crate::Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
