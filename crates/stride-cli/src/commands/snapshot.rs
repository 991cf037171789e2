use std::error::Error;
use std::path::Path;

use chrono::Local;
use clap::Subcommand;
use serde::Serialize;
use stride_core::Snapshot;
use tracing::info;

/// Contents report printed by `snapshot validate`.
#[derive(Serialize)]
struct SnapshotReport {
    path: String,
    goals: usize,
    tasks: usize,
    completions: usize,
}

#[derive(Subcommand)]
pub enum SnapshotAction {
    /// Write a starter snapshot to the resolved location
    Init {
        /// Overwrite an existing snapshot file
        #[arg(long)]
        force: bool,
    },
    /// Load the snapshot and report its contents
    Validate,
}

pub fn run(action: SnapshotAction, snapshot_flag: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let path = super::snapshot_path(snapshot_flag)?;

    match action {
        SnapshotAction::Init { force } => {
            if path.exists() && !force {
                return Err(format!(
                    "snapshot already exists at {} (use --force to overwrite)",
                    path.display()
                )
                .into());
            }
            let snapshot = Snapshot::starter(Local::now().date_naive());
            snapshot.save(&path)?;
            info!(path = %path.display(), "snapshot written");
            println!("Snapshot written to {}", path.display());
        }
        SnapshotAction::Validate => {
            let snapshot = Snapshot::load(&path)?;
            let report = SnapshotReport {
                path: path.display().to_string(),
                goals: snapshot.goals.len(),
                tasks: snapshot.tasks.len(),
                completions: snapshot.completions.len(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
