use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "stride-cli", version, about = "Stride CLI")]
struct Cli {
    /// Snapshot file to read instead of the configured location
    #[arg(long, global = true, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analytics over the current snapshot
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Task queries
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Snapshot management
    Snapshot {
        #[command(subcommand)]
        action: commands::snapshot::SnapshotAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Stats { action } => commands::stats::run(action, cli.snapshot.as_deref()),
        Commands::Task { action } => commands::task::run(action, cli.snapshot.as_deref()),
        Commands::Snapshot { action } => commands::snapshot::run(action, cli.snapshot.as_deref()),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => commands::completions(shell),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
