use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rentflow")]
#[command(about = "Rental property management dashboard")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.rentflow/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard GUI
    Gui,

    /// Initialize a new ~/.rentflow/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Init { force }) => {
            rentflow::config::init_command(cli.config.as_deref(), force)?;
        }
        Some(Commands::Gui) | None => {
            // Default: run the dashboard
            rentflow::gui::run_gui(cli.config)?;
        }
    }

    Ok(())
}
