//! CLI Adapter.

mod list;
mod new;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "routegen")]
#[command(version)]
#[command(
    about = "Scaffold reverse-proxy route hooks, routers, and gateway URI config",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate request/response hooks and a router for a service
    #[clap(visible_alias = "n")]
    New(new::NewArgs),
    /// Show gateway and microservices URIs in the URI config
    #[clap(visible_alias = "ls")]
    List,
}

/// Entry point for the CLI.
pub fn run() {
    crate::app::logging::init_logging();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::New(args) => new::run_new(args),
        Commands::List => list::run_list(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
