use std::path::PathBuf;

use crate::demo::{run_demo, run_search, DemoArgs, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use gigboard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Gigboard",
    about = "Run and exercise the Gigboard job discovery service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Query the discovery engine directly
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// Run an end-to-end CLI demo covering search, presets, and reveal
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// Filter and sort a catalog, printing the revealed windows
    Search(SearchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed the in-memory catalog from a CSV export instead of the samples
    #[arg(long)]
    pub(crate) seed_csv: Option<PathBuf>,
    /// Treat the session as an authenticated caller (enables per-job
    /// application-status annotation)
    #[arg(long)]
    pub(crate) authenticated: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Jobs {
            command: JobsCommand::Search(args),
        } => run_search(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
