use std::io;
use std::process::ExitCode;

use clap::Parser;
use park_routes::Graph;
use park_routes::menu::Menu;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Find the shortest routes between the locations of a park.
#[derive(Debug, Parser)]
#[command(name = "park", version, about)]
struct Args {
    /// Log every change to the graph and every route search
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // logs go to stderr so they don't mix with the menu
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let mut graph = Graph::new();
    let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock());

    match menu.run(&mut graph) {
        Ok(()) => {
            info!(
                "Leaving the park with {} locations and {} paths",
                graph.node_count(),
                graph.edge_count()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
