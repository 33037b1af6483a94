use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use friendgraph::analysis::{cliques, connectors, shortest_chain};
use friendgraph::export::{export, ExportData, ExportFormat, QueryReport};
use friendgraph::graph::FriendGraph;
use friendgraph::parser;

#[derive(Parser)]
#[command(name = "friendgraph")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Friendship graph analyzer: shortest chains, school cliques and connectors", long_about = None)]
struct Cli {
    /// Friends file to analyze
    file: PathBuf,

    /// Output format (text, json, csv, markdown)
    #[arg(short, long, default_value = "text", global = true)]
    format: ExportFormat,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest chain of friends between two people
    Chain {
        /// Person the chain starts from
        from: String,
        /// Person the chain ends at
        to: String,
    },
    /// Groups of students at a school who know each other through schoolmates
    Cliques {
        /// School name (case-insensitive)
        school: String,
    },
    /// People whose removal would split the network
    Connectors,
    /// Show graph statistics
    Stats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let file = parser::parse_file(&cli.file)
        .with_context(|| format!("failed to parse {}", cli.file.display()))?;
    parser::validate(&file).with_context(|| format!("invalid friends file {}", cli.file.display()))?;
    let graph = FriendGraph::from_friends_file(&file).context("failed to build friend graph")?;

    tracing::info!(
        people = graph.len(),
        friendships = graph.friendship_count(),
        "loaded {}",
        cli.file.display()
    );

    let report = match &cli.command {
        Commands::Chain { from, to } => QueryReport::Chain {
            chain: shortest_chain(&graph, from, to)?,
            from: from.clone(),
            to: to.clone(),
        },
        Commands::Cliques { school } => QueryReport::Cliques {
            cliques: cliques(&graph, school)?,
            school: school.clone(),
        },
        Commands::Connectors => QueryReport::Connectors {
            connectors: connectors(&graph),
        },
        Commands::Stats => QueryReport::Summary,
    };
    tracing::info!(query = report.query_name(), outcome = %report.outcome(), "query finished");

    let data = ExportData::new(&graph, report);
    export(cli.format, &data, &mut io::stdout().lock()).context("failed to write report")?;

    Ok(())
}
