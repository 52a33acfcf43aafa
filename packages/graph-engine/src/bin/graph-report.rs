//! Graph Report CLI
//!
//! Builds every graph in an input file and prints shortest-path or
//! depth-first reports.
//!
//! # Usage
//!
//! ```bash
//! # All-pairs shortest paths, plus one detailed pair
//! cargo run --bin graph-report -- shortest-paths --input data31.txt --from 1 --to 3
//!
//! # Depth-first ordering with the adjacency listing
//! cargo run --bin graph-report -- dfs --input data32.txt --show-graph
//!
//! # Machine-readable output
//! cargo run --bin graph-report -- dfs --input data32.txt --json
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `warn`).

use clap::{Parser, Subcommand};
use graph_engine::{AdjacencyGraph, JsonReporter, ReportConfig, ReportSink, TextReporter, WeightedGraph};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graph-report")]
#[command(about = "Shortest-path and depth-first reports for bounded directed graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// All-pairs shortest paths over weighted graphs
    ShortestPaths {
        /// Input file (one or more weighted graphs)
        #[arg(short, long)]
        input: PathBuf,

        /// Report configuration (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Source of a detailed single-pair report
        #[arg(long, requires = "to")]
        from: Option<usize>,

        /// Destination of a detailed single-pair report
        #[arg(long, requires = "from")]
        to: Option<usize>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Depth-first ordering over adjacency graphs
    Dfs {
        /// Input file (one or more adjacency graphs)
        #[arg(short, long)]
        input: PathBuf,

        /// Report configuration (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the adjacency listing before the ordering
        #[arg(long)]
        show_graph: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ShortestPaths {
            input,
            config,
            from,
            to,
            json,
        } => {
            let config = load_config(config.as_deref())?;
            let pair = from.zip(to);
            let mut sink = make_sink(json, config.clone());
            run_shortest_paths(&input, &config, pair, sink.as_mut())?;
        }
        Commands::Dfs {
            input,
            config,
            show_graph,
            json,
        } => {
            let config = load_config(config.as_deref())?;
            let mut sink = make_sink(json, config);
            run_dfs(&input, show_graph, sink.as_mut())?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ReportConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(ReportConfig::from_yaml(path)?),
        None => Ok(ReportConfig::default()),
    }
}

fn make_sink(json: bool, config: ReportConfig) -> Box<dyn ReportSink> {
    if json {
        Box::new(JsonReporter::new(io::stdout()))
    } else {
        Box::new(TextReporter::new(io::stdout(), config))
    }
}

fn run_shortest_paths(
    input: &Path,
    config: &ReportConfig,
    pair: Option<(usize, usize)>,
    sink: &mut dyn ReportSink,
) -> Result<(), Box<dyn std::error::Error>> {
    let graphs = WeightedGraph::read_all(BufReader::new(File::open(input)?))?;
    info!("Loaded {} weighted graphs from {:?}", graphs.len(), input);

    for mut graph in graphs {
        graph.compute_all_shortest_paths();
        sink.shortest_paths(&graph.report_all(config.show_self_pairs))?;
        if let Some((from, to)) = pair {
            sink.path(&graph.report(from, to))?;
        }
    }
    Ok(())
}

fn run_dfs(
    input: &Path,
    show_graph: bool,
    sink: &mut dyn ReportSink,
) -> Result<(), Box<dyn std::error::Error>> {
    let graphs = AdjacencyGraph::read_all(BufReader::new(File::open(input)?))?;
    info!("Loaded {} adjacency graphs from {:?}", graphs.len(), input);

    for mut graph in graphs {
        if show_graph {
            sink.listing(&graph.listing())?;
        }
        sink.traversal(&graph.traversal_report())?;
    }
    Ok(())
}
