//! Runs one algorithm on a graph specification and prints the result as JSON.
//!
//! ```bash
//! # articulation points and bridges of a graph read from stdin
//! echo '{"nodes": ["A", "B", "C"], "edges": [["A", "B"], ["B", "C"]]}' | graphtrace ap
//!
//! # topological order, forcing a directed graph
//! graphtrace dag --input graph.json --directed --pretty
//! ```
//!
//! Logging goes to stderr and is configured through `RUST_LOG` (default: `warn`).

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use graphtrace::{
    analysis::{Algorithm, Analyze},
    io::{GraphSpec, GraphSpecRead},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Graph algorithms with step-by-step traces
#[derive(Parser, Debug)]
#[command(name = "graphtrace")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Algorithm to run: dfs, bfs, cycle, dag, scc, ap or ep
    algorithm: Algorithm,

    /// Graph specification in JSON (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Treat the graph as directed regardless of the input
    #[arg(short, long)]
    directed: bool,

    /// Indent the JSON output
    #[arg(short, long)]
    pretty: bool,
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging();

    let spec = match &args.input {
        Some(path) => GraphSpec::try_read_spec_file(path)
            .with_context(|| format!("failed to read graph from {}", path.display()))?,
        None => GraphSpec::try_read_spec(io::stdin().lock())
            .context("failed to read graph from stdin")?,
    };

    let directed = args.directed || spec.directed;
    let graph = spec.to_graph(directed);
    info!(algorithm = %args.algorithm, directed, "running analysis");

    let result = graph.analyze(args.algorithm);

    let mut stdout = io::stdout().lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut stdout, &result)?;
    } else {
        serde_json::to_writer(&mut stdout, &result)?;
    }
    writeln!(stdout)?;

    Ok(())
}
