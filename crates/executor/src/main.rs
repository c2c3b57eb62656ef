pub mod config;
pub mod csv_loader;
pub mod error;
pub mod render;
pub mod searcher;
pub mod snapshot;
pub mod sources;
pub mod types;

use clap::{ArgAction, Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use common::types::PathSummary;
use crate::config::Config;
use error::Error;
use rate_path_core::{AllPathsEnumerator, EnumerationLimits, MaxProductSolver, PathStrategy};
use searcher::{RouteSearcher, SearchReport};
use sources::load_graph;
use types::{Algorithm, LoadedGraph, SourceKind};

#[derive(Parser)]
#[command(name = "rate-path")]
#[command(
    version,
    about = "Best conversion routes through a graph of exchange rates",
    long_about = None
)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "RATE_PATH_CONFIG")]
    config: Option<PathBuf>,

    /// Where the graph comes from (overrides data.source)
    #[arg(long, value_enum)]
    source: Option<SourceKind>,

    /// Input file for csv and snapshot sources (overrides data.path)
    #[arg(long)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the most valuable route from one node to one or more targets
    Search {
        /// Start node
        #[arg(long)]
        from: String,

        /// Target node(s)
        #[arg(long, required = true, num_args = 1..)]
        to: Vec<String>,

        /// Search algorithm (overrides search.algorithm)
        #[arg(short, long, value_enum)]
        algorithm: Option<Algorithm>,

        /// Stop enumerating after this many paths (all-paths only)
        #[arg(long)]
        max_paths: Option<usize>,

        /// Longest path to enumerate, in edges (all-paths only)
        #[arg(long)]
        max_depth: Option<usize>,

        /// Also print every enumerated path with its value (all-paths only)
        #[arg(long)]
        all: bool,

        /// Write a DOT rendering of the graph with the best route highlighted
        #[arg(long)]
        dot: Option<PathBuf>,
    },

    /// Print every edge weight as JSON
    Quotes,

    /// Print every node with its outgoing neighbours
    Nodes,

    /// Print the currency descriptions shipped with a snapshot
    Currencies,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over the verbosity flags.
fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match verbose {
        0 if quiet => "error",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(source) = cli.source {
        config.data.source = source;
    }
    if cli.input.is_some() {
        config.data.path = cli.input;
    }

    let loaded = load_graph(config.data.source, config.data.path.clone())?;

    match cli.command {
        Commands::Search {
            from,
            to,
            algorithm,
            max_paths,
            max_depth,
            all,
            dot,
        } => {
            if let Some(algorithm) = algorithm {
                config.search.algorithm = algorithm;
            }
            if max_paths.is_some() {
                config.search.max_paths = max_paths;
            }
            if max_depth.is_some() {
                config.search.max_depth = max_depth;
            }
            if all {
                config.output.show_all_paths = true;
            }
            if dot.is_some() {
                config.output.dot_path = dot;
            }
            run_search(&config, &loaded, &from, &to)
        }
        Commands::Quotes => {
            let quotes: BTreeMap<&str, f64> = loaded.context.weights().iter().collect();
            println!("{}", serde_json::to_string_pretty(&quotes)?);
            Ok(())
        }
        Commands::Nodes => {
            for node in loaded.context.pool().iter() {
                println!("{} -> [{}]", node.name(), node.children().join(", "));
            }
            Ok(())
        }
        Commands::Currencies => {
            if loaded.currencies.is_empty() {
                info!("The current data source carries no currency descriptions.");
            }
            println!("{}", serde_json::to_string_pretty(&loaded.currencies)?);
            Ok(())
        }
    }
}

/// A report plus, when listing was requested, every enumerated route.
type SearchOutcome = Result<(SearchReport, Option<Vec<PathSummary>>), Error>;

fn run_search(
    config: &Config,
    loaded: &LoadedGraph,
    from: &str,
    targets: &[String],
) -> Result<(), Error> {
    let context = &loaded.context;
    let enumerator = AllPathsEnumerator::with_limits(EnumerationLimits {
        max_paths: config.search.max_paths,
        max_depth: config.search.max_depth,
    });

    let outcomes: Vec<SearchOutcome> = match config.search.algorithm {
        Algorithm::MaxProduct => without_routes(
            RouteSearcher::new(MaxProductSolver).search_many(context, from, targets),
        ),
        Algorithm::AllPaths if config.output.show_all_paths => RouteSearcher::new(enumerator)
            .search_many_listing(context, from, targets)
            .into_iter()
            .map(|outcome| outcome.map(|(report, routes)| (report, Some(routes))))
            .collect(),
        Algorithm::AllPaths => {
            without_routes(RouteSearcher::new(enumerator).search_many(context, from, targets))
        }
    };

    let mut last_best: Option<PathSummary> = None;
    let mut failures = 0usize;

    for (to, outcome) in targets.iter().zip(outcomes) {
        match outcome {
            Ok((report, routes)) => {
                if let Some(routes) = routes {
                    print_routes(from, to, &routes);
                }
                print_report(&report);
                if report.best.is_some() {
                    last_best = report.best;
                }
            }
            Err(e) => {
                println!("{} -> {}: {}", from, to, e);
                failures += 1;
            }
        }
    }

    if let Some(dot_path) = &config.output.dot_path {
        let dot = render::to_dot(context, last_best.as_ref());
        fs::write(dot_path, dot)?;
        info!("Graph rendering written to {}.", dot_path.display());
    }

    info!(
        "{} of {} queries answered with {}.",
        targets.len() - failures,
        targets.len(),
        strategy_name(config.search.algorithm, &enumerator)
    );
    Ok(())
}

fn without_routes(reports: Vec<Result<SearchReport, Error>>) -> Vec<SearchOutcome> {
    reports
        .into_iter()
        .map(|report| report.map(|report| (report, None)))
        .collect()
}

fn strategy_name(algorithm: Algorithm, enumerator: &AllPathsEnumerator) -> &'static str {
    match algorithm {
        Algorithm::MaxProduct => MaxProductSolver.name(),
        Algorithm::AllPaths => enumerator.name(),
    }
}

fn print_routes(from: &str, to: &str, routes: &[PathSummary]) {
    println!("all paths {} -> {} ({}):", from, to, routes.len());
    for route in routes {
        println!("  {} = {}", route.display_route(), route.value);
    }
}

fn print_report(report: &SearchReport) {
    match &report.best {
        Some(best) => {
            println!("{} -> {} [{}]", report.from, report.to, report.strategy);
            println!("  max product: {}", best.value);
            println!("  path: {}", best.display_route());
        }
        None => println!("{} -> {}: no path", report.from, report.to),
    }
}
