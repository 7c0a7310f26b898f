//! modgraph CLI
//!
//! Reconstructs the module dependency graph of a Python source tree and
//! writes it as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Whole tree under the root
//! modgraph --root ~/src/scrapy
//!
//! # One package, written to reconstruction-scrapy.json
//! modgraph --root ~/src/scrapy --package scrapy
//!
//! # From a YAML file, with flags overriding its values
//! modgraph --config modgraph.yaml --pretty -v
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use modgraph_core::config::ReconstructionConfig;
use modgraph_core::features::parsing::ImportScope;
use modgraph_core::{write_graph, ModgraphError, ReconstructionDriver};

#[derive(Parser)]
#[command(name = "modgraph")]
#[command(about = "Reconstruct the module dependency graph of a Python source tree", long_about = None)]
struct Cli {
    /// Namespace root (dotted names map to files under it)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Package under the root to enumerate (repeatable; default: whole root)
    #[arg(short, long = "package")]
    packages: Vec<String>,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also follow imports nested in functions, `try` and `if` blocks
    #[arg(long)]
    nested_imports: bool,

    /// Skip McCabe complexity (every module gets an empty list)
    #[arg(long)]
    no_complexity: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("modgraph_core=info,modgraph=info")),
        1 => EnvFilter::new("modgraph_core=debug,modgraph=debug"),
        _ => EnvFilter::new("modgraph_core=trace,modgraph=trace"),
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn build_config(cli: &Cli) -> Result<ReconstructionConfig, ModgraphError> {
    let mut config = match (&cli.config, &cli.root) {
        (Some(path), _) => ReconstructionConfig::from_yaml(path)?,
        (None, Some(root)) => ReconstructionConfig::new(root),
        (None, None) => ReconstructionConfig::new("."),
    };

    if let Some(root) = &cli.root {
        config.root = root.clone();
    }
    if !cli.packages.is_empty() {
        config.packages = cli.packages.clone();
    }
    if let Some(output) = &cli.output {
        config.output = Some(output.clone());
    }
    if cli.nested_imports {
        config.import_scope = ImportScope::Nested;
    }
    if cli.no_complexity {
        config.complexity = false;
    }
    if cli.pretty {
        config.pretty = true;
    }

    Ok(config)
}

fn run(cli: &Cli) -> Result<(), ModgraphError> {
    let config = build_config(cli)?;
    let output = config.output_path();

    let graph = ReconstructionDriver::new(&config)?.run()?;
    write_graph(&graph, &output, config.pretty)?;

    info!(
        "wrote {} modules and {} edges to {}",
        graph.node_count(),
        graph.edge_count(),
        output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("modgraph: {}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
