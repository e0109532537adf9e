//! Hintscan CLI - inspect contributed-class hints in a module graph dump

use clap::{Parser, Subcommand};
use hintscan::config;
use hintscan::{ClassScanner, FqName, ModuleGraph};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "hintscan")]
#[command(version = "0.0.1")]
#[command(about = "Contributed-class discovery over compiled module graphs")]
#[command(long_about = r#"
Hintscan reads a JSON dump of a compiled module graph and recovers the
hint markers a prior generation pass left behind, resolving them into
the classes contributed to a scope.

Example usage:
  hintscan scan --graph graph.json --package hint.contributes \
      --annotation app.ContributesTo --scope app.AppScope
  hintscan stats --graph graph.json
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a module graph dump for contributed classes
    Scan {
        /// Path to the JSON module graph dump
        #[arg(short, long)]
        graph: PathBuf,

        /// Root namespace the generator emits hints under
        #[arg(short, long)]
        package: Option<FqName>,

        /// Generating annotation to re-check on each result
        #[arg(short, long)]
        annotation: Option<FqName>,

        /// Target scope identity
        #[arg(short, long)]
        scope: Option<FqName>,

        /// Path to a hintscan.toml supplying defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Return intermediate-representation symbols instead
        #[arg(long)]
        ir: bool,
    },

    /// Show statistics about a module graph dump
    Stats {
        /// Path to the JSON module graph dump
        #[arg(short, long)]
        graph: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Scan {
            graph,
            package,
            annotation,
            scope,
            config,
            ir,
        } => {
            let file_config = config::load_config(config.as_deref())?.unwrap_or_default();
            let package = package
                .or(file_config.package)
                .ok_or_else(|| anyhow::anyhow!("no --package given and none in config"))?;
            let annotation = annotation
                .or(file_config.annotation)
                .ok_or_else(|| anyhow::anyhow!("no --annotation given and none in config"))?;
            let scope = scope
                .or(file_config.scope)
                .ok_or_else(|| anyhow::anyhow!("no --scope given and none in config"))?;

            tracing::info!("Scanning {:?} for contributions to {}", graph, scope);
            let module_graph = ModuleGraph::load(&graph)?;
            let scanner = ClassScanner::new();

            let mut found = 0usize;
            if ir {
                for class in
                    scanner.find_contributed_ir_classes(&module_graph, &package, &annotation, &scope)
                {
                    println!("- {}", class?.fq_name);
                    found += 1;
                }
            } else {
                for class in
                    scanner.find_contributed_classes(&module_graph, &package, &annotation, &scope)
                {
                    println!("- {}", class.fq_name);
                    found += 1;
                }
            }

            if found == 0 {
                println!("∅ No contributed classes for scope {}.", scope);
            } else {
                println!("✅ {} contributed class(es) for scope {}.", found, scope);
            }
        }

        Commands::Stats { graph } => {
            let module_graph = ModuleGraph::load(&graph)?;

            println!("📊 Hintscan Statistics ({:?})", graph);
            println!("------------------------------------");
            println!("{}", module_graph.stats());
        }
    }

    Ok(())
}
