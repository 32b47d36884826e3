mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{facet_lines, search_lines, seed_summary, CatalogKind, FacetKind};

#[derive(Debug, Parser)]
#[command(name = "concourse-cli")]
#[command(about = "Concourse catalog command line interface")]
struct Cli {
    /// Path to the YAML seed document.
    #[arg(long, env = "CONCOURSE_SEED_PATH", default_value = "./config/catalog.yaml")]
    seed: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load and validate the seed file, printing entry counts.
    Validate,
    /// Offline substring search over the seed data.
    Search {
        term: String,
        #[arg(long, value_enum)]
        kind: Option<CatalogKind>,
    },
    /// Print the distinct facet values of one catalog.
    Facets {
        #[arg(long, value_enum, default_value = "restaurants")]
        kind: FacetKind,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let seed = concourse_core::load_seed(&cli.seed)?;

    match cli.command {
        Commands::Validate => println!("{}", seed_summary(&seed)),
        Commands::Search { term, kind } => {
            let lines = search_lines(&seed, &term, kind);
            if lines.is_empty() {
                println!("no matches for '{term}'");
            } else {
                for line in lines {
                    println!("{line}");
                }
            }
        }
        Commands::Facets { kind } => {
            for line in facet_lines(&seed, kind) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
