//! WordNet graph CLI
//!
//! # Usage
//!
//! ```bash
//! # Parse and print a summary
//! cargo run --bin wn-graph -- parse english-wordnet-2024.xml
//!
//! # Dump the whole graph as JSON
//! cargo run --bin wn-graph -- parse english-wordnet-2024.xml --json --pretty > wn.json
//!
//! # Parse and persist into a SQLite file
//! cargo run --bin wn-graph --release -- load english-wordnet-2024.xml --db wn.db
//!
//! # Show the relation registry
//! cargo run --bin wn-graph -- registry
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use wordnet_ir::{parse_wordnet_file, ParserConfig, RelationRegistry, WordNetGraph};
use wordnet_storage::{GraphLoader, GraphStore, InMemoryGraphStore, LoadReport};

#[derive(Parser)]
#[command(name = "wn-graph")]
#[command(about = "WordNet LMF to typed graph - parse and load", long_about = None)]
struct Cli {
    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Parser configuration file (YAML, `version: 1`)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a lexicon and print a summary
    Parse {
        /// LMF file
        file: PathBuf,

        /// Print the whole graph as JSON instead of the summary
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(long, requires = "json")]
        pretty: bool,

        #[command(flatten)]
        flags: SenseFlags,
    },

    /// Parse a lexicon and write it into a graph store
    Load {
        /// LMF file
        file: PathBuf,

        /// SQLite database file (in-memory store when omitted)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Edge collection name
        #[arg(long, default_value = "edges")]
        edge_collection: String,

        /// Documents per write batch
        #[arg(long, default_value = "1000")]
        batch_size: usize,

        #[command(flatten)]
        flags: SenseFlags,
    },

    /// Print the relation registry as JSON
    Registry,
}

#[derive(clap::Args)]
struct SenseFlags {
    /// Do not copy the entry's writtenForm into senses
    #[arg(long)]
    no_written_form: bool,

    /// Do not copy the entry's partOfSpeech into senses
    #[arg(long)]
    no_part_of_speech: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>, flags: &SenseFlags) -> anyhow::Result<ParserConfig> {
    let mut config = match path {
        Some(path) => ParserConfig::from_yaml(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ParserConfig::default(),
    };
    if flags.no_written_form {
        config = config.written_form_in_sense(false);
    }
    if flags.no_part_of_speech {
        config = config.part_of_speech_in_sense(false);
    }
    Ok(config)
}

fn parse(file: &Path, config: ParserConfig) -> anyhow::Result<WordNetGraph> {
    let graph =
        parse_wordnet_file(file, config).with_context(|| format!("parsing {}", file.display()))?;
    Ok(graph)
}

async fn load_into<S: GraphStore>(
    store: S,
    graph: &WordNetGraph,
    edge_collection: String,
    batch_size: usize,
) -> anyhow::Result<LoadReport> {
    let loader = GraphLoader::new(store)
        .with_edge_collection(edge_collection)
        .with_batch_size(batch_size);
    let report = loader.load(graph).await?;
    Ok(report)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Parse {
            file,
            json,
            pretty,
            flags,
        } => {
            let graph = parse(&file, load_config(cli.config.as_ref(), &flags)?)?;
            if json {
                let out = if pretty {
                    graph.to_json_pretty()?
                } else {
                    graph.to_json()?
                };
                println!("{}", out);
            } else {
                for (key, value) in &graph.set_info {
                    println!("{:<22}{}", format!("{}:", key), value);
                }
                println!("{}", graph.stats());
            }
        }

        Commands::Load {
            file,
            db,
            edge_collection,
            batch_size,
            flags,
        } => {
            let graph = parse(&file, load_config(cli.config.as_ref(), &flags)?)?;

            let report = match db {
                #[cfg(feature = "sqlite")]
                Some(path) => {
                    info!(db = %path.display(), "opening SQLite store");
                    let store = wordnet_storage::SqliteGraphStore::new(&path)?;
                    load_into(store, &graph, edge_collection, batch_size).await?
                }
                #[cfg(not(feature = "sqlite"))]
                Some(_) => anyhow::bail!("built without the `sqlite` feature"),
                None => {
                    info!("no --db given, loading into an in-memory store");
                    load_into(InMemoryGraphStore::new(), &graph, edge_collection, batch_size)
                        .await?
                }
            };

            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Registry => {
            println!(
                "{}",
                serde_json::to_string_pretty(&RelationRegistry::default())?
            );
        }
    }

    Ok(())
}
