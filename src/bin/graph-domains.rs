//! graph-domains CLI: normalize entities and build structure graphs from JSON.
//!
//! Usage:
//!   graph-domains relations [--domain structure|knowledge]
//!   graph-domains normalize --input entity.json
//!   graph-domains spine --input document.json [--config assembly.yaml]

use clap::{Parser, Subcommand};
use graph_domains::domains::REGISTRIES;
use graph_domains::{
    AssembledGraph, AssemblyConfig, Document, DomainEntity, GraphError, GraphNode, GraphResult,
    ProvenanceRecord, RelationRegistry, Segment, SpineBuilder,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "graph-domains",
    version,
    about = "Normalize domain entities into a canonical property graph"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the relation tags of one or all domains
    Relations {
        /// Domain name (e.g. "structure", "knowledge")
        #[arg(long)]
        domain: Option<String>,
    },
    /// Normalize a single entity into a node
    Normalize {
        /// Path to a JSON file with "entity" (tagged by "kind") and "provenance"
        #[arg(long)]
        input: PathBuf,
    },
    /// Build a document's structural spine
    Spine {
        /// Path to a JSON file with "document", "segments" and "provenance"
        #[arg(long)]
        input: PathBuf,
        /// Path to an assembly config (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Input file for `spine`
#[derive(Deserialize)]
struct SpineInput {
    document: Document,
    #[serde(default)]
    segments: Vec<Segment>,
    #[serde(default)]
    provenance: Vec<ProvenanceRecord>,
}

/// Input file for `normalize`
#[derive(Deserialize)]
struct EntityInput {
    entity: DomainEntity,
    #[serde(default)]
    provenance: Vec<ProvenanceRecord>,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> GraphResult<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn share(records: Vec<ProvenanceRecord>) -> GraphResult<Vec<Arc<ProvenanceRecord>>> {
    records
        .into_iter()
        .map(|r| r.validate().map(|_| Arc::new(r)))
        .collect()
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> GraphResult<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

fn cmd_relations(domain: Option<&str>, pretty: bool) -> GraphResult<()> {
    let registries: Vec<RelationRegistry> = match domain {
        Some(name) => match RelationRegistry::by_domain(name) {
            Some(registry) => vec![registry],
            None => {
                return Err(GraphError::validation(
                    "RelationRegistry",
                    format!("unknown domain '{}'", name),
                ))
            }
        },
        None => REGISTRIES.to_vec(),
    };
    print_json(&registries, pretty)
}

fn normalize_entity(input: EntityInput) -> GraphResult<GraphNode> {
    let EntityInput { entity, provenance } = input;
    let node = entity.to_graph_node(&share(provenance)?)?;
    tracing::info!(label = node.label(), id = %node.id(), "entity normalized");
    Ok(node)
}

fn assemble_spine(input: SpineInput, config: AssemblyConfig) -> GraphResult<AssembledGraph> {
    let SpineInput {
        document,
        segments,
        provenance,
    } = input;

    let spine = SpineBuilder::with_config(config).build(&document, &segments, &share(provenance)?)?;
    tracing::info!(
        nodes = spine.graph.node_count(),
        edges = spine.graph.edge_count(),
        "spine assembled"
    );
    Ok(spine.graph)
}

fn cmd_normalize(input: &Path, pretty: bool) -> GraphResult<()> {
    let node = normalize_entity(read_json(input)?)?;
    print_json(&node, pretty)
}

fn cmd_spine(input: &Path, config: Option<&Path>, pretty: bool) -> GraphResult<()> {
    let config = match config {
        Some(path) => AssemblyConfig::load(path)?,
        None => AssemblyConfig::default(),
    };
    let graph = assemble_spine(read_json(input)?, config)?;
    print_json(&graph, pretty)
}

fn main() {
    let cli = Cli::parse();

    let fallback = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Relations { domain } => cmd_relations(domain.as_deref(), cli.pretty),
        Commands::Normalize { input } => cmd_normalize(input, cli.pretty),
        Commands::Spine { input, config } => cmd_spine(input, config.as_deref(), cli.pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
