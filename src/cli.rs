//! Command line interface.
//!
//! `wnjgraph serve` runs the HTTP service; `wnjgraph query` builds one graph
//! and prints it, which is handy for checking a database without a browser.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use crate::config::schema::WnjGraphConfig;
use crate::config::load_config;
use crate::error::Result;
use crate::graph::build_synonym_graph;
use crate::lexicon::{SqliteLexicon, SqliteProvider};
use crate::observability::init_logging;
use crate::service::{normalize_word, run_server, NO_WORD_MESSAGE};

/// Exit code for a query without a usable word.
pub const EXIT_USAGE: i32 = 2;

/// wnjgraph — Japanese WordNet synonym graphs
#[derive(Parser, Debug)]
#[command(name = "wnjgraph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Synonym graphs from the Japanese WordNet database")]
pub struct Cli {
    /// Config file (defaults to ./.wnjgraph.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the graph API over HTTP
    Serve(ServeArgs),
    /// Build the graph for one word and print it as JSON
    Query(QueryArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to wnjpn.db
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:5000
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Do not send CORS headers
    #[arg(long)]
    pub no_cors: bool,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Word to look up (trimmed and lowercased)
    pub word: String,

    /// Path to wnjpn.db
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Resolve config from files and env, then apply CLI flags.
pub fn resolve_config(cli: &Cli) -> Result<WnjGraphConfig> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = load_config(cli.config.as_deref(), Some(&cwd))?;

    match &cli.command {
        Command::Serve(args) => {
            if let Some(db) = &args.db {
                config.database.path = db.clone();
            }
            if let Some(bind) = args.bind {
                config.server.bind = bind;
            }
            if args.no_cors {
                config.server.cors = false;
            }
        }
        Command::Query(args) => {
            if let Some(db) = &args.db {
                config.database.path = db.clone();
            }
        }
    }

    if cli.verbose {
        config.logging.filter = "wnjgraph=debug".to_string();
    }
    Ok(config)
}

/// Run the parsed command. Returns the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    let config = resolve_config(&cli)?;
    init_logging(&config.logging.filter);

    match cli.command {
        Command::Serve(_) => {
            serve(&config)?;
            Ok(0)
        }
        Command::Query(args) => {
            let Some(word) = normalize_word(&args.word) else {
                eprintln!("{NO_WORD_MESSAGE}");
                return Ok(EXIT_USAGE);
            };
            let json = query_json(&config.database.path, &word, args.pretty)?;
            println!("{json}");
            Ok(0)
        }
    }
}

fn serve(config: &WnjGraphConfig) -> Result<()> {
    // Fail fast on a bad path instead of on the first request.
    SqliteLexicon::open(&config.database.path)?;

    let provider = Arc::new(SqliteProvider::new(config.database.path.clone()));
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_server(provider, config.server.bind, config.server.cors))
}

/// Build the graph for an already-normalized word and render it.
pub fn query_json(db: &Path, word: &str, pretty: bool) -> Result<String> {
    let lexicon = SqliteLexicon::open(db)?;
    let graph = build_synonym_graph(&lexicon, word)?;
    let json = if pretty {
        serde_json::to_string_pretty(&graph)?
    } else {
        serde_json::to_string(&graph)?
    };
    Ok(json)
}
