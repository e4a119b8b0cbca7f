use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser, Subcommand};
use findex_core::config::Config;
use findex_core::storage::RedbDocumentStore;

mod detect;
mod index;
mod list;
mod normalize;
mod remove;
mod search;

#[derive(Parser)]
#[command(name = "findex")]
#[command(about = "Search a local document index with Boolean and vector space models")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, global = true, help = "Path to the index database")]
    pub db: Option<PathBuf>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Search indexed documents")]
    Search {
        #[arg(help = "Search query")]
        query: String,

        #[arg(long, help = "Retrieval model: BM, EBM or VM (default from config)")]
        model: Option<String>,

        #[arg(long, help = "Maximum results to return")]
        limit: Option<usize>,
    },

    #[command(about = "List all indexed documents")]
    List,

    #[command(about = "Index a file, or every matching file in a directory")]
    Index {
        #[arg(help = "File or directory to index")]
        path: PathBuf,

        #[arg(long, help = "Document language (en or ar); detected when omitted")]
        language: Option<String>,
    },

    #[command(about = "Remove a document from the index")]
    Remove {
        #[arg(help = "Filename of the indexed document")]
        filename: String,
    },

    #[command(about = "Detect the language of a text")]
    Detect {
        #[arg(help = "Text to inspect")]
        text: String,
    },

    #[command(about = "Show the normalized terms of a text")]
    Normalize {
        #[arg(help = "Text to normalize")]
        text: String,

        #[arg(long, default_value = "en", help = "Pipeline language (en or ar)")]
        language: String,
    },
}

/// Settings shared by every command.
pub struct Context {
    pub config: Config,
    pub json: bool,
}

impl Context {
    fn load(db: Option<PathBuf>, json: bool) -> Result<Self> {
        let mut config = Config::load()?;
        if let Some(db) = db {
            config.db_path = db;
        }
        Ok(Self { config, json })
    }

    pub fn open_store(&self) -> Result<Arc<RedbDocumentStore>> {
        let path = self.config.db_path();
        let store = RedbDocumentStore::open(&path)
            .with_context(|| format!("opening index at {}", path.display()))?;
        Ok(Arc::new(store))
    }
}

pub fn run(cli: Cli) -> Result<ExitCode> {
    let ctx = Context::load(cli.db, cli.json)?;

    match cli.command {
        Commands::Search {
            query,
            model,
            limit,
        } => search::run(&ctx, &query, model.as_deref(), limit),
        Commands::List => list::run(&ctx),
        Commands::Index { path, language } => index::run(&ctx, &path, language.as_deref()),
        Commands::Remove { filename } => remove::run(&ctx, &filename),
        Commands::Detect { text } => detect::run(&ctx, &text),
        Commands::Normalize { text, language } => normalize::run(&ctx, &text, &language),
    }
}

/// `text` on one line, cut to `max` characters.
fn preview(text: &str, max: usize) -> String {
    let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if line.chars().count() > max {
        let cut: String = line.chars().take(max).collect();
        format!("{cut}...")
    } else {
        line
    }
}
