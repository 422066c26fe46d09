use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "textvec", about = "Text embedding ingestion and nearest-neighbor retrieval")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Embed texts and append them to the store
    Ingest {
        /// Texts to embed, one per argument
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Rank stored items against a query
    Search {
        query: String,
        #[arg(long, default_value = "3")]
        k: usize,
        /// Distance metric (euclidean, cosine); omitted = report both
        #[arg(long)]
        metric: Option<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Download a model into the local cache
    Download {
        /// Model identifier, e.g. owner/name
        model: Option<String>,
    },
}
