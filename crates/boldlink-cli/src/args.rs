use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "boldlink")]
#[command(about = "Create, track, and search Bold short links", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Override the service base URL")]
    pub api_url: Option<String>,

    #[arg(long, global = true, help = "Data directory (default: platform data dir)")]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Request timeout in milliseconds")]
    pub timeout_ms: Option<u64>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Log each API operation to stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Shorten a long URL")]
    Shorten {
        url: String,

        #[arg(long, help = "Skip the post-creation catalog refresh")]
        no_refresh: bool,
    },

    #[command(about = "List the merged catalog of short links")]
    List {
        #[arg(long)]
        limit: Option<usize>,
    },

    #[command(about = "Search short links by long URL, short code, or short URL")]
    Search { term: String },

    #[command(about = "Record a visit to a short link and print its URL")]
    Visit { short_code: String },

    #[command(about = "Check connectivity to the shortening service")]
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}
