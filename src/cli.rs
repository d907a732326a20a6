use clap::{Parser, Subcommand, ValueEnum};
use nasaview_core::MediaType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nasaview")]
#[command(author, version, about = "Search and browse the NASA Image and Video Library")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the library by keyword
    Search {
        /// Search terms
        query: String,

        /// Restrict results to these media types (repeatable; none means all)
        #[arg(short = 't', long = "type", value_enum)]
        media_types: Vec<MediaTypeArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one asset by its NASA id
    Asset {
        /// The asset's nasa_id
        id: String,

        /// Expand the metadata panel
        #[arg(long)]
        metadata: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a route such as /Nasa or /asset/<id>
    Open {
        /// Route path
        path: String,
    },

    /// Start an interactive browsing session
    Browse,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        #[arg(value_name = "CONFIG")]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MediaTypeArg {
    Image,
    Video,
    Audio,
}

impl From<MediaTypeArg> for MediaType {
    fn from(arg: MediaTypeArg) -> Self {
        match arg {
            MediaTypeArg::Image => MediaType::Image,
            MediaTypeArg::Video => MediaType::Video,
            MediaTypeArg::Audio => MediaType::Audio,
        }
    }
}
