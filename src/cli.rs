//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::api::ImageRecord;

#[derive(Debug, Parser)]
#[command(
    name = "photo-search",
    version,
    about = "Search Unsplash photos from the terminal with infinite scrolling"
)]
pub struct Cli {
    /// Config file (default: ~/.config/photo-search/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Search for this term on startup
    #[arg(short, long, value_name = "TEXT")]
    pub query: Option<String>,

    /// API access key (overrides the environment and config file)
    #[arg(long, value_name = "KEY")]
    pub access_key: Option<String>,

    /// Print one page of results to stdout instead of opening the gallery
    #[arg(long, requires = "query")]
    pub print: bool,

    /// Page to print with --print
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
}

/// One tab-separated line per result: id, author, link.
pub fn format_result_line(record: &ImageRecord) -> String {
    format!("{}\t{}\t{}", record.id, record.user.name, record.links.html)
}
