use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "docsearch-tui")]
#[command(about = "Terminal documentation browser with instant search")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse a site map (the built-in one unless a path is given)
    Run {
        /// JSON page tree to index instead of the configured or built-in one
        #[arg(long)]
        site_map: Option<PathBuf>,
    },
    /// Browse the built-in standards catalog with simulated backend latency
    ///
    /// Titles and descriptions are searched. Categories such as "Frontend" are
    /// shown next to each result but are not matched.
    Demo,
    /// Print config path and create default file if missing
    ConfigPath,
}
