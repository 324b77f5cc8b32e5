use std::path::PathBuf;

use clap::Parser;

/// Mode value that switches on raw-record persistence.
const LOG_JSON_MODE: &str = "logJSON";

#[derive(Debug, Parser)]
#[command(
    name = "skeet",
    version,
    about = "Scene metadata scraper for Teamskeet URLs (JSON on stdin, JSON on stdout)"
)]
pub struct Args {
    /// Pass `logJSON` to persist fetched raw records into the cache
    /// directory; any other value leaves persistence disabled
    pub mode: Option<String>,

    /// Cache directory for raw records
    /// (default: <install root>/scraperJSON/Teamskeet)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,
}

impl Args {
    pub fn log_json(&self) -> bool {
        self.mode.as_deref() == Some(LOG_JSON_MODE)
    }
}
