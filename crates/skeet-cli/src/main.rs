use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use skeet_core::ScrapeError;
use skeet_core::api::ApiClient;
use skeet_core::cache::CacheStore;
use skeet_core::normalize::normalize;
use skeet_core::record::{RecordSource, SceneRecord};
use skeet_core::request::ScrapeRequest;

mod args;

fn main() -> Result<()> {
    let args = args::Args::parse();

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let request = ScrapeRequest::from_json(&input)?;
    let scene_id = request.scene_id()?.to_string();

    let store = CacheStore::new(args.cache_dir.clone().unwrap_or_else(default_cache_dir));

    let (raw, source) = match store.load(&scene_id)? {
        Some(raw) => {
            eprintln!("Using local JSON...");
            (raw, RecordSource::LocalCache)
        }
        None => {
            eprintln!("Asking the API...");
            let raw = ApiClient::new().fetch_scene(&scene_id).inspect_err(|err| {
                if matches!(err, ScrapeError::Network(_)) {
                    eprintln!("Check {} for more details", skeet_core::FAILURE_LOG_FILE);
                }
            })?;
            (raw, RecordSource::RemoteFetch)
        }
    };

    let record: SceneRecord = serde_json::from_value(raw.clone())?;
    let scene = normalize(&record)?;

    if args.log_json() && source == RecordSource::RemoteFetch {
        store.persist(&scene_id, &raw, request.url())?;
    }

    println!("{}", serde_json::to_string(&scene)?);
    Ok(())
}

/// Legacy cache location: one level above the binary, under a fixed
/// subfolder. `--cache-dir` overrides this entirely.
fn default_cache_dir() -> PathBuf {
    let install_root = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    install_root.join("scraperJSON").join("Teamskeet")
}
