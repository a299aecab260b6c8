//! Entry point loading and checking the front-end configuration.
use std::env;
use std::path::Path;

use dotenvy::dotenv;
use validator::Validate;

use gcsfront::CONFIG_FILE;
use gcsfront::domain::Storage;
use gcsfront::services::config::ConfigLoader;

fn main() {
    // Load environment variables from `.env` in local development.
    dotenv().ok();
    // Initialize logger with default level INFO if not provided.
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Config file location (defaults to `./config.json`).
    let path = env::var("GCSFRONT_CONFIG").unwrap_or_else(|_| CONFIG_FILE.into());

    let loader = ConfigLoader::new(Storage::default());
    let config = match loader.load_from(Path::new(&path)) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading config from {}: {}", path, err);
            std::process::exit(1);
        }
    };

    if let Err(err) = config.validate() {
        log::error!("Config {} violates serving contract: {}", path, err);
        std::process::exit(1);
    }

    log::info!(
        "config ok: webroot={} index={:?} hook={} gcs={} ({} buckets, {} redirects)",
        config.webroot,
        config.index,
        config.hook_path,
        config.gcs_base,
        config.buckets.len(),
        config.redirects.len()
    );
}
