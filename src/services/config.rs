use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::CONFIG_FILE;
use crate::domain::Storage;
use crate::models::config::AppConfig;
use crate::services::{ConfigError, ConfigResult};

/// Service producing a fully-defaulted [`AppConfig`] from a JSON document.
///
/// Loading happens once at start-up, before any serving activity; the caller
/// keeps the returned value and shares it read-only with the collaborators
/// that need it.
#[derive(Clone, Debug, Default)]
pub struct ConfigLoader {
    storage: Storage,
}

impl ConfigLoader {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Read the config from [`CONFIG_FILE`] in the working directory.
    pub fn load(&self) -> ConfigResult<AppConfig> {
        self.load_from(Path::new(CONFIG_FILE))
    }

    /// Read and decode the given file, then fill fallbacks for empty fields.
    ///
    /// On failure no partial value escapes; the caller treats the error as
    /// fatal to start-up. Unknown keys in the document are ignored.
    pub fn load_from(&self, path: &Path) -> ConfigResult<AppConfig> {
        let file = File::open(path).map_err(ConfigError::Io)?;
        let mut config: AppConfig =
            serde_json::from_reader(BufReader::new(file)).map_err(ConfigError::Decode)?;
        config.apply_defaults(&self.storage);
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
