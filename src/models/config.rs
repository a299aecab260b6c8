//! Front-end server configuration decoded from `config.json`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::Storage;

/// Front-end server configuration.
///
/// Every key in the document is optional; missing keys decode to their zero
/// value and [`AppConfig::apply_defaults`] fills the documented fallbacks
/// afterwards. The value is built once at start-up and never mutated again.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// URLs the app will permanently redirect to when the request host and
    /// path match a key. Values must not end with `/` and cannot contain a
    /// query string.
    #[serde(default)]
    #[validate(custom(function = validate_redirects))]
    pub redirects: HashMap<String, String>,

    /// Mapping between hosts and the GCS buckets responses are served from.
    /// Must contain at least a `"default"` key.
    #[serde(default)]
    #[validate(custom(function = validate_buckets))]
    pub buckets: HashMap<String, String>,

    /// Default handler pattern.
    #[serde(default)]
    pub webroot: String,

    /// Dir index file name. Empty means no directory index.
    #[serde(default)]
    pub index: String,

    /// GCS object change notification hook pattern.
    #[serde(default, rename = "hook")]
    pub hook_path: String,

    /// GCS base URL.
    #[serde(default, rename = "gcs")]
    pub gcs_base: String,
}

impl AppConfig {
    /// Fills fallbacks for fields the document left empty.
    ///
    /// The steps touch disjoint fields, and a non-empty value is never
    /// overwritten. `index` intentionally keeps its empty value.
    pub fn apply_defaults(&mut self, storage: &Storage) {
        if self.webroot.is_empty() {
            self.webroot = "/".to_string();
        }
        if self.hook_path.is_empty() {
            self.hook_path = "/-/hook/gcs".to_string();
        }
        if self.gcs_base.is_empty() {
            self.gcs_base = storage.base().to_string();
        }
    }
}

fn validate_buckets(buckets: &HashMap<String, String>) -> Result<(), ValidationError> {
    if buckets.contains_key("default") {
        Ok(())
    } else {
        Err(ValidationError::new("missing_default_bucket"))
    }
}

fn validate_redirects(redirects: &HashMap<String, String>) -> Result<(), ValidationError> {
    for target in redirects.values() {
        if target.ends_with('/') {
            return Err(ValidationError::new("redirect_trailing_slash"));
        }
        if target.contains('?') {
            return Err(ValidationError::new("redirect_query_string"));
        }
    }
    Ok(())
}
