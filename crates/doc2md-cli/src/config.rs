//! CLI configuration file support.
//!
//! `.doc2md.toml` is looked up in the home directory first, then the working
//! directory; the working-directory file wins field by field, and flags on
//! the command line override both.

use serde::Deserialize;
use std::path::Path;

const CONFIG_FILE: &str = ".doc2md.toml";

/// Default credentials sourced from a config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Default API key for hosted converters.
    pub api_key: Option<String>,
    /// Default base URL override for hosted converters.
    pub base_url: Option<String>,
}

impl CliConfig {
    /// Load the merged configuration (home, then working directory).
    #[must_use = "returns the loaded configuration"]
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(home) = dirs::home_dir() {
            if let Some(found) = Self::load_from_file(&home.join(CONFIG_FILE)) {
                config = found;
            }
        }
        if let Some(found) = Self::load_from_file(Path::new(CONFIG_FILE)) {
            config.merge(found);
        }
        config
    }

    fn merge(&mut self, other: Self) {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
    }

    fn load_from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Ignoring malformed config {}: {e}", path.display());
                None
            }
        }
    }
}
