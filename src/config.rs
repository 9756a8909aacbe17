use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Items shown per feed page, matching the hosted table's query window.
fn default_items_per_page() -> u64 {
    10
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("muse")
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MuseConfig {
    /// Base URL of the hosted data service, e.g. `https://xyz.supabase.co`.
    pub service_url: String,
    /// The service's anon/public API key.
    pub service_key: String,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u64,
    #[serde(default)]
    pub debug_logging: bool,
}

impl Default for MuseConfig {
    fn default() -> Self {
        Self {
            service_url: String::new(),
            service_key: String::new(),
            items_per_page: default_items_per_page(),
            debug_logging: false,
        }
    }
}

impl MuseConfig {
    pub fn path() -> PathBuf {
        config_dir().join("config.json")
    }

    /// Load the config file, falling back to defaults, with the service
    /// credentials overridable from the environment.
    pub fn load() -> Self {
        let mut config: Self = std::fs::read_to_string(Self::path())
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("MUSE_SERVICE_URL") {
            if !url.trim().is_empty() {
                self.service_url = url;
            }
        }
        if let Ok(key) = std::env::var("MUSE_SERVICE_KEY") {
            if !key.trim().is_empty() {
                self.service_key = key;
            }
        }
    }

    /// Write the config back out, creating the directory if needed.
    pub fn save(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(config_dir())?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(Self::path(), json)
    }

    pub fn is_configured(&self) -> bool {
        !self.service_url.trim().is_empty() && !self.service_key.trim().is_empty()
    }
}
