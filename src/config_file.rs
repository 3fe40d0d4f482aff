use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::page::{default_cards, Card};

pub(crate) const DEFAULT_BIND: &str = "0.0.0.0";
pub(crate) const DEFAULT_PORT: u16 = 8090;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ServerConfig {
    #[serde(default = "default_bind")]
    pub(crate) bind: String,
    #[serde(default = "default_port")]
    pub(crate) port: u16,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FileConfig {
    #[serde(default)]
    pub(crate) server: ServerConfig,
    /// Dashboard cards for the `cards` command; defaults to the built-in
    /// sensor set when the file omits them.
    #[serde(default = "default_cards")]
    pub(crate) cards: Vec<Card>,
}

impl Default for FileConfig {
    fn default() -> Self {
        FileConfig {
            server: ServerConfig::default(),
            cards: default_cards(),
        }
    }
}

pub(crate) fn config_file_path(workspace: &Path) -> PathBuf {
    workspace.join("stationbot.json")
}

/// Missing or unreadable config falls back to defaults; the bot must come up
/// regardless of the file's state.
pub(crate) fn load_file_config(path: &Path) -> FileConfig {
    match std::fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
        Err(_) => FileConfig::default(),
    }
}

pub(crate) fn save_file_config(
    path: &Path,
    config: &FileConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &json)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
