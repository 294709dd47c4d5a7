use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{defaults, endpoints, paths};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub completion: CompletionSettings,
    pub editor: EditorSettings,
    pub backend: BackendSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionSettings {
    pub enabled: bool,
    pub endpoint: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    pub theme: String,
    pub font_size: f32,
    pub tab_size: u32,
    pub show_line_numbers: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            completion: CompletionSettings {
                enabled: true,
                endpoint: endpoints::COMPLETION_ENDPOINT.to_string(),
                request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            },
            editor: EditorSettings {
                theme: defaults::THEME.to_string(),
                font_size: defaults::FONT_SIZE,
                tab_size: defaults::TAB_SIZE,
                show_line_numbers: true,
            },
            backend: BackendSettings {
                base_url: endpoints::BACKEND_BASE_URL.to_string(),
            },
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(paths::CONFIG_DIR)
            .join(paths::CONFIG_FILE)
    }

    pub fn load() -> Self {
        let config_path = Self::config_path();
        if config_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&config_path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), crate::error::SpaceError> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::SpaceError::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
