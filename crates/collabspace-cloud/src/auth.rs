use serde::{Deserialize, Serialize};

use collabspace_core::constants::paths;

/// Stored credentials (persisted to ~/.config/collabspace/credentials.toml).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoredCredentials {
    pub email: Option<String>,
    /// Session token issued after OTP confirmation.
    pub session_token: Option<String>,
}

impl StoredCredentials {
    pub fn load() -> Self {
        let path = credentials_path();
        if let Ok(content) = std::fs::read_to_string(&path) {
            toml::from_str(&content).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = credentials_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_token
            .as_ref()
            .map(|t| !t.is_empty())
            .unwrap_or(false)
    }
}

fn credentials_path() -> std::path::PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(paths::CONFIG_DIR)
        .join(paths::CREDENTIALS_FILE)
}

/// Live session with the backend after a confirmed sign-in.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub email: String,
    pub token: String,
}

impl AuthSession {
    /// Persist this session so the next launch skips the login screen.
    pub fn remember(&self) -> anyhow::Result<()> {
        StoredCredentials {
            email: Some(self.email.clone()),
            session_token: Some(self.token.clone()),
        }
        .save()
    }
}
