use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gemini_api_key: String,
}

impl Config {
    /// Directory: ~/.config/meeting-lens/
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("meeting-lens");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from disk, returning defaults if file doesn't exist or is invalid.
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let dir = Self::dir();
        fs::create_dir_all(&dir)?;
        let data = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(), data)?;
        Ok(())
    }

    /// Credential for the outbound call, resolved at call time. The
    /// GEMINI_API_KEY environment variable takes precedence over the stored
    /// key. May be empty; the client rejects the request in that case.
    pub fn resolve_api_key(&self) -> String {
        match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.is_empty() => key,
            _ => self.gemini_api_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env var is not contended across parallel tests.
    #[test]
    fn env_var_overrides_the_stored_key() {
        let config = Config {
            gemini_api_key: "stored".into(),
        };

        std::env::remove_var("GEMINI_API_KEY");
        assert_eq!(config.resolve_api_key(), "stored");

        std::env::set_var("GEMINI_API_KEY", "from-env");
        assert_eq!(config.resolve_api_key(), "from-env");
        std::env::remove_var("GEMINI_API_KEY");
    }
}
