use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::content::SYSTEM_INSTRUCTION;
use crate::provider::Provider;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Environment variables checked for the hosted API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
    pub system_instruction_path: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            provider: Some(Provider::Gemini.as_str().to_string()),
            ..Self::default()
        }
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_json::from_str(&config_content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(path, config_content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("portfolio").join("config.json"))
    }

    /// Unknown provider names fall back to the default rather than failing startup.
    pub fn provider(&self) -> Provider {
        match self.provider.as_deref().map(str::parse::<Provider>) {
            Some(Ok(provider)) => provider,
            Some(Err(e)) => {
                tracing::warn!("{e}; using {}", Provider::default());
                Provider::default()
            }
            None => Provider::default(),
        }
    }

    pub fn temperature(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// API key from the environment first, then the config file.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(*name))
            .chain(self.api_key.clone())
            .find(|key| !key.trim().is_empty())
    }

    /// Where the API key would come from, for display
    pub fn api_key_source(&self) -> Option<&'static str> {
        API_KEY_VARS
            .iter()
            .copied()
            .find(|name| std::env::var(name).map(|v| !v.trim().is_empty()).unwrap_or(false))
            .or_else(|| self.api_key.as_ref().map(|_| "config"))
    }

    pub fn system_instruction(&self) -> Result<String> {
        match &self.system_instruction_path {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("reading system instruction {}", path.display())),
            None => Ok(SYSTEM_INSTRUCTION.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config.provider(), Provider::Gemini);
        assert_eq!(config.temperature(), DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio").join("config.json");

        let config = Config {
            provider: Some("ollama".to_string()),
            model: Some("gemma3:latest".to_string()),
            temperature: Some(0.2),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.provider(), Provider::Ollama);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_unknown_provider_falls_back() {
        let config = Config {
            provider: Some("carrier-pigeon".to_string()),
            ..Config::default()
        };
        assert_eq!(config.provider(), Provider::Gemini);
    }

    #[test]
    fn test_api_key_precedence() {
        let config = Config {
            api_key: Some("from-config".to_string()),
            ..Config::default()
        };

        let env: HashMap<&str, &str> =
            [("GEMINI_API_KEY", "gemini"), ("API_KEY", "generic")].into();
        let key = config.resolve_api_key_with(|name| env.get(name).map(|v| v.to_string()));
        assert_eq!(key.as_deref(), Some("gemini"));

        let env: HashMap<&str, &str> = [("GEMINI_API_KEY", ""), ("API_KEY", "generic")].into();
        let key = config.resolve_api_key_with(|name| env.get(name).map(|v| v.to_string()));
        assert_eq!(key.as_deref(), Some("generic"));

        let key = config.resolve_api_key_with(|_| None);
        assert_eq!(key.as_deref(), Some("from-config"));

        let key = Config::default().resolve_api_key_with(|_| None);
        assert_eq!(key, None);
    }

    #[test]
    fn test_system_instruction_override() {
        assert_eq!(Config::default().system_instruction().unwrap(), SYSTEM_INSTRUCTION);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bio.txt");
        fs::write(&path, "You answer questions about Ada.").unwrap();

        let config = Config {
            system_instruction_path: Some(path),
            ..Config::default()
        };
        assert_eq!(
            config.system_instruction().unwrap(),
            "You answer questions about Ada."
        );
    }
}
