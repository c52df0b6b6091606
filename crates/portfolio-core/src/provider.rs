use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::ai::{gemini, ollama, GeminiClient, OllamaClient, SharedClient};
use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    Gemini,
    Ollama,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::Ollama => "ollama",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Gemini => gemini::DEFAULT_MODEL,
            Provider::Ollama => ollama::DEFAULT_MODEL,
        }
    }

    /// Build the completion client for this provider from resolved config.
    pub fn client(&self, config: &Config) -> SharedClient {
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| self.default_model().to_string());

        match self {
            Provider::Gemini => {
                let mut client = GeminiClient::new(config.resolve_api_key(), &model);
                if let Some(base_url) = &config.base_url {
                    client = client.with_base_url(base_url);
                }
                Arc::new(client)
            }
            Provider::Ollama => {
                let base_url = config.base_url.as_deref().unwrap_or(ollama::DEFAULT_BASE_URL);
                Arc::new(OllamaClient::new(base_url, &model))
            }
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(Provider::Gemini),
            "ollama" => Ok(Provider::Ollama),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider() {
        assert_eq!("Gemini".parse::<Provider>(), Ok(Provider::Gemini));
        assert_eq!(" ollama ".parse::<Provider>(), Ok(Provider::Ollama));
        assert!("claude".parse::<Provider>().is_err());
    }

    #[test]
    fn test_client_uses_default_model() {
        let config = Config::default();
        let client = Provider::Gemini.client(&config);
        assert_eq!(client.name(), "gemini");
        assert_eq!(client.model(), gemini::DEFAULT_MODEL);
    }

    #[test]
    fn test_client_honours_model_override() {
        let config = Config {
            provider: Some("ollama".to_string()),
            model: Some("gemma3:latest".to_string()),
            ..Config::default()
        };
        let client = Provider::Ollama.client(&config);
        assert_eq!(client.name(), "ollama");
        assert_eq!(client.model(), "gemma3:latest");
    }
}
