//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
///
/// Points at any OpenAI-compatible chat completions endpoint. The defaults
/// target a local Ollama server.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// API key sent as the bearer token. Loaded from `COPYDESK__AI__API_KEY`
    /// or, as a fallback, the conventional `OPENAI_API_KEY` variable.
    pub api_key: Option<String>,

    /// Base URL of the chat completions endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature shared by every agent in the workflow
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyModel);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:11434/v1".to_string()
}

fn default_model() -> String {
    "qwen2.5:7b".to_string()
}

fn default_temperature() -> f32 {
    0.0
}

fn default_timeout() -> u64 {
    120
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> AiConfig {
        AiConfig {
            api_key: Some("ollama".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.model, "qwen2.5:7b");
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_has_api_key() {
        assert!(!AiConfig::default().has_api_key());
        assert!(config_with_key().has_api_key());

        let empty_key = AiConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(!empty_key.has_api_key());
    }

    #[test]
    fn test_validation_missing_key() {
        let result = AiConfig::default().validate();
        assert!(matches!(
            result,
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        ));
    }

    #[test]
    fn test_validation_invalid_base_url() {
        let config = AiConfig {
            base_url: "localhost:11434/v1".to_string(),
            ..config_with_key()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBaseUrl)
        ));
    }

    #[test]
    fn test_validation_empty_model() {
        let config = AiConfig {
            model: "  ".to_string(),
            ..config_with_key()
        };
        assert!(matches!(config.validate(), Err(ValidationError::EmptyModel)));
    }

    #[test]
    fn test_validation_temperature_range() {
        let config = AiConfig {
            temperature: 2.5,
            ..config_with_key()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTemperature)
        ));

        let config = AiConfig {
            temperature: -0.1,
            ..config_with_key()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config_with_key().validate().is_ok());
    }
}
