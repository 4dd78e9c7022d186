//! config::schema
//!
//! Configuration schema types and the seeded default.
//!
//! # Validation
//!
//! Values are validated after parsing: the declared defaults must point at
//! configured entries, and each provider's default model must be one of its
//! listed models. Unknown fields are rejected so typos fail loudly instead
//! of being silently ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::provider;

/// Top-level configuration.
///
/// # Example
///
/// ```toml
/// default_provider = "openai"
/// default_language = "en_US"
///
/// [providers.openai]
/// api_key = "sk-..."
/// models = ["gpt-4.1"]
/// default_model = "gpt-4.1"
///
/// [languages.en_US]
/// name = "English (United States)"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Provider id used when none is selected.
    pub default_provider: String,

    /// Language id used when none is selected.
    pub default_language: String,

    /// Configured providers, keyed by provider id.
    pub providers: BTreeMap<String, ProviderConfig>,

    /// Configured languages, keyed by language id.
    pub languages: BTreeMap<String, LanguageConfig>,
}

/// Per-provider configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    /// API key for the provider.
    pub api_key: String,

    /// Models available for selection via `--model`.
    pub models: Vec<String>,

    /// Model used when none is selected.
    pub default_model: String,
}

/// Per-language configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LanguageConfig {
    /// Display name handed to the provider prompt.
    pub name: String,
}

impl Config {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_provider.is_empty() && !self.providers.contains_key(&self.default_provider)
        {
            return Err(ConfigError::InvalidValue(format!(
                "default_provider '{}' is not a configured provider",
                self.default_provider
            )));
        }

        if !self.default_language.is_empty() && !self.languages.contains_key(&self.default_language)
        {
            return Err(ConfigError::InvalidValue(format!(
                "default_language '{}' is not a configured language",
                self.default_language
            )));
        }

        for (id, provider_config) in &self.providers {
            let valid = provider::valid_provider_names();
            if !valid.contains(&id.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "unknown provider '{}', must be one of: {}",
                    id,
                    valid.join(", ")
                )));
            }
            provider_config.validate(id)?;
        }

        for (id, language) in &self.languages {
            if language.name.is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "language '{}' has no display name",
                    id
                )));
            }
        }

        Ok(())
    }

    /// Look up a configured provider by id.
    pub fn provider(&self, id: &str) -> Option<&ProviderConfig> {
        self.providers.get(id)
    }

    /// Look up a configured language by id.
    pub fn language(&self, id: &str) -> Option<&LanguageConfig> {
        self.languages.get(id)
    }
}

impl ProviderConfig {
    fn validate(&self, id: &str) -> Result<(), ConfigError> {
        if self.default_model.is_empty() {
            return Err(ConfigError::InvalidValue(format!(
                "provider '{}' has no default_model",
                id
            )));
        }
        if !self.models.contains(&self.default_model) {
            return Err(ConfigError::InvalidValue(format!(
                "provider '{}' default_model '{}' is not in its models list",
                id, self.default_model
            )));
        }
        Ok(())
    }
}

/// Construct the seeded default configuration.
///
/// Returns a fresh value on every call; nothing module-scoped and mutable
/// backs it. The API key is intentionally empty and must be filled in by
/// the user after `init`.
pub fn default_config() -> Config {
    let mut providers = BTreeMap::new();
    providers.insert(
        "openai".to_string(),
        ProviderConfig {
            api_key: String::new(),
            models: vec!["gpt-4.1".to_string()],
            default_model: "gpt-4.1".to_string(),
        },
    );

    let mut languages = BTreeMap::new();
    languages.insert(
        "en_US".to_string(),
        LanguageConfig {
            name: "English (United States)".to_string(),
        },
    );
    languages.insert(
        "pt_BR".to_string(),
        LanguageConfig {
            name: "Portuguese (Brazil)".to_string(),
        },
    );
    languages.insert(
        "es_ES".to_string(),
        LanguageConfig {
            name: "Spanish (Spain)".to_string(),
        },
    );

    Config {
        default_provider: "openai".to_string(),
        default_language: "en_US".to_string(),
        providers,
        languages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_default_is_valid() {
        let config = default_config();
        assert!(config.validate().is_ok());
        assert!(config.provider("openai").is_some());
        assert!(config.language("en_US").is_some());
    }

    #[test]
    fn seeded_default_is_fresh_per_call() {
        let mut first = default_config();
        first.default_language = "pt_BR".to_string();
        assert_eq!(default_config().default_language, "en_US");
    }

    #[test]
    fn roundtrip() {
        let config = default_config();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn unknown_fields_rejected() {
        let toml = r#"
            default_provider = "openai"
            surprise = true
        "#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn default_provider_must_be_configured() {
        let config = Config {
            default_provider: "openai".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_language_must_be_configured() {
        let mut config = default_config();
        config.default_language = "fr_FR".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_provider_id_rejected() {
        let mut config = default_config();
        config.providers.insert(
            "acme".to_string(),
            ProviderConfig {
                api_key: String::new(),
                models: vec!["m1".to_string()],
                default_model: "m1".to_string(),
            },
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_model_must_be_listed() {
        let mut config = default_config();
        config
            .providers
            .get_mut("openai")
            .unwrap()
            .default_model = "gpt-5".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn language_needs_display_name() {
        let mut config = default_config();
        config
            .languages
            .insert("fr_FR".to_string(), LanguageConfig::default());
        assert!(config.validate().is_err());
    }
}
