//! provider::factory
//!
//! Provider selection and creation.
//!
//! # Design
//!
//! Commands depend on the [`ProviderFactory`] trait instead of importing
//! concrete implementations, keeping the adapter boundary intact and making
//! the provider injectable in tests.

use super::openai::OpenAi;
use super::traits::{Provider, ProviderError};

/// Supported provider backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// OpenAI Responses API
    OpenAi,
}

impl ProviderKind {
    /// Get all available providers.
    pub fn all() -> &'static [ProviderKind] {
        &[ProviderKind::OpenAi]
    }

    /// Get the provider name as used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
        }
    }

    /// Parse a provider from a string.
    ///
    /// # Example
    ///
    /// ```
    /// use comet::provider::ProviderKind;
    ///
    /// assert_eq!(ProviderKind::parse("openai"), Some(ProviderKind::OpenAi));
    /// assert_eq!(ProviderKind::parse("unknown"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Some(ProviderKind::OpenAi),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Names of all supported providers, for config validation and option
/// allowed-value sets.
pub fn valid_provider_names() -> Vec<&'static str> {
    ProviderKind::all().iter().map(|k| k.name()).collect()
}

/// Creates provider instances from an id and credentials.
pub trait ProviderFactory: Send + Sync {
    /// Create a provider.
    ///
    /// # Errors
    ///
    /// - `UnknownProvider` if the id names no supported backend
    /// - `AuthRequired` if the API key is empty
    fn create(&self, id: &str, api_key: &str) -> Result<Box<dyn Provider>, ProviderError>;
}

/// The production factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultProviderFactory;

impl DefaultProviderFactory {
    /// Create the default factory.
    pub fn new() -> Self {
        Self
    }
}

impl ProviderFactory for DefaultProviderFactory {
    fn create(&self, id: &str, api_key: &str) -> Result<Box<dyn Provider>, ProviderError> {
        let kind = ProviderKind::parse(id)
            .ok_or_else(|| ProviderError::UnknownProvider(id.to_string()))?;
        if api_key.is_empty() {
            return Err(ProviderError::AuthRequired);
        }
        match kind {
            ProviderKind::OpenAi => Ok(Box::new(OpenAi::new(api_key))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_roundtrip() {
        for kind in ProviderKind::all() {
            assert_eq!(ProviderKind::parse(kind.name()), Some(*kind));
        }
        assert_eq!(ProviderKind::parse("OPENAI"), Some(ProviderKind::OpenAi));
        assert_eq!(ProviderKind::parse("acme"), None);
    }

    #[test]
    fn valid_names_cover_all_kinds() {
        assert_eq!(valid_provider_names(), vec!["openai"]);
    }

    #[test]
    fn factory_creates_known_provider() {
        let factory = DefaultProviderFactory::new();
        let provider = factory.create("openai", "sk-test").unwrap();
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn factory_rejects_unknown_provider() {
        let factory = DefaultProviderFactory::new();
        let err = factory.create("acme", "sk-test").err().unwrap();
        assert!(matches!(err, ProviderError::UnknownProvider(_)));
    }

    #[test]
    fn factory_rejects_empty_key() {
        let factory = DefaultProviderFactory::new();
        let err = factory.create("openai", "").err().unwrap();
        assert!(matches!(err, ProviderError::AuthRequired));
    }
}
