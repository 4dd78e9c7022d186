//! provider::traits
//!
//! Provider trait definition for language-model backends.
//!
//! # Design
//!
//! The `Provider` trait is async because asking a model involves network
//! I/O. All methods return `Result` to handle API errors gracefully.
//! Implementations must be `Send + Sync` to allow use across async tasks.
//!
//! # Example
//!
//! ```ignore
//! use comet::provider::{AskRequest, Provider};
//!
//! async fn draft(provider: &dyn Provider) -> Result<String, ProviderError> {
//!     let response = provider
//!         .ask(AskRequest {
//!             model: "gpt-4.1".to_string(),
//!             instructions: "Write a commit message.".to_string(),
//!             input: "diff --git ...".to_string(),
//!         })
//!         .await?;
//!     Ok(response.text)
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

/// Errors from provider operations.
///
/// These error types map to common failure modes when talking to hosted
/// model APIs.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// No API key is configured for the provider.
    #[error("no API key configured (edit the config file created by `comet init`)")]
    AuthRequired,

    /// Authentication failed (invalid or expired key).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The named provider is not supported.
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}

/// A request for generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskRequest {
    /// Model identifier.
    pub model: String,
    /// System-level instructions for the model.
    pub instructions: String,
    /// The input text the model should work from.
    pub input: String,
}

/// Generated text returned from the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskResponse {
    /// Provider-reported completion status (e.g. "completed").
    pub status: String,
    /// The generated text.
    pub text: String,
}

/// The Provider trait for language-model backends.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the provider name (e.g., "openai").
    fn name(&self) -> &'static str;

    /// Ask the model for generated text.
    ///
    /// # Errors
    ///
    /// - `AuthFailed` if the key is invalid or lacks permissions
    /// - `RateLimited` when the provider throttles the request
    /// - `ApiError` for other non-success responses
    /// - `NetworkError` if the request never reaches the API
    async fn ask(&self, request: AskRequest) -> Result<AskResponse, ProviderError>;
}
