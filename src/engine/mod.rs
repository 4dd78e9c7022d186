//! engine
//!
//! Message-generation orchestration.
//!
//! # Responsibilities
//!
//! - Build the instruction prompt for the selected language
//! - Ask the provider and vet the reply (completion status, emptiness)
//! - Normalize the reply into a commit-ready message
//!
//! The CLI layer stays thin: commands gather configuration and the diff,
//! then delegate here.

pub mod prompt;

use thiserror::Error;

use crate::provider::{AskRequest, Provider, ProviderError};

/// Errors from message generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The provider call failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The provider reported a non-completed status.
    #[error("provider request did not complete (status: {0})")]
    Incomplete(String),

    /// The provider returned no usable text.
    #[error("provider returned an empty message")]
    EmptyMessage,
}

/// Inputs for one generation attempt.
#[derive(Debug, Clone)]
pub struct GenerateRequest<'a> {
    /// Model identifier.
    pub model: &'a str,
    /// Human-readable language name for the prompt.
    pub language: &'a str,
    /// The diff to describe.
    pub diff: &'a str,
}

/// Ask the provider to draft a commit message for the diff.
pub async fn generate_message(
    provider: &dyn Provider,
    request: GenerateRequest<'_>,
) -> Result<String, GenerateError> {
    let response = provider
        .ask(AskRequest {
            model: request.model.to_string(),
            instructions: prompt::commit_instructions(request.language),
            input: request.diff.to_string(),
        })
        .await?;

    if !response.status.is_empty() && response.status != "completed" {
        return Err(GenerateError::Incomplete(response.status));
    }

    let message = normalize_message(&response.text);
    if message.is_empty() {
        return Err(GenerateError::EmptyMessage);
    }
    Ok(message)
}

/// Normalize a model reply into a commit-ready message.
///
/// Trims surrounding whitespace and unwraps a single fenced code block,
/// which models produce despite instructions often enough to handle here.
fn normalize_message(text: &str) -> String {
    let trimmed = text.trim();

    if let Some(inner) = trimmed.strip_prefix("```") {
        if let Some(inner) = inner.strip_suffix("```") {
            // Drop an optional language tag on the opening fence line.
            let inner = match inner.split_once('\n') {
                Some((first_line, rest)) if !first_line.contains(' ') => rest,
                _ => inner,
            };
            return inner.trim().to_string();
        }
    }

    trimmed.to_string()
}
