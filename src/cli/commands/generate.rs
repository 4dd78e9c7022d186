//! cli::commands::generate
//!
//! Draft a conventional commit message for the staged diff and optionally
//! apply it.
//!
//! # Flow
//!
//! 1. Load configuration and resolve the selected provider and language
//! 2. Take the diff from the argument, or capture the staged diff
//! 3. Ask the provider for a message ([`crate::engine::generate_message`])
//! 4. Commit the staged changes unless `--commit false`
//!
//! The command is synchronous at the dispatch boundary and runs its async
//! provider call on a fresh tokio runtime.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::cli::command::{Argument, Command, CommandInput, OptionSpec};
use crate::cli::outcome::Outcome;
use crate::config::Config;
use crate::engine::{self, GenerateRequest};
use crate::git::Git;
use crate::provider::{valid_provider_names, ProviderFactory};
use crate::ui::MarkupText;

/// Generate (and by default apply) a commit message.
pub struct Generate {
    config_path: PathBuf,
    factory: Box<dyn ProviderFactory>,
    /// Working directory override; defaults to the process cwd.
    cwd: Option<PathBuf>,
    arguments: Vec<Argument>,
    options: Vec<OptionSpec>,
}

impl Generate {
    /// Create the command with its provider factory.
    pub fn new(config_path: PathBuf, factory: Box<dyn ProviderFactory>) -> Self {
        Self {
            config_path,
            factory,
            cwd: None,
            arguments: vec![Argument::new(
                "diff",
                "Diff to describe; defaults to the staged changes",
            )],
            options: vec![
                OptionSpec::new("provider", 'p', "AI provider", "openai")
                    .allowed(valid_provider_names()),
                OptionSpec::new("language", 'l', "Message language", "en_US")
                    .allowed(["en_US", "pt_BR", "es_ES"]),
                OptionSpec::new(
                    "model",
                    'm',
                    "Model override (defaults to the provider's configured default)",
                    "",
                ),
                OptionSpec::new("commit", 'c', "Apply the generated message", "true")
                    .allowed(["true", "false"]),
            ],
        }
    }

    /// Override the working directory used for git operations.
    pub fn with_cwd(mut self, cwd: PathBuf) -> Self {
        self.cwd = Some(cwd);
        self
    }

    fn working_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().context("failed to resolve working directory"),
        }
    }

    async fn execute_async(&self, input: CommandInput) -> Result<Outcome> {
        let config = Config::load(&self.config_path)?;

        let provider_id = input
            .option("provider")
            .context("provider option not resolved")?;
        let language_id = input
            .option("language")
            .context("language option not resolved")?;

        let provider_config = config
            .provider(provider_id)
            .with_context(|| format!("provider '{}' is not configured", provider_id))?;
        let language = config
            .language(language_id)
            .with_context(|| format!("language '{}' is not configured", language_id))?;

        let model = match input.option("model") {
            Some("") | None => provider_config.default_model.as_str(),
            Some(model) => {
                if !provider_config.models.iter().any(|m| m.as_str() == model) {
                    bail!(
                        "model '{}' is not configured for provider '{}' (configured: {})",
                        model,
                        provider_id,
                        provider_config.models.join(", ")
                    );
                }
                model
            }
        };

        let apply = input.option("commit") == Some("true");

        // An explicit diff argument takes precedence; git is only touched
        // when capturing the diff or applying the commit.
        let diff = match input.argument("diff") {
            Some(diff) if !diff.is_empty() => diff.to_string(),
            _ => Git::open(&self.working_dir()?)?.staged_diff()?,
        };

        let provider = self.factory.create(provider_id, &provider_config.api_key)?;
        let message = engine::generate_message(
            provider.as_ref(),
            GenerateRequest {
                model,
                language: &language.name,
                diff: &diff,
            },
        )
        .await?;

        if apply {
            Git::open(&self.working_dir()?)?.commit_staged(&message)?;
            Ok(Outcome::success(MarkupText::from_lines([
                "<info>commit generated and applied successfully</info>".to_string(),
                format!("<comment>{}</comment>", message),
            ])))
        } else {
            Ok(Outcome::success(MarkupText::from_lines([
                "<info>generated commit message</info>".to_string(),
                format!("<comment>{}</comment>", message),
            ])))
        }
    }
}

impl Command for Generate {
    fn name(&self) -> &str {
        "generate"
    }

    fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    fn execute(&self, input: CommandInput) -> Result<Outcome> {
        // Use tokio runtime to run async code
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(self.execute_async(input))
    }
}
