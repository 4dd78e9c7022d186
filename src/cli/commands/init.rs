//! cli::commands::init
//!
//! Seed the configuration file.

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::command::{Argument, Command, CommandInput, OptionSpec};
use crate::cli::outcome::{ExitCode, Outcome};
use crate::config::{default_config, Config};
use crate::ui::MarkupText;

/// Create the configuration file with seeded defaults.
pub struct Init {
    config_path: PathBuf,
    options: Vec<OptionSpec>,
}

impl Init {
    /// Create the command targeting the given config path.
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            config_path,
            options: vec![OptionSpec::new(
                "force",
                'f',
                "Overwrite an existing configuration file",
                "false",
            )
            .allowed(["true", "false"])],
        }
    }
}

impl Command for Init {
    fn name(&self) -> &str {
        "init"
    }

    fn arguments(&self) -> &[Argument] {
        &[]
    }

    fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    fn execute(&self, input: CommandInput) -> Result<Outcome> {
        let force = input.option("force") == Some("true");

        if self.config_path.exists() && !force {
            // Expected outcome, not an error-channel failure.
            return Ok(Outcome::new(
                ExitCode::Error,
                MarkupText::new(format!(
                    "<info>configuration file already exists at {} (use --force to overwrite)</info>",
                    self.config_path.display()
                )),
            ));
        }

        let config: Config = default_config();
        config.write(&self.config_path)?;

        Ok(Outcome::success(MarkupText::from_lines([
            "<success>configuration file created successfully</success>".to_string(),
            format!("<comment>{}</comment>", self.config_path.display()),
        ])))
    }
}
