//! cli::commands::version

use anyhow::Result;

use crate::cli::command::{Argument, Command, CommandInput, OptionSpec};
use crate::cli::outcome::Outcome;
use crate::ui::MarkupText;

/// Print the CLI version.
pub struct Version {
    version: String,
}

impl Version {
    /// Create the command with the version string to report.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl Command for Version {
    fn name(&self) -> &str {
        "version"
    }

    fn arguments(&self) -> &[Argument] {
        &[]
    }

    fn options(&self) -> &[OptionSpec] {
        &[]
    }

    fn execute(&self, _input: CommandInput) -> Result<Outcome> {
        Ok(Outcome::success(MarkupText::new(format!(
            "<success>{}</success>",
            self.version
        ))))
    }
}
