//! cli::commands
//!
//! Builtin command set.
//!
//! # Architecture
//!
//! Each command declares its schema once at construction and keeps
//! `execute` thin, delegating to [`crate::engine`], [`crate::git`], and
//! [`crate::provider`]. The `generate` command is async under the hood and
//! bridges into a fresh tokio runtime, keeping the dispatch contract
//! synchronous.

mod generate;
mod init;
mod version;

pub use generate::Generate;
pub use init::Init;
pub use version::Version;

use std::path::PathBuf;

use crate::provider::DefaultProviderFactory;

use super::command::Command;

/// The builtin command set, wired for production.
pub fn builtin(config_path: PathBuf) -> Vec<Box<dyn Command>> {
    vec![
        Box::new(Init::new(config_path.clone())),
        Box::new(Generate::new(
            config_path,
            Box::new(DefaultProviderFactory::new()),
        )),
        Box::new(Version::new(env!("CARGO_PKG_VERSION"))),
    ]
}
