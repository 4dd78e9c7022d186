//! Comet - AI-assisted conventional commit messages
//!
//! Comet reads local configuration, captures the staged diff, asks a
//! language-model provider to draft a conventional commit message, and
//! optionally creates the commit.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command dispatch engine and builtin commands
//! - [`engine`] - Message generation orchestration and prompt construction
//! - [`config`] - Configuration schema, loading, and persistence
//! - [`provider`] - Abstraction over language-model providers (OpenAI v1)
//! - [`git`] - Single interface for all Git operations
//! - [`ui`] - Inline-markup text rendering
//!
//! # Dispatch contract
//!
//! Every invocation resolves to exactly one [`cli::Outcome`]: an exit code
//! plus a renderable message. Expected failures (unknown command, usage
//! violations, "config already exists") are outcomes; unexpected failures
//! (network, process, I/O) travel the error channel and exit with code 1.

pub mod cli;
pub mod config;
pub mod engine;
pub mod git;
pub mod provider;
pub mod ui;
