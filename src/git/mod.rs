//! git
//!
//! Single interface for all Git operations.
//!
//! No other module imports `git2` directly; everything flows through
//! [`Git`], which normalizes errors into typed failure categories.

pub mod interface;

pub use interface::{Git, GitError};
