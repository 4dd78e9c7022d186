//! cli::outcome
//!
//! The uniform result of running a command: an exit code plus a
//! human-readable message.

use crate::ui::MarkupText;

/// Process exit codes produced by the CLI.
///
/// Values align with common process-exit conventions. The dispatch engine
/// itself only ever produces `Success`, `Error`, `InvalidUsage`, and
/// `CommandNotFound`; the remaining codes are reserved for the shell layer
/// and command implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,
    /// Command failed with an expected, user-facing error.
    Error = 1,
    /// Arguments or options violated the command's contract.
    InvalidUsage = 2,
    /// Permission denied (reserved).
    PermissionDenied = 126,
    /// The named command is not registered.
    CommandNotFound = 127,
    /// Interrupted by the user (reserved).
    InterruptedByUser = 130,
    /// Out of memory (reserved).
    OutOfMemory = 137,
}

impl ExitCode {
    /// Numeric process exit code.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Outcome of a dispatched command.
///
/// Expected, user-facing results travel in an `Outcome`; unexpected failures
/// travel in the error channel (`anyhow::Error`) and never become one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Exit code for the process.
    pub exit_code: ExitCode,
    /// Message to display, with inline markup.
    pub message: MarkupText,
}

impl Outcome {
    /// Create an outcome with an explicit exit code.
    pub fn new(exit_code: ExitCode, message: MarkupText) -> Self {
        Self { exit_code, message }
    }

    /// Create a successful outcome.
    pub fn success(message: MarkupText) -> Self {
        Self::new(ExitCode::Success, message)
    }
}
