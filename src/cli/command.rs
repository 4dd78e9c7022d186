//! cli::command
//!
//! The command capability and its declared-schema descriptor types.
//!
//! # Design
//!
//! A [`Command`] declares its positional arguments and options as immutable
//! descriptor values, constructed once per command instance. The dispatcher
//! resolves raw tokens against that schema into a [`CommandInput`], which is
//! built fresh per dispatch and discarded after `execute` returns.
//!
//! Implementations must be `Send + Sync`: the registry is shared read-only
//! once fully populated, and dispatch holds no per-call state on it.

use std::collections::HashMap;

use anyhow::Result;

use super::outcome::Outcome;

/// A declared positional argument.
///
/// Identity is the name, which must be unique within a command. Arguments
/// have no default mechanism; an optional argument that is not supplied is
/// simply absent from the resolved input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Argument name, unique within a command.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Whether resolution fails when the argument is not supplied.
    pub required: bool,
}

impl Argument {
    /// Create an optional argument.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: false,
        }
    }

    /// Mark the argument as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A declared option.
///
/// Options are addressed by long name (`--name`) or single-character flag
/// alias (`-f`); both namespaces are unique within a command and a lookup by
/// either resolves to exactly one option. An omitted option always resolves
/// to its default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    /// Long name, unique within a command; the canonical key in
    /// [`CommandInput::options`].
    pub name: String,
    /// Single-character flag alias.
    pub flag: String,
    /// Human-readable description.
    pub description: String,
    /// Value used when the option is omitted. Defaults are trusted and
    /// bypass the allowed-value check.
    pub default: String,
    /// Closed set of acceptable values; empty means unrestricted.
    pub allowed: Vec<String>,
}

impl OptionSpec {
    /// Create an unrestricted option.
    pub fn new(
        name: impl Into<String>,
        flag: char,
        description: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            flag: flag.to_string(),
            description: description.into(),
            default: default.into(),
            allowed: Vec::new(),
        }
    }

    /// Restrict the option to a closed set of values.
    pub fn allowed<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = values.into_iter().map(Into::into).collect();
        self
    }
}

/// A supplied (or defaulted) value bound to a declared argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentInput {
    /// The supplied value. May be the empty string; "not supplied" is
    /// represented by the key being absent from the map, not by emptiness.
    pub value: String,
    /// The descriptor this value was bound against.
    pub spec: Argument,
}

/// A supplied or defaulted value bound to a declared option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionInput {
    /// The user-supplied value, or `spec.default` if omitted.
    pub value: String,
    /// The descriptor this value was bound against.
    pub spec: OptionSpec,
}

/// Validated, typed input handed to [`Command::execute`].
///
/// Contains only entries for declared arguments/options; after successful
/// resolution every declared option has an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandInput {
    /// Bound arguments, keyed by argument name.
    pub arguments: HashMap<String, ArgumentInput>,
    /// Bound options, keyed by canonical (long) option name.
    pub options: HashMap<String, OptionInput>,
}

impl CommandInput {
    /// Create an input from resolved maps.
    pub fn new(
        arguments: HashMap<String, ArgumentInput>,
        options: HashMap<String, OptionInput>,
    ) -> Self {
        Self { arguments, options }
    }

    /// Value of a bound argument, if supplied.
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(|a| a.value.as_str())
    }

    /// Value of a resolved option.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(|o| o.value.as_str())
    }
}

/// A named operation exposing declared arguments/options and an execute
/// entry point.
///
/// # Error Handling
///
/// `execute` has two result channels: an [`Outcome`] for expected,
/// user-facing results (including failures like "configuration file already
/// exists"), and `anyhow::Error` for unexpected failures (network, process,
/// I/O). The dispatcher never interprets the error channel.
pub trait Command: Send + Sync {
    /// The name this command is registered and dispatched under.
    fn name(&self) -> &str;

    /// Declared positional arguments, in binding order.
    fn arguments(&self) -> &[Argument];

    /// Declared options.
    fn options(&self) -> &[OptionSpec];

    /// Run the command against resolved input.
    fn execute(&self, input: CommandInput) -> Result<Outcome>;
}
