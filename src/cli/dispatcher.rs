//! cli::dispatcher
//!
//! Name-to-command registry and the end-to-end dispatch operation.
//!
//! # Design
//!
//! The registry is the dispatcher's only state; it exclusively owns the
//! registered command instances for the process lifetime. Everything a
//! single dispatch needs (token stream, bound maps, violation lists) is
//! local to that call, so a fully-registered dispatcher can be shared
//! across threads.
//!
//! # Error Handling
//!
//! Lookup and usage failures are expected results ([`Outcome`] with
//! `CommandNotFound` / `InvalidUsage`); usage violations are aggregated so
//! one dispatch surfaces every problem found. Errors returned by a
//! command's `execute` are unexpected failures and propagate unchanged.

use std::collections::HashMap;

use anyhow::Result;

use super::command::{Command, CommandInput};
use super::outcome::{ExitCode, Outcome};
use super::resolve::{resolve_arguments, resolve_options};
use super::tokenizer::tokenize;
use crate::ui::MarkupText;

/// Dispatches raw argument tokens to registered commands.
#[derive(Default)]
pub struct Dispatcher {
    commands: HashMap<String, Box<dyn Command>>,
}

impl Dispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its own name.
    ///
    /// Registering a second command under the same name replaces the
    /// first; the last registration wins.
    pub fn register(&mut self, command: Box<dyn Command>) {
        self.commands.insert(command.name().to_string(), command);
    }

    /// Resolve `tokens` against the named command's schema and run it.
    ///
    /// Returns `CommandNotFound` for unregistered names without attempting
    /// to parse, `InvalidUsage` listing every violation when resolution
    /// fails, and otherwise whatever the command's `execute` produces.
    pub fn dispatch(&self, name: &str, tokens: &[String]) -> Result<Outcome> {
        let Some(command) = self.commands.get(name) else {
            return Ok(Outcome::new(
                ExitCode::CommandNotFound,
                MarkupText::new(format!("<error>command not found: {}</error>", name)),
            ));
        };

        let stream = tokenize(tokens);
        let arguments = resolve_arguments(command.arguments(), &stream.positionals);
        let options = resolve_options(command.options(), &stream.flags);

        let violations: Vec<_> = arguments
            .violations
            .into_iter()
            .chain(options.violations)
            .collect();
        if !violations.is_empty() {
            let lines = violations
                .iter()
                .map(|violation| format!("<error>{}</error>", violation));
            return Ok(Outcome::new(
                ExitCode::InvalidUsage,
                MarkupText::from_lines(lines.collect::<Vec<_>>()),
            ));
        }

        command.execute(CommandInput::new(arguments.bound, options.bound))
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Dispatcher").field("commands", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::command::{Argument, OptionSpec};
    use anyhow::bail;

    /// Test command that echoes its resolved input into the outcome message.
    struct Echo {
        name: &'static str,
        arguments: Vec<Argument>,
        options: Vec<OptionSpec>,
        fail: bool,
    }

    impl Echo {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                arguments: vec![Argument::new("first", "First value").required()],
                options: vec![
                    OptionSpec::new("first", 'f', "First option", "default-value")
                        .allowed(["option-value", "default-value"]),
                ],
                fail: false,
            }
        }

        fn failing(mut self) -> Self {
            self.fail = true;
            self
        }
    }

    impl Command for Echo {
        fn name(&self) -> &str {
            self.name
        }

        fn arguments(&self) -> &[Argument] {
            &self.arguments
        }

        fn options(&self) -> &[OptionSpec] {
            &self.options
        }

        fn execute(&self, input: CommandInput) -> Result<Outcome> {
            if self.fail {
                bail!("internal failure");
            }
            Ok(Outcome::success(MarkupText::new(format!(
                "{}|{}",
                input.argument("first").unwrap_or("<unset>"),
                input.option("first").unwrap_or("<unset>"),
            ))))
        }
    }

    fn toks(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unknown_name_is_command_not_found() {
        let dispatcher = Dispatcher::new();
        let outcome = dispatcher.dispatch("notfound", &[]).unwrap();

        assert_eq!(outcome.exit_code, ExitCode::CommandNotFound);
        assert!(outcome.message.strip().contains("notfound"));
    }

    #[test]
    fn successful_dispatch_passes_resolved_input() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(Box::new(Echo::new("mock")));

        let outcome = dispatcher
            .dispatch("mock", &toks(&["argument-value", "--first", "option-value"]))
            .unwrap();

        assert_eq!(outcome.exit_code, ExitCode::Success);
        assert_eq!(outcome.message.strip(), "argument-value|option-value");
    }

    #[test]
    fn violations_are_aggregated() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(Box::new(Echo::new("mock")));

        // Missing required argument AND unknown option in one report.
        let outcome = dispatcher
            .dispatch("mock", &toks(&["--unknown", "oops"]))
            .unwrap();

        assert_eq!(outcome.exit_code, ExitCode::InvalidUsage);
        let message = outcome.message.strip();
        assert!(message.contains("missing required argument \"first\""));
        assert!(message.contains("unknown option \"unknown\""));
    }

    #[test]
    fn execute_error_propagates() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(Box::new(Echo::new("mock").failing()));

        let err = dispatcher
            .dispatch("mock", &toks(&["argument-value"]))
            .unwrap_err();
        assert!(err.to_string().contains("internal failure"));
    }

    #[test]
    fn last_registration_wins() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(Box::new(Echo::new("mock").failing()));
        dispatcher.register(Box::new(Echo::new("mock")));

        let outcome = dispatcher
            .dispatch("mock", &toks(&["argument-value"]))
            .unwrap();
        assert_eq!(outcome.exit_code, ExitCode::Success);
    }

    #[test]
    fn dispatcher_is_shareable_once_registered() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(Box::new(Echo::new("mock")));
        let dispatcher = std::sync::Arc::new(dispatcher);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let dispatcher = dispatcher.clone();
                std::thread::spawn(move || {
                    dispatcher
                        .dispatch("mock", &toks(&["argument-value"]))
                        .unwrap()
                        .exit_code
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), ExitCode::Success);
        }
    }
}
