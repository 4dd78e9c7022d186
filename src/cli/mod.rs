//! cli
//!
//! Command-line interface layer: the dispatch/parsing engine and the
//! builtin command set.
//!
//! # Architecture
//!
//! Raw tokens flow through [`Application::run`] into the [`Dispatcher`],
//! which resolves them against the named command's declared schema
//! ([`tokenizer`] → [`resolve`]) and invokes the command. Commands are thin:
//! they validate nothing the dispatcher already validated and delegate the
//! actual work to [`crate::engine`], [`crate::git`], and [`crate::provider`].

pub mod command;
pub mod commands;
pub mod dispatcher;
pub mod outcome;
pub mod resolve;
pub mod tokenizer;

pub use command::{Argument, ArgumentInput, Command, CommandInput, OptionInput, OptionSpec};
pub use dispatcher::Dispatcher;
pub use outcome::{ExitCode, Outcome};

use anyhow::Result;

use crate::ui::MarkupText;

/// The CLI application: a dispatcher pre-loaded with a command set.
pub struct Application {
    dispatcher: Dispatcher,
}

impl Application {
    /// Create an application with the given commands registered.
    pub fn new(commands: Vec<Box<dyn Command>>) -> Self {
        let mut dispatcher = Dispatcher::new();
        for command in commands {
            dispatcher.register(command);
        }
        Self { dispatcher }
    }

    /// Run against raw process arguments (program name already removed).
    ///
    /// An empty argument list is a shell-layer usage error and never
    /// reaches the dispatcher.
    pub fn run(&self, args: &[String]) -> Result<Outcome> {
        let Some((name, tokens)) = args.split_first() else {
            return Ok(Outcome::new(
                ExitCode::Error,
                MarkupText::new("<error>no command provided</error>"),
            ));
        };
        self.dispatcher.dispatch(name, tokens)
    }
}
