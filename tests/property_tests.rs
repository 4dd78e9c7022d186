//! Property-based tests for the dispatch engine.
//!
//! These tests use proptest to verify invariants hold across randomly
//! generated token sequences.

use proptest::prelude::*;

use comet::cli::tokenizer::tokenize;
use comet::cli::resolve::{resolve_arguments, resolve_options};
use comet::cli::{Argument, Dispatcher, ExitCode, OptionSpec};

/// Strategy for tokens that can never be mistaken for flags.
fn positional_token() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9_.]{0,12}"
}

/// Strategy for arbitrary tokens, flags included.
fn any_token() -> impl Strategy<Value = String> {
    prop_oneof![
        positional_token(),
        positional_token().prop_map(|s| format!("--{}", s)),
        positional_token().prop_map(|s| format!("-{}", s)),
        (positional_token(), positional_token()).prop_map(|(a, b)| format!("--{}={}", a, b)),
    ]
}

proptest! {
    /// Tokens without a dash prefix are always positionals, in order.
    #[test]
    fn dashless_tokens_are_positionals(tokens in prop::collection::vec(positional_token(), 0..8)) {
        let stream = tokenize(&tokens);
        prop_assert_eq!(stream.positionals, tokens);
        prop_assert!(stream.flags.is_empty());
    }

    /// Classification never invents tokens and never keeps a dash prefix
    /// on an identifier.
    #[test]
    fn classification_is_well_formed(tokens in prop::collection::vec(any_token(), 0..8)) {
        let stream = tokenize(&tokens);
        prop_assert!(stream.positionals.len() + stream.flags.len() <= tokens.len());
        for positional in &stream.positionals {
            prop_assert!(tokens.contains(positional));
            prop_assert!(!positional.starts_with('-'));
        }
        for flag in &stream.flags {
            prop_assert!(!flag.ident.starts_with('-'));
        }
    }

    /// Dispatching an unregistered name never parses and never panics.
    #[test]
    fn unregistered_dispatch_is_always_not_found(
        name in "[a-z]{1,10}",
        tokens in prop::collection::vec(any_token(), 0..8),
    ) {
        let dispatcher = Dispatcher::new();
        let outcome = dispatcher.dispatch(&name, &tokens).unwrap();
        prop_assert_eq!(outcome.exit_code, ExitCode::CommandNotFound);
    }

    /// Omitted options always resolve to their declared default.
    #[test]
    fn omitted_options_default(default in positional_token()) {
        let specs = vec![OptionSpec::new("choice", 'c', "", default.clone())];
        let resolved = resolve_options(&specs, &[]);
        prop_assert!(resolved.violations.is_empty());
        prop_assert_eq!(resolved.bound["choice"].value.clone(), default);
    }

    /// Argument resolution binds a prefix of the positionals and never
    /// reports a missing argument it actually bound.
    #[test]
    fn argument_binding_is_prefix_exact(
        positionals in prop::collection::vec(positional_token(), 0..6),
        required_count in 0usize..4,
    ) {
        let specs: Vec<Argument> = (0..4)
            .map(|i| {
                let arg = Argument::new(format!("arg{}", i), "");
                if i < required_count { arg.required() } else { arg }
            })
            .collect();

        let resolved = resolve_arguments(&specs, &positionals);

        for (i, spec) in specs.iter().enumerate() {
            match positionals.get(i) {
                Some(value) => {
                    prop_assert_eq!(&resolved.bound[&spec.name].value, value);
                }
                None => {
                    prop_assert!(!resolved.bound.contains_key(&spec.name));
                    let reported = resolved
                        .violations
                        .iter()
                        .any(|v| v.to_string().contains(&spec.name));
                    prop_assert_eq!(reported, spec.required);
                }
            }
        }
    }
}
