//! cli::resolve
//!
//! Binding of classified tokens against a command's declared schema.
//!
//! # Design
//!
//! Resolvers are pure functions that return their bound maps *and* every
//! violation found, so a single dispatch reports all problems at once and no
//! per-call state ever lives on the dispatcher. Violations are not errors:
//! they are user-facing usage text aggregated into an `InvalidUsage` outcome.

use std::collections::HashMap;
use std::fmt;

use super::command::{Argument, ArgumentInput, OptionInput, OptionSpec};
use super::tokenizer::FlagToken;

/// A single usage-contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required argument was not supplied.
    MissingArgument {
        /// Declared argument name.
        name: String,
    },
    /// A supplied flag identifier matches no declared option.
    UnknownOption {
        /// Identifier as supplied (dashes removed).
        ident: String,
    },
    /// A supplied value is outside the option's allowed set.
    DisallowedValue {
        /// Canonical option name.
        name: String,
        /// The rejected value.
        value: String,
        /// The allowed set, for the message.
        allowed: Vec<String>,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingArgument { name } => {
                write!(f, "missing required argument \"{}\"", name)
            }
            Violation::UnknownOption { ident } => {
                write!(f, "unknown option \"{}\"", ident)
            }
            Violation::DisallowedValue {
                name,
                value,
                allowed,
            } => write!(
                f,
                "invalid value \"{}\" for option \"{}\" (allowed: {})",
                value,
                name,
                allowed.join(", ")
            ),
        }
    }
}

/// Result of binding positional values to declared arguments.
#[derive(Debug, Default)]
pub struct ResolvedArguments {
    /// Bound arguments, keyed by name.
    pub bound: HashMap<String, ArgumentInput>,
    /// Missing-required violations, in declaration order.
    pub violations: Vec<Violation>,
}

/// Bind positional values to declared arguments by declaration order.
///
/// Surplus positionals are silently ignored. An optional argument with no
/// positional at its index is absent from the output map; arguments have no
/// default mechanism.
pub fn resolve_arguments(specs: &[Argument], positionals: &[String]) -> ResolvedArguments {
    let mut resolved = ResolvedArguments::default();

    for (index, spec) in specs.iter().enumerate() {
        match positionals.get(index) {
            Some(value) => {
                resolved.bound.insert(
                    spec.name.clone(),
                    ArgumentInput {
                        value: value.clone(),
                        spec: spec.clone(),
                    },
                );
            }
            None if spec.required => {
                resolved.violations.push(Violation::MissingArgument {
                    name: spec.name.clone(),
                });
            }
            None => {}
        }
    }

    resolved
}

/// Result of binding flag pairs to declared options.
#[derive(Debug, Default)]
pub struct ResolvedOptions {
    /// Bound options, keyed by canonical (long) name.
    pub bound: HashMap<String, OptionInput>,
    /// Disallowed-value and unknown-option violations.
    pub violations: Vec<Violation>,
}

/// Bind flag pairs to declared options, applying defaults and allowed sets.
///
/// Every pair addressed to a declared option by long name or flag alias is
/// recognized; binding prefers the long name over the alias, and the last
/// occurrence of an identifier wins. Omitted options bind to their declared
/// default. A value outside a non-empty allowed set is a violation and the
/// option stays unbound. Identifiers recognized by no declared option are
/// unknown-option violations.
pub fn resolve_options(specs: &[OptionSpec], flags: &[FlagToken]) -> ResolvedOptions {
    let mut resolved = ResolvedOptions::default();
    let mut recognized = vec![false; flags.len()];

    for spec in specs {
        let mut by_name = None;
        let mut by_flag = None;
        for (index, flag) in flags.iter().enumerate() {
            if flag.ident == spec.name {
                recognized[index] = true;
                by_name = Some(index);
            } else if flag.ident == spec.flag {
                recognized[index] = true;
                by_flag = Some(index);
            }
        }

        match by_name.or(by_flag) {
            Some(index) => {
                let value = &flags[index].value;
                if !spec.allowed.is_empty() && !spec.allowed.contains(value) {
                    resolved.violations.push(Violation::DisallowedValue {
                        name: spec.name.clone(),
                        value: value.clone(),
                        allowed: spec.allowed.clone(),
                    });
                } else {
                    resolved.bound.insert(
                        spec.name.clone(),
                        OptionInput {
                            value: value.clone(),
                            spec: spec.clone(),
                        },
                    );
                }
            }
            None => {
                // Defaults are trusted and bypass the allowed-value check.
                resolved.bound.insert(
                    spec.name.clone(),
                    OptionInput {
                        value: spec.default.clone(),
                        spec: spec.clone(),
                    },
                );
            }
        }
    }

    for (index, flag) in flags.iter().enumerate() {
        if !recognized[index] {
            resolved.violations.push(Violation::UnknownOption {
                ident: flag.ident.clone(),
            });
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(specs: &[(&str, bool)]) -> Vec<Argument> {
        specs
            .iter()
            .map(|(name, required)| {
                let arg = Argument::new(*name, "");
                if *required {
                    arg.required()
                } else {
                    arg
                }
            })
            .collect()
    }

    fn positionals(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn flag(ident: &str, value: &str) -> FlagToken {
        FlagToken {
            ident: ident.to_string(),
            value: value.to_string(),
        }
    }

    mod arguments {
        use super::*;

        #[test]
        fn binds_by_declaration_order() {
            let specs = args(&[("first", true), ("second", false)]);
            let resolved = resolve_arguments(&specs, &positionals(&["a", "b"]));

            assert!(resolved.violations.is_empty());
            assert_eq!(resolved.bound["first"].value, "a");
            assert_eq!(resolved.bound["second"].value, "b");
        }

        #[test]
        fn surplus_positionals_ignored() {
            let specs = args(&[("only", true)]);
            let resolved = resolve_arguments(&specs, &positionals(&["a", "extra"]));

            assert!(resolved.violations.is_empty());
            assert_eq!(resolved.bound.len(), 1);
        }

        #[test]
        fn all_missing_required_reported() {
            let specs = args(&[("first", true), ("second", true)]);
            let resolved = resolve_arguments(&specs, &[]);

            assert_eq!(
                resolved.violations,
                vec![
                    Violation::MissingArgument {
                        name: "first".to_string()
                    },
                    Violation::MissingArgument {
                        name: "second".to_string()
                    },
                ]
            );
        }

        #[test]
        fn optional_missing_is_absent_not_empty() {
            let specs = args(&[("maybe", false)]);
            let resolved = resolve_arguments(&specs, &[]);

            assert!(resolved.violations.is_empty());
            assert!(!resolved.bound.contains_key("maybe"));
        }

        #[test]
        fn supplied_empty_string_binds() {
            let specs = args(&[("first", true)]);
            let resolved = resolve_arguments(&specs, &positionals(&[""]));

            assert!(resolved.violations.is_empty());
            assert_eq!(resolved.bound["first"].value, "");
        }
    }

    mod options {
        use super::*;

        fn provider_spec() -> OptionSpec {
            OptionSpec::new("provider", 'p', "AI provider", "openai").allowed(["openai"])
        }

        #[test]
        fn omitted_option_binds_default() {
            let resolved = resolve_options(&[provider_spec()], &[]);

            assert!(resolved.violations.is_empty());
            assert_eq!(resolved.bound["provider"].value, "openai");
        }

        #[test]
        fn long_name_binds() {
            let resolved = resolve_options(&[provider_spec()], &[flag("provider", "openai")]);
            assert_eq!(resolved.bound["provider"].value, "openai");
        }

        #[test]
        fn flag_alias_binds_under_canonical_name() {
            let resolved = resolve_options(&[provider_spec()], &[flag("p", "openai")]);
            assert!(resolved.violations.is_empty());
            assert_eq!(resolved.bound["provider"].value, "openai");
        }

        #[test]
        fn long_name_preferred_over_alias() {
            let spec = OptionSpec::new("language", 'l', "", "en_US");
            let resolved =
                resolve_options(&[spec], &[flag("l", "pt_BR"), flag("language", "es_ES")]);

            assert!(resolved.violations.is_empty());
            assert_eq!(resolved.bound["language"].value, "es_ES");
        }

        #[test]
        fn last_occurrence_wins() {
            let spec = OptionSpec::new("language", 'l', "", "en_US");
            let resolved =
                resolve_options(&[spec], &[flag("language", "pt_BR"), flag("language", "es_ES")]);

            assert_eq!(resolved.bound["language"].value, "es_ES");
        }

        #[test]
        fn disallowed_value_is_violation_and_unbound() {
            let resolved = resolve_options(&[provider_spec()], &[flag("provider", "claude")]);

            assert!(!resolved.bound.contains_key("provider"));
            assert_eq!(resolved.violations.len(), 1);
            assert!(matches!(
                &resolved.violations[0],
                Violation::DisallowedValue { name, value, .. }
                    if name == "provider" && value == "claude"
            ));
        }

        #[test]
        fn unknown_identifier_is_violation() {
            let resolved = resolve_options(&[provider_spec()], &[flag("unknown", "oops")]);

            assert_eq!(
                resolved.violations,
                vec![Violation::UnknownOption {
                    ident: "unknown".to_string()
                }]
            );
            // The declared option still resolves to its default.
            assert_eq!(resolved.bound["provider"].value, "openai");
        }

        #[test]
        fn empty_allowed_set_is_unrestricted() {
            let spec = OptionSpec::new("model", 'm', "", "");
            let resolved = resolve_options(&[spec], &[flag("model", "anything-goes")]);

            assert!(resolved.violations.is_empty());
            assert_eq!(resolved.bound["model"].value, "anything-goes");
        }

        #[test]
        fn every_declared_option_gets_an_entry() {
            let specs = vec![
                provider_spec(),
                OptionSpec::new("language", 'l', "", "en_US"),
            ];
            let resolved = resolve_options(&specs, &[flag("p", "openai")]);

            assert_eq!(resolved.bound.len(), 2);
            assert_eq!(resolved.bound["language"].value, "en_US");
        }
    }

    #[test]
    fn violation_messages() {
        assert_eq!(
            Violation::MissingArgument {
                name: "first".to_string()
            }
            .to_string(),
            "missing required argument \"first\""
        );
        assert_eq!(
            Violation::UnknownOption {
                ident: "unknown".to_string()
            }
            .to_string(),
            "unknown option \"unknown\""
        );
        assert_eq!(
            Violation::DisallowedValue {
                name: "provider".to_string(),
                value: "claude".to_string(),
                allowed: vec!["openai".to_string()],
            }
            .to_string(),
            "invalid value \"claude\" for option \"provider\" (allowed: openai)"
        );
    }
}
