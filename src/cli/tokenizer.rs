//! cli::tokenizer
//!
//! Schema-independent classification of raw tokens into positional values
//! and flag/value pairs.

/// A flag identifier with its value, as supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagToken {
    /// Identifier with leading dashes removed.
    pub ident: String,
    /// The supplied value. May be empty (`--name=`).
    pub value: String,
}

/// Classified raw tokens.
///
/// Both sequences preserve encounter order; duplicate flag identifiers are
/// kept (resolution decides which occurrence wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    /// Tokens bound to arguments by position.
    pub positionals: Vec<String>,
    /// Flag/value pairs, in encounter order.
    pub flags: Vec<FlagToken>,
}

/// Split raw tokens into positionals and flag pairs.
///
/// A token beginning with `-` starts a flag: with an `=` it is
/// self-contained (`--name=value`), without one it consumes the next token
/// verbatim as its value (`--name value`). A trailing flag with no value
/// token is dropped, which downstream resolution treats the same as an
/// omitted option. Everything else is a positional.
pub fn tokenize(tokens: &[String]) -> TokenStream {
    let mut stream = TokenStream::default();
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        if !token.starts_with('-') {
            stream.positionals.push(token.clone());
            continue;
        }
        if let Some((name, value)) = token.split_once('=') {
            stream.flags.push(FlagToken {
                ident: name.trim_start_matches('-').to_string(),
                value: value.to_string(),
            });
        } else if let Some(value) = iter.next() {
            stream.flags.push(FlagToken {
                ident: token.trim_start_matches('-').to_string(),
                value: value.clone(),
            });
        }
        // No next token: valueless flag, dropped.
    }

    stream
}
