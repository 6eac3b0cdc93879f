// src/matcher.rs

//! The tokenizer/matcher: a single left-to-right scan over the raw argument
//! list with one token of lookahead.
//!
//! The matcher only reads the schema; it never writes values back. Its output
//! is the full assignment (positional tokens in scan order plus a map of
//! option reference name to recorded values), the help short-circuit, or the
//! first usage error encountered.

use crate::constants::{FLAG_PRESENT, HELP_LONG_NAME};
use crate::error::UsageError;
use crate::names;
use crate::schema::{OptionKind, Schema};
use std::collections::HashMap;

/// The outcome of scanning a token stream.
#[derive(Debug)]
pub(crate) enum Scan {
    /// Every token was classified and validated.
    Matched(Matched),
    /// The reserved `help` option was encountered; parsing stops here and the
    /// caller hands off to help rendering.
    HelpRequested,
}

/// A complete, validated assignment of tokens to declared arguments.
#[derive(Debug, Default)]
pub(crate) struct Matched {
    /// All positional tokens in scan order, declared or leftover.
    pub(crate) positionals: Vec<String>,
    /// Recorded values per optional reference name, in occurrence order.
    pub(crate) options: HashMap<String, Vec<String>>,
}

/// How a single token was classified.
enum Token {
    /// A plain value token, assigned by position.
    Positional,
    /// An option occurrence, resolved to its reference name.
    Option(String),
}

/// Scan `args` (the argument vector without the program name) against the
/// schema.
///
/// Option tokens are validated as they are seen; the positional count is
/// checked only after the entire stream has been scanned, so option-syntax
/// errors always win over a missing positional.
pub(crate) fn match_args(schema: &Schema, args: &[String]) -> Result<Scan, UsageError> {
    let mut matched = Matched::default();
    let mut occurrences: HashMap<String, usize> = HashMap::new();
    let mut tokens = args.iter().map(String::as_str).peekable();

    while let Some(token) = tokens.next() {
        let name = match classify(schema, token)? {
            Token::Positional => {
                matched.positionals.push(token.to_string());
                continue;
            }
            Token::Option(name) => name,
        };

        if name == HELP_LONG_NAME {
            log::debug!("help requested via '{}'", token);
            return Ok(Scan::HelpRequested);
        }
        let Some(optional) = schema.optional(&name) else {
            return Err(UsageError::UnknownOption { name });
        };

        let occurs = occurrences.entry(name.clone()).or_insert(0);
        *occurs += 1;
        let repeated = *occurs > 1;

        let value = match optional.kind() {
            OptionKind::Flag => {
                if repeated {
                    return Err(UsageError::RepeatedOption { name });
                }
                FLAG_PRESENT.to_string()
            }
            kind => {
                let Some(value) = tokens.next() else {
                    return Err(UsageError::MissingValue { name });
                };
                // A value may not itself look like an option occurrence.
                if names::is_option_token(value) {
                    return Err(UsageError::MissingValue { name });
                }
                if kind == OptionKind::Single && repeated {
                    return Err(UsageError::RepeatedOption { name });
                }
                value.to_string()
            }
        };
        matched.options.entry(name).or_default().push(value);
    }

    if matched.positionals.len() < schema.positional_count() {
        let name = schema
            .positional_name_at(matched.positionals.len())
            .unwrap_or_default()
            .to_string();
        return Err(UsageError::MissingPositional { name });
    }

    log::debug!(
        "matched {} positional token(s) and {} option(s)",
        matched.positionals.len(),
        matched.options.len()
    );
    Ok(Scan::Matched(matched))
}

/// Classify one raw token: flag occurrences resolve through the alias table,
/// long-option occurrences format to their bare name, and everything else is
/// a positional value.
fn classify(schema: &Schema, token: &str) -> Result<Token, UsageError> {
    if let Some(flag) = names::format_flag(token) {
        let name = schema.resolve_flag(flag).ok_or_else(|| UsageError::UnknownFlag {
            flag: token.to_string(),
        })?;
        return Ok(Token::Option(name.to_string()));
    }
    match names::format_long_name(token) {
        Some(name) => Ok(Token::Option(name.to_string())),
        None => Ok(Token::Positional),
    }
}

// MARK: --- UNIT TESTS ---
