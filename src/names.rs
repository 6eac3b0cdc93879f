// src/names.rs

//! Lexical rules for argument names and option tokens.
//!
//! These are pure predicates and formatters; the only failure mode is "no
//! match". The matcher uses them to classify raw tokens, and the schema uses
//! them to validate names at registration time.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref POSITIONAL_NAME_RE: Regex = Regex::new(r"^\w[a-zA-Z0-9_-]*$").unwrap();
}

lazy_static! {
    // Either a one-letter flag ("-x") or a long option with one or two
    // leading dashes and a bare name of at least two characters.
    static ref OPTION_TOKEN_RE: Regex =
        Regex::new(r"^-([a-zA-Z_]|-?[a-zA-Z_][a-zA-Z0-9_-]+)$").unwrap();
    static ref LONG_NAME_RE: Regex = Regex::new(r"^--?([a-zA-Z_][a-zA-Z0-9_-]+)$").unwrap();
    static ref FLAG_RE: Regex = Regex::new(r"^-([a-zA-Z_])$").unwrap();
}

/// Check whether `name` is acceptable as a positional argument name: a word
/// character followed by any number of word characters or hyphens.
pub fn is_valid_positional_name(name: &str) -> bool {
    POSITIONAL_NAME_RE.is_match(name)
}

/// Check whether `token` is syntactically an option occurrence (`-x` or
/// `--long-name`), regardless of whether anything by that name is registered.
pub fn is_option_token(token: &str) -> bool {
    OPTION_TOKEN_RE.is_match(token)
}

/// Strip one or two leading dashes from a well-formed long-option token and
/// return the bare reference name. Single-letter names are not long options;
/// those go through [`format_flag`].
pub fn format_long_name(token: &str) -> Option<&str> {
    LONG_NAME_RE
        .captures(token)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Return the flag character of a well-formed single-dash single-letter flag
/// token, e.g. `'v'` for `-v`.
pub fn format_flag(token: &str) -> Option<char> {
    FLAG_RE
        .captures(token)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_names() {
        assert!(is_valid_positional_name("file"));
        assert!(is_valid_positional_name("input-file"));
        assert!(is_valid_positional_name("_x"));
        assert!(is_valid_positional_name("0"));

        assert!(!is_valid_positional_name("-file"));
        assert!(!is_valid_positional_name(""));
        assert!(!is_valid_positional_name("two words"));
    }

    #[test]
    fn test_option_tokens() {
        assert!(is_option_token("-v"));
        assert!(is_option_token("-out"));
        assert!(is_option_token("--out"));
        assert!(is_option_token("--long-name"));

        assert!(!is_option_token("out"));
        assert!(!is_option_token("-5"));
        assert!(!is_option_token("-"));
        assert!(!is_option_token("--"));
        assert!(!is_option_token("---out"));
    }

    #[test]
    fn test_format_long_name() {
        assert_eq!(format_long_name("--output"), Some("output"));
        assert_eq!(format_long_name("-output"), Some("output"));
        assert_eq!(format_long_name("--a_b-c"), Some("a_b-c"));

        // Single letters only qualify as flags.
        assert_eq!(format_long_name("-o"), None);
        assert_eq!(format_long_name("--o"), None);
        assert_eq!(format_long_name("output"), None);
        assert_eq!(format_long_name("--9lives"), None);
    }

    #[test]
    fn test_format_flag() {
        assert_eq!(format_flag("-o"), Some('o'));
        assert_eq!(format_flag("-_"), Some('_'));

        assert_eq!(format_flag("-5"), None);
        assert_eq!(format_flag("-ab"), None);
        assert_eq!(format_flag("--o"), None);
        assert_eq!(format_flag("o"), None);
    }
}
