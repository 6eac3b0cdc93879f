// src/error.rs

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure the parser can report, split by who is at fault.
///
/// [`LogicError`] values indicate a bug in the host program (bad schema,
/// retrieval of an undeclared name) and are meant to surface loudly during
/// development. [`UsageError`] values are caused by the argument vector the
/// user actually supplied; hosts are expected to report them, show usage, and
/// exit non-zero.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Programmer-usage error; see [`LogicError`].
    #[error(transparent)]
    Logic(#[from] LogicError),
    /// User-input error; see [`UsageError`].
    #[error(transparent)]
    Usage(#[from] UsageError),
}

impl From<ConversionError> for Error {
    fn from(err: ConversionError) -> Self {
        Self::Usage(UsageError::Conversion(err))
    }
}

/// Errors caused by incorrect use of the library itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    /// A positional argument was registered under a malformed name.
    #[error("invalid positional argument name '{name}'")]
    InvalidPositionalName {
        /// The rejected name.
        name: String,
    },
    /// An optional argument was registered under a malformed long name.
    #[error("invalid optional argument name '{name}'")]
    InvalidOptionName {
        /// The rejected long name, as passed by the caller.
        name: String,
    },
    /// An optional argument was registered with a malformed flag.
    #[error("invalid flag name '{name}'")]
    InvalidFlag {
        /// The rejected flag token.
        name: String,
    },
    /// A positional or optional argument was registered under a name that is
    /// already taken. Positional names and optional reference names share one
    /// namespace.
    #[error("duplicate argument name '{name}'")]
    DuplicateName {
        /// The conflicting name.
        name: String,
    },
    /// Two optional arguments were registered with the same flag character.
    #[error("duplicate flag name '-{flag}'")]
    DuplicateFlag {
        /// The conflicting flag character.
        flag: char,
    },
    /// A value was requested for a name that was never registered.
    #[error("no argument by the name '{name}'")]
    UnknownArgument {
        /// The unregistered name.
        name: String,
    },
    /// A value was requested for an argument the user never supplied, and no
    /// default was given.
    #[error("no value given for '{name}' and no default specified")]
    NoDefaultAvailable {
        /// The argument's reference name.
        name: String,
    },
    /// A value index past the number of recorded values was requested.
    #[error("index {index} is out of range for '{name}'")]
    IndexOutOfRange {
        /// The argument's reference name.
        name: String,
        /// The out-of-range index.
        index: usize,
    },
}

/// Errors derived from the argument vector supplied at runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Fewer positional tokens were supplied than positional arguments were
    /// declared. Reported only after the whole token stream has been scanned.
    #[error("requires positional argument '{name}'")]
    MissingPositional {
        /// The first declared positional left without a value.
        name: String,
    },
    /// A long-option token named an option that was never registered.
    #[error("invalid option '{name}', pass --help to display possible options")]
    UnknownOption {
        /// The unregistered reference name.
        name: String,
    },
    /// A flag token with no alias in the schema.
    #[error("invalid flag '{flag}', pass --help to display possible options")]
    UnknownFlag {
        /// The flag token as supplied, dashes included.
        flag: String,
    },
    /// A flag- or single-kind option occurred more than once.
    #[error("'{name}' should only be specified once")]
    RepeatedOption {
        /// The option's reference name.
        name: String,
    },
    /// An option that takes a value was not followed by one.
    #[error("'{name}' requires a value")]
    MissingValue {
        /// The option's reference name.
        name: String,
    },
    /// A recorded value failed conversion to the requested type.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Errors produced while converting a raw string value to a requested type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The value is not exactly `"true"` or `"false"`.
    #[error("'{field}' must be either 'true' or 'false'")]
    InvalidBoolean {
        /// Name of the argument being converted.
        field: String,
    },
    /// The value is not exactly one character long.
    #[error("'{field}' must be a single character")]
    InvalidChar {
        /// Name of the argument being converted.
        field: String,
    },
    /// The value does not parse as an integer at all.
    #[error("'{field}' must be of integral type")]
    NotIntegral {
        /// Name of the argument being converted.
        field: String,
    },
    /// The value does not parse as a number at all.
    #[error("'{field}' must be a number")]
    NotNumeric {
        /// Name of the argument being converted.
        field: String,
    },
    /// The value parses, but falls outside the target type's bounds.
    #[error("'{field}' must be in range [{min},{max}]")]
    OutOfRange {
        /// Name of the argument being converted.
        field: String,
        /// Lower bound of the target type, formatted for display.
        min: String,
        /// Upper bound of the target type, formatted for display.
        max: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_messages_match_cli_wording() {
        let err = UsageError::MissingPositional {
            name: "file".to_string(),
        };
        assert_eq!(err.to_string(), "requires positional argument 'file'");

        let err = UsageError::MissingValue {
            name: "output".to_string(),
        };
        assert_eq!(err.to_string(), "'output' requires a value");

        let err = UsageError::UnknownOption {
            name: "opt0".to_string(),
        };
        assert!(err.to_string().ends_with("pass --help to display possible options"));
    }

    #[test]
    fn test_conversion_error_is_a_usage_error() {
        let err: Error = ConversionError::InvalidBoolean {
            field: "verbose".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Usage(UsageError::Conversion(_))));
        assert_eq!(err.to_string(), "'verbose' must be either 'true' or 'false'");
    }

    #[test]
    fn test_logic_error_messages() {
        let err = LogicError::IndexOutOfRange {
            name: "append".to_string(),
            index: 3,
        };
        assert_eq!(err.to_string(), "index 3 is out of range for 'append'");
    }
}
