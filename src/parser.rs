// src/parser.rs

//! The user-facing parser: schema registration, one parse pass, then typed
//! retrieval.
//!
//! Usage steps:
//! 1. Declare arguments with [`ArgumentParser::add_positional`],
//!    [`ArgumentParser::add_optional`], and
//!    [`ArgumentParser::add_optional_with_flag`].
//! 2. Hand the process argument vector to [`ArgumentParser::parse`] (or
//!    [`ArgumentParser::try_parse`] to handle `--help` yourself).
//! 3. Retrieve each value by name with [`ArgumentParser::arg`],
//!    [`ArgumentParser::arg_at`], and friends.

use crate::convert::FromArg;
use crate::error::{Error, LogicError, Result};
use crate::help;
use crate::matcher::{self, Scan};
use crate::schema::{OptionKind, Optional, Positional, Schema};

/// Result of a successful parse pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// All tokens were matched; carries the leftover positional tokens beyond
    /// the declared count, in scan order.
    Parsed(Vec<String>),
    /// The reserved `help` option was supplied. No values were written; the
    /// caller should render help and stop.
    HelpRequested,
}

/// Command-line argument parser over a single flat namespace of positional
/// and optional arguments.
#[derive(Debug, Clone, Default)]
pub struct ArgumentParser {
    schema: Schema,
    program_name: Option<String>,
}

impl ArgumentParser {
    /// Create a parser whose schema carries only the implicit `-h`/`--help`
    /// flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a positional argument. See [`Schema::add_positional`].
    pub fn add_positional(&mut self, name: &str) -> Result<&mut Positional> {
        self.schema.add_positional(name)
    }

    /// Declare an optional argument by long name. See
    /// [`Schema::add_optional`].
    pub fn add_optional(&mut self, long_name: &str, kind: OptionKind) -> Result<&mut Optional> {
        self.schema.add_optional(long_name, kind)
    }

    /// Declare an optional argument with a flag alias. See
    /// [`Schema::add_optional_with_flag`].
    pub fn add_optional_with_flag(
        &mut self,
        flag: &str,
        long_name: &str,
        kind: OptionKind,
    ) -> Result<&mut Optional> {
        self.schema.add_optional_with_flag(flag, long_name, kind)
    }

    /// Parse the argument vector and write matched values into the schema.
    ///
    /// `args[0]` is taken as the program name and excluded from matching.
    /// On success, returns the leftover positional tokens beyond the declared
    /// count with indices renumbered contiguously; the caller's slice is
    /// never mutated. On failure, no argument storage is touched.
    pub fn try_parse(&mut self, args: &[String]) -> Result<ParseOutcome> {
        self.program_name = args.first().cloned();
        let rest = args.get(1..).unwrap_or(&[]);

        let matched = match matcher::match_args(&self.schema, rest)? {
            Scan::HelpRequested => return Ok(ParseOutcome::HelpRequested),
            Scan::Matched(matched) => matched,
        };

        let mut values = matched.positionals.into_iter();
        let names: Vec<String> = self
            .schema
            .positionals()
            .map(|pos| pos.name().to_string())
            .collect();
        for name in names {
            if let (Some(positional), Some(value)) =
                (self.schema.positional_mut(&name), values.next())
            {
                positional.set_value(value);
            }
        }
        let leftover: Vec<String> = values.collect();

        // Replace the previous parse's option values wholesale so absence in
        // this argument vector reads as absence.
        let optional_names: Vec<String> = self
            .schema
            .optionals()
            .map(|opt| opt.name().to_string())
            .collect();
        let mut options = matched.options;
        for name in optional_names {
            if let Some(optional) = self.schema.optional_mut(&name) {
                match options.remove(&name) {
                    Some(values) => optional.set_values(values),
                    None => optional.clear_values(),
                }
            }
        }

        Ok(ParseOutcome::Parsed(leftover))
    }

    /// Parse the argument vector, rendering help and exiting the process with
    /// status 0 when `-h`/`--help` is supplied.
    ///
    /// Returns the leftover positional tokens. Hosts that need to stay in
    /// control of the help path should call [`Self::try_parse`] instead.
    pub fn parse(&mut self, args: &[String]) -> Result<Vec<String>> {
        match self.try_parse(args)? {
            ParseOutcome::Parsed(leftover) => Ok(leftover),
            ParseOutcome::HelpRequested => {
                print!("{}", help::render_help(self.display_name(), &self.schema));
                std::process::exit(0);
            }
        }
    }

    /// Whether the user supplied at least one value for the named optional.
    pub fn has_arg(&self, name: &str) -> Result<bool> {
        Ok(self.lookup_optional(name)?.exists())
    }

    /// Number of values the user supplied for the named optional.
    pub fn arg_count(&self, name: &str) -> Result<usize> {
        Ok(self.lookup_optional(name)?.count())
    }

    /// Retrieve the named argument's value converted to `T`.
    pub fn arg<T: FromArg>(&self, name: &str) -> Result<T> {
        self.arg_value(name, 0, None)
    }

    /// Retrieve the named argument's value converted to `T`, or `default`
    /// when the user supplied none.
    pub fn arg_or<T: FromArg>(&self, name: &str, default: T) -> Result<T> {
        self.arg_value(name, 0, Some(default))
    }

    /// Retrieve the value at `index` for the named argument converted to `T`.
    pub fn arg_at<T: FromArg>(&self, name: &str, index: usize) -> Result<T> {
        self.arg_value(name, index, None)
    }

    /// Retrieve the value at `index` for the named argument converted to `T`,
    /// or `default` when the user supplied no values at all.
    pub fn arg_at_or<T: FromArg>(&self, name: &str, index: usize, default: T) -> Result<T> {
        self.arg_value(name, index, Some(default))
    }

    /// Retrieve every value supplied for the named optional converted to `T`,
    /// in occurrence order. Empty when the option was not supplied.
    pub fn args<T: FromArg>(&self, name: &str) -> Result<Vec<T>> {
        let count = self.arg_count(name)?;
        let mut values = Vec::with_capacity(count);
        for index in 0..count {
            values.push(self.arg_at(name, index)?);
        }
        Ok(values)
    }

    /// The program name captured from `args[0]` of the last parse call.
    pub fn program_name(&self) -> Option<&str> {
        self.program_name.as_deref()
    }

    /// Read access to the declared schema, for help rendering.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Print the one-line usage text to stdout.
    pub fn print_usage(&self) {
        print!("{}", help::render_usage(self.display_name(), &self.schema));
    }

    /// Print the full help text to stdout.
    pub fn print_help(&self) {
        print!("{}", help::render_help(self.display_name(), &self.schema));
    }

    fn display_name(&self) -> &str {
        self.program_name.as_deref().unwrap_or("program")
    }

    fn lookup_optional(&self, name: &str) -> Result<&Optional> {
        self.schema.optional(name).ok_or_else(|| {
            Error::from(LogicError::UnknownArgument {
                name: name.to_string(),
            })
        })
    }

    fn arg_value<T: FromArg>(&self, name: &str, index: usize, default: Option<T>) -> Result<T> {
        if let Some(optional) = self.schema.optional(name) {
            return optional.convert_at(index, default);
        }
        if let Some(positional) = self.schema.positional(name) {
            return positional.convert_at(index, default);
        }
        Err(LogicError::UnknownArgument {
            name: name.to_string(),
        }
        .into())
    }
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConversionError, LogicError, UsageError};

    fn to_args(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn parsed(parser: &mut ArgumentParser, args: &[&str]) -> Vec<String> {
        match parser.try_parse(&to_args(args)).unwrap() {
            ParseOutcome::Parsed(leftover) => leftover,
            ParseOutcome::HelpRequested => panic!("unexpected help short-circuit"),
        }
    }

    fn scenario_parser() -> ArgumentParser {
        let mut parser = ArgumentParser::new();
        parser.add_positional("file").unwrap();
        parser
            .add_optional_with_flag("-v", "--verbose", OptionKind::Flag)
            .unwrap();
        parser
            .add_optional_with_flag("-o", "--output", OptionKind::Single)
            .unwrap();
        parser
            .add_optional_with_flag("-f", "--filter", OptionKind::Append)
            .unwrap();
        parser
            .add_optional("--single-opt", OptionKind::Single)
            .unwrap();
        parser
    }

    #[test]
    fn test_scenario_interleaved() {
        let mut parser = scenario_parser();
        let leftover = parsed(&mut parser, &["prog", "-v", "input.txt", "-o", "out.txt"]);
        assert!(leftover.is_empty());
        assert_eq!(parser.arg::<String>("file").unwrap(), "input.txt");
        assert!(parser.arg::<bool>("verbose").unwrap());
        assert_eq!(parser.arg::<String>("output").unwrap(), "out.txt");
        assert_eq!(parser.program_name(), Some("prog"));
    }

    #[test]
    fn test_positional_count_boundaries() {
        let mut parser = ArgumentParser::new();
        parser.add_positional("param1").unwrap();
        parser.add_positional("param2").unwrap();

        assert_eq!(
            parser.try_parse(&to_args(&["prog", "arg1"])).unwrap_err(),
            Error::Usage(UsageError::MissingPositional {
                name: "param2".to_string()
            })
        );

        let leftover = parsed(&mut parser, &["prog", "arg1", "arg2"]);
        assert!(leftover.is_empty());
        assert_eq!(parser.arg::<String>("param1").unwrap(), "arg1");
        assert_eq!(parser.arg::<String>("param2").unwrap(), "arg2");

        let leftover = parsed(&mut parser, &["prog", "arg1", "arg2", "arg3"]);
        assert_eq!(leftover, vec!["arg3"]);
    }

    #[test]
    fn test_missing_value_mentions_option() {
        let mut parser = scenario_parser();
        let err = parser.try_parse(&to_args(&["prog", "--output"])).unwrap_err();
        assert_eq!(
            err,
            Error::Usage(UsageError::MissingValue {
                name: "output".to_string()
            })
        );
        assert!(err.to_string().contains("output"));
    }

    #[test]
    fn test_append_round_trip() {
        let mut parser = scenario_parser();
        parsed(&mut parser, &["prog", "x", "-f", "a", "-f", "b"]);
        assert_eq!(parser.arg_count("filter").unwrap(), 2);
        assert_eq!(parser.arg_at::<String>("filter", 0).unwrap(), "a");
        assert_eq!(parser.arg_at::<String>("filter", 1).unwrap(), "b");
        assert_eq!(
            parser.args::<String>("filter").unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
        assert_eq!(
            parser.arg_at::<String>("filter", 2).unwrap_err(),
            Error::Logic(LogicError::IndexOutOfRange {
                name: "filter".to_string(),
                index: 2
            })
        );
    }

    #[test]
    fn test_flag_defaults_and_counts() {
        let mut parser = scenario_parser();
        parsed(&mut parser, &["prog", "x", "-v"]);
        assert!(parser.has_arg("verbose").unwrap());
        assert_eq!(parser.arg_count("verbose").unwrap(), 1);

        // An absent flag is data, not an error.
        let mut parser = scenario_parser();
        parsed(&mut parser, &["prog", "x"]);
        assert!(!parser.has_arg("verbose").unwrap());
        assert!(!parser.arg::<bool>("verbose").unwrap());
        assert!(parser.arg_or::<bool>("verbose", true).unwrap());
    }

    #[test]
    fn test_single_defaults() {
        let mut parser = scenario_parser();
        parsed(&mut parser, &["prog", "x"]);
        assert_eq!(
            parser.arg::<i32>("single-opt").unwrap_err(),
            Error::Logic(LogicError::NoDefaultAvailable {
                name: "single-opt".to_string()
            })
        );
        assert_eq!(parser.arg_or::<i32>("single-opt", 42).unwrap(), 42);
    }

    #[test]
    fn test_unknown_name_retrieval() {
        let mut parser = scenario_parser();
        parsed(&mut parser, &["prog", "x"]);
        assert_eq!(
            parser.arg::<String>("unknown").unwrap_err(),
            Error::Logic(LogicError::UnknownArgument {
                name: "unknown".to_string()
            })
        );
        assert!(parser.has_arg("nope").is_err());
        // has_arg/arg_count resolve optionals only.
        assert!(parser.has_arg("file").is_err());
    }

    #[test]
    fn test_retrieval_is_idempotent() {
        let mut parser = scenario_parser();
        parsed(&mut parser, &["prog", "x", "-o", "77"]);
        assert_eq!(parser.arg::<u32>("output").unwrap(), 77);
        assert_eq!(parser.arg::<u32>("output").unwrap(), 77);
    }

    #[test]
    fn test_unsigned_retrieval_rejects_negative() {
        let mut parser = scenario_parser();
        parsed(&mut parser, &["prog", "-5"]);
        assert!(matches!(
            parser.arg::<u32>("file").unwrap_err(),
            Error::Usage(UsageError::Conversion(ConversionError::OutOfRange { .. }))
        ));
        assert_eq!(parser.arg::<i32>("file").unwrap(), -5);
        assert_eq!(parser.arg::<String>("file").unwrap(), "-5");
    }

    #[test]
    fn test_positional_index_must_be_zero() {
        let mut parser = scenario_parser();
        parsed(&mut parser, &["prog", "x"]);
        assert_eq!(parser.arg_at::<String>("file", 0).unwrap(), "x");
        assert_eq!(
            parser.arg_at::<String>("file", 1).unwrap_err(),
            Error::Logic(LogicError::IndexOutOfRange {
                name: "file".to_string(),
                index: 1
            })
        );
    }

    #[test]
    fn test_reparse_clears_stale_option_values() {
        let mut parser = scenario_parser();
        parsed(&mut parser, &["prog", "x", "-v", "-f", "a"]);
        assert!(parser.has_arg("verbose").unwrap());
        assert_eq!(parser.arg_count("filter").unwrap(), 1);

        parsed(&mut parser, &["prog", "y"]);
        assert!(!parser.has_arg("verbose").unwrap());
        assert_eq!(parser.arg_count("filter").unwrap(), 0);
        assert_eq!(parser.arg::<String>("file").unwrap(), "y");
    }

    #[test]
    fn test_help_outcome_leaves_values_untouched() {
        let mut parser = scenario_parser();
        parsed(&mut parser, &["prog", "x", "-v"]);
        let outcome = parser.try_parse(&to_args(&["prog", "--help"])).unwrap();
        assert_eq!(outcome, ParseOutcome::HelpRequested);
        // Values from the previous parse are still readable.
        assert!(parser.has_arg("verbose").unwrap());
        assert_eq!(parser.arg::<String>("file").unwrap(), "x");
    }

    #[test]
    fn test_conversion_matrix_on_positionals() {
        let mut parser = ArgumentParser::new();
        parser.add_positional("barg").unwrap();
        parser.add_positional("carg").unwrap();
        parser.add_positional("uiarg").unwrap();
        parser.add_positional("darg").unwrap();
        parser.add_positional("sarg").unwrap();
        parsed(
            &mut parser,
            &["prog", "true", "r", "77", "-9.5", "abc123"],
        );

        assert!(parser.arg::<bool>("barg").unwrap());
        assert!(parser.arg::<char>("barg").is_err());
        assert!(parser.arg::<u32>("barg").is_err());
        assert_eq!(parser.arg::<String>("barg").unwrap(), "true");

        assert_eq!(parser.arg::<char>("carg").unwrap(), 'r');
        assert!(parser.arg::<bool>("carg").is_err());

        assert_eq!(parser.arg::<u32>("uiarg").unwrap(), 77);
        assert_eq!(parser.arg::<i64>("uiarg").unwrap(), 77);
        assert_eq!(parser.arg::<f64>("uiarg").unwrap(), 77.0);

        assert_eq!(parser.arg::<f64>("darg").unwrap(), -9.5);
        assert!(parser.arg::<i32>("darg").is_err());
        assert!(parser.arg::<u32>("darg").is_err());

        assert_eq!(parser.arg::<String>("sarg").unwrap(), "abc123");
        assert!(parser.arg::<f64>("sarg").is_err());
        assert!(parser.arg::<i32>("sarg").is_err());
    }
}
