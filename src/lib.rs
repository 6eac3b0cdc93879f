//! argot — command-line argument declaration, parsing, and typed retrieval.
//!
//! A host program declares positional and optional arguments (flags,
//! single-value, and append options), hands over its argument vector, and
//! reads each value back converted to a primitive type, with optional
//! defaults and generated usage/help text.
//!
//! # Example
//!
//! ```
//! use argot::{ArgumentParser, OptionKind, ParseOutcome};
//!
//! let mut parser = ArgumentParser::new();
//! parser.add_positional("file")?.help("input file to read");
//! parser.add_optional_with_flag("-v", "--verbose", OptionKind::Flag)?;
//! parser.add_optional_with_flag("-o", "--output", OptionKind::Single)?;
//!
//! let args: Vec<String> = ["prog", "-v", "input.txt", "-o", "out.txt"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let outcome = parser.try_parse(&args)?;
//! assert_eq!(outcome, ParseOutcome::Parsed(vec![]));
//!
//! assert_eq!(parser.arg::<String>("file")?, "input.txt");
//! assert!(parser.arg::<bool>("verbose")?);
//! assert!(parser.arg_or::<u32>("retries", 3).is_err()); // never declared
//! # Ok::<(), argot::Error>(())
//! ```

pub mod constants;
pub mod convert;
pub mod error;
pub mod help;
mod matcher;
pub mod names;
pub mod parser;
pub mod schema;

pub use convert::FromArg;
pub use error::{ConversionError, Error, LogicError, Result, UsageError};
pub use parser::{ArgumentParser, ParseOutcome};
pub use schema::{OptionKind, Optional, Positional, Schema};
