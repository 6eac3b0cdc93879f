// src/constants.rs

/// Reference name of the implicitly registered help option.
pub const HELP_LONG_NAME: &str = "help";

/// Flag character of the implicitly registered help option.
pub const HELP_FLAG: char = 'h';

/// Help text attached to the implicit help option.
pub const HELP_TEXT: &str = "display this help text";

/// Sentinel value recorded when a flag-kind option is present.
pub const FLAG_PRESENT: &str = "true";

/// Sentinel value converted when an absent flag-kind option is retrieved.
pub const FLAG_ABSENT: &str = "false";

/// Column width of the name column in the positional-arguments help section.
pub const POSITIONAL_TEXT_WIDTH: usize = 20;

/// Column width of the name column in the options help section.
pub const OPTION_TEXT_WIDTH: usize = 30;
