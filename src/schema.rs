// src/schema.rs

//! The argument schema: every declared positional and optional argument, in
//! registration order, plus the flag alias table.
//!
//! The schema owns all per-argument storage. The matcher reads it to classify
//! tokens, the parser writes matched values back into it, and the help
//! renderer iterates it in registration order.

use crate::constants::{FLAG_ABSENT, HELP_FLAG, HELP_LONG_NAME, HELP_TEXT};
use crate::convert::FromArg;
use crate::error::{Error, LogicError, Result};
use crate::names;
use indexmap::IndexMap;
use std::collections::HashMap;

/// How many values an optional argument may legally carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Presence only; retrieval converts `"true"` when present and `"false"`
    /// when absent.
    Flag,
    /// At most one occurrence, carrying exactly one value.
    Single,
    /// Any number of occurrences, each appending one value.
    Append,
}

/// A declared positional argument and, after parsing, its value.
#[derive(Debug, Clone)]
pub struct Positional {
    name: String,
    help_text: String,
    value: Option<String>,
}

impl Positional {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            help_text: String::new(),
            value: None,
        }
    }

    /// The argument's name, as registered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The help text attached to this argument.
    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    /// Set the help text shown for this argument in the program help.
    pub fn help(&mut self, text: impl Into<String>) -> &mut Self {
        self.help_text = text.into();
        self
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = Some(value);
    }

    /// Convert the stored value at `index` (which must be 0; positionals hold
    /// exactly one value) falling back to `default` when unparsed.
    pub(crate) fn convert_at<T: FromArg>(
        &self,
        index: usize,
        default: Option<T>,
    ) -> Result<T> {
        if index != 0 {
            return Err(LogicError::IndexOutOfRange {
                name: self.name.clone(),
                index,
            }
            .into());
        }
        match &self.value {
            Some(raw) => Ok(T::from_arg(&self.name, raw)?),
            None => default.ok_or_else(|| {
                Error::from(LogicError::NoDefaultAvailable {
                    name: self.name.clone(),
                })
            }),
        }
    }
}

/// A declared optional argument and, after parsing, its recorded values.
#[derive(Debug, Clone)]
pub struct Optional {
    name: String,
    flag: Option<char>,
    kind: OptionKind,
    help_text: String,
    values: Vec<String>,
}

impl Optional {
    fn new(name: &str, kind: OptionKind) -> Self {
        Self {
            name: name.to_string(),
            flag: None,
            kind,
            help_text: String::new(),
            values: Vec::new(),
        }
    }

    /// The reference name (long name without dashes), as registered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The single-character flag alias, if one was registered.
    pub fn flag(&self) -> Option<char> {
        self.flag
    }

    /// The option's arity kind.
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// The help text attached to this argument.
    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    /// Set the help text shown for this argument in the program help.
    pub fn help(&mut self, text: impl Into<String>) -> &mut Self {
        self.help_text = text.into();
        self
    }

    /// Whether the user supplied this option at least once.
    pub fn exists(&self) -> bool {
        !self.values.is_empty()
    }

    /// Number of values recorded for this option.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn set_values(&mut self, values: Vec<String>) {
        self.values = values;
    }

    pub(crate) fn clear_values(&mut self) {
        self.values.clear();
    }

    /// Convert the recorded value at `index`.
    ///
    /// When values exist, `index` must address one of them; a default never
    /// papers over a bad index. When no values exist, the default wins, then
    /// flag-kind absence converts `"false"`, then `NoDefaultAvailable`.
    pub(crate) fn convert_at<T: FromArg>(
        &self,
        index: usize,
        default: Option<T>,
    ) -> Result<T> {
        if self.exists() {
            let raw = self.values.get(index).ok_or_else(|| {
                Error::from(LogicError::IndexOutOfRange {
                    name: self.name.clone(),
                    index,
                })
            })?;
            return Ok(T::from_arg(&self.name, raw)?);
        }
        if let Some(default) = default {
            return Ok(default);
        }
        if self.kind == OptionKind::Flag {
            return Ok(T::from_arg(&self.name, FLAG_ABSENT)?);
        }
        Err(LogicError::NoDefaultAvailable {
            name: self.name.clone(),
        }
        .into())
    }
}

/// The registry of declared arguments.
///
/// Positional names and optional reference names share one namespace. Both
/// maps iterate in registration order, which is what the help renderer and
/// the "missing positional" diagnostics rely on.
#[derive(Debug, Clone)]
pub struct Schema {
    positionals: IndexMap<String, Positional>,
    optionals: IndexMap<String, Optional>,
    flags: HashMap<char, String>,
}

impl Default for Schema {
    /// An empty schema with the reserved `-h`/`--help` flag pre-registered.
    fn default() -> Self {
        let mut help = Optional::new(HELP_LONG_NAME, OptionKind::Flag);
        help.flag = Some(HELP_FLAG);
        help.help(HELP_TEXT);

        let mut optionals = IndexMap::new();
        optionals.insert(HELP_LONG_NAME.to_string(), help);
        let mut flags = HashMap::new();
        flags.insert(HELP_FLAG, HELP_LONG_NAME.to_string());

        Self {
            positionals: IndexMap::new(),
            optionals,
            flags,
        }
    }
}

impl Schema {
    /// Declare a positional argument with the given name.
    ///
    /// Returns a handle that can be used to attach help text. Fails with
    /// `InvalidPositionalName` for malformed names and `DuplicateName` when
    /// the name is already taken by any argument.
    pub fn add_positional(&mut self, name: &str) -> Result<&mut Positional> {
        if !names::is_valid_positional_name(name) {
            return Err(LogicError::InvalidPositionalName {
                name: name.to_string(),
            }
            .into());
        }
        if self.positionals.contains_key(name) || self.optionals.contains_key(name) {
            return Err(LogicError::DuplicateName {
                name: name.to_string(),
            }
            .into());
        }
        log::debug!("registering positional argument '{}'", name);
        Ok(self
            .positionals
            .entry(name.to_string())
            .or_insert_with(|| Positional::new(name)))
    }

    /// Declare an optional argument with the given long name (`-name` or
    /// `--name`) and kind. The reference name is the long name without its
    /// leading dashes.
    pub fn add_optional(&mut self, long_name: &str, kind: OptionKind) -> Result<&mut Optional> {
        let name = self.insert_optional(long_name, kind)?;
        self.lookup_optional_mut(name)
    }

    /// Declare an optional argument with a flag alias (`-x`) in addition to
    /// its long name.
    ///
    /// Flag validity and uniqueness are checked before the long name is
    /// registered, so a bad flag leaves the schema untouched.
    pub fn add_optional_with_flag(
        &mut self,
        flag: &str,
        long_name: &str,
        kind: OptionKind,
    ) -> Result<&mut Optional> {
        let Some(flag_char) = names::format_flag(flag) else {
            return Err(LogicError::InvalidFlag {
                name: flag.to_string(),
            }
            .into());
        };
        if self.flags.contains_key(&flag_char) {
            return Err(LogicError::DuplicateFlag { flag: flag_char }.into());
        }
        let name = self.insert_optional(long_name, kind)?;
        self.flags.insert(flag_char, name.clone());
        let optional = self.lookup_optional_mut(name)?;
        optional.flag = Some(flag_char);
        Ok(optional)
    }

    /// Validate a long-name token and insert the definition, returning the
    /// bare reference name.
    fn insert_optional(&mut self, long_name: &str, kind: OptionKind) -> Result<String> {
        let Some(name) = names::format_long_name(long_name) else {
            return Err(LogicError::InvalidOptionName {
                name: long_name.to_string(),
            }
            .into());
        };
        if self.positionals.contains_key(name) || self.optionals.contains_key(name) {
            return Err(LogicError::DuplicateName {
                name: name.to_string(),
            }
            .into());
        }
        log::debug!("registering optional argument '{}' ({:?})", name, kind);
        self.optionals
            .insert(name.to_string(), Optional::new(name, kind));
        Ok(name.to_string())
    }

    fn lookup_optional_mut(&mut self, name: String) -> Result<&mut Optional> {
        match self.optionals.get_mut(&name) {
            Some(optional) => Ok(optional),
            None => Err(LogicError::UnknownArgument { name }.into()),
        }
    }

    /// Resolve a flag character to its optional's reference name.
    pub fn resolve_flag(&self, flag: char) -> Option<&str> {
        self.flags.get(&flag).map(String::as_str)
    }

    /// Look up a positional argument by name.
    pub fn positional(&self, name: &str) -> Option<&Positional> {
        self.positionals.get(name)
    }

    /// Look up an optional argument by reference name.
    pub fn optional(&self, name: &str) -> Option<&Optional> {
        self.optionals.get(name)
    }

    pub(crate) fn optional_mut(&mut self, name: &str) -> Option<&mut Optional> {
        self.optionals.get_mut(name)
    }

    pub(crate) fn positional_mut(&mut self, name: &str) -> Option<&mut Positional> {
        self.positionals.get_mut(name)
    }

    /// Number of declared positional arguments.
    pub fn positional_count(&self) -> usize {
        self.positionals.len()
    }

    /// Name of the declared positional at `index` in registration order.
    pub(crate) fn positional_name_at(&self, index: usize) -> Option<&str> {
        self.positionals
            .get_index(index)
            .map(|(name, _)| name.as_str())
    }

    /// Iterate the declared positionals in registration order.
    pub fn positionals(&self) -> impl Iterator<Item = &Positional> {
        self.positionals.values()
    }

    /// Iterate the declared optionals in registration order.
    pub fn optionals(&self) -> impl Iterator<Item = &Optional> {
        self.optionals.values()
    }

    /// Whether any optional arguments are declared (the implicit help option
    /// counts, so this is true for every default-constructed schema).
    pub fn has_optionals(&self) -> bool {
        !self.optionals.is_empty()
    }
}

// MARK: --- UNIT TESTS ---
