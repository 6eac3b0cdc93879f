// src/convert.rs

//! String-to-type conversion for retrieved argument values.
//!
//! All numeric semantics live here: every value is parsed through the widest
//! type of its domain (`u128`, `i128`, `f64`) and then range-checked against
//! the *target* type's bounds. Format errors are always reported before range
//! errors.

use crate::error::ConversionError;
use std::fmt::Display;
use std::num::IntErrorKind;

/// Types that an argument value can be retrieved as.
///
/// Implemented for `bool`, `char`, `String`, every primitive unsigned and
/// signed integer, and `f32`/`f64`. `field` is the argument's reference name
/// and only feeds error messages.
pub trait FromArg: Sized {
    /// Parse `value` into `Self`, naming `field` in any failure.
    fn from_arg(field: &str, value: &str) -> Result<Self, ConversionError>;
}

fn out_of_range<T: Display>(field: &str, min: T, max: T) -> ConversionError {
    ConversionError::OutOfRange {
        field: field.to_string(),
        min: min.to_string(),
        max: max.to_string(),
    }
}

impl FromArg for bool {
    fn from_arg(field: &str, value: &str) -> Result<Self, ConversionError> {
        match value {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ConversionError::InvalidBoolean {
                field: field.to_string(),
            }),
        }
    }
}

impl FromArg for char {
    fn from_arg(field: &str, value: &str) -> Result<Self, ConversionError> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ConversionError::InvalidChar {
                field: field.to_string(),
            }),
        }
    }
}

impl FromArg for String {
    fn from_arg(_field: &str, value: &str) -> Result<Self, ConversionError> {
        Ok(value.to_string())
    }
}

macro_rules! impl_from_arg_unsigned {
    ($($ty:ty),+ $(,)?) => {$(
        impl FromArg for $ty {
            fn from_arg(field: &str, value: &str) -> Result<Self, ConversionError> {
                // A minus sign anywhere is an out-of-range negative literal,
                // never a wraparound into a huge unsigned value.
                if value.contains('-') {
                    return Err(out_of_range(field, <$ty>::MIN, <$ty>::MAX));
                }
                let wide = value.parse::<u128>().map_err(|err| match err.kind() {
                    IntErrorKind::PosOverflow => out_of_range(field, <$ty>::MIN, <$ty>::MAX),
                    _ => ConversionError::NotIntegral {
                        field: field.to_string(),
                    },
                })?;
                <$ty>::try_from(wide).map_err(|_| out_of_range(field, <$ty>::MIN, <$ty>::MAX))
            }
        }
    )+};
}

macro_rules! impl_from_arg_signed {
    ($($ty:ty),+ $(,)?) => {$(
        impl FromArg for $ty {
            fn from_arg(field: &str, value: &str) -> Result<Self, ConversionError> {
                let wide = value.parse::<i128>().map_err(|err| match err.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        out_of_range(field, <$ty>::MIN, <$ty>::MAX)
                    }
                    _ => ConversionError::NotIntegral {
                        field: field.to_string(),
                    },
                })?;
                <$ty>::try_from(wide).map_err(|_| out_of_range(field, <$ty>::MIN, <$ty>::MAX))
            }
        }
    )+};
}

impl_from_arg_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_arg_signed!(i8, i16, i32, i64, i128, isize);

impl FromArg for f64 {
    fn from_arg(field: &str, value: &str) -> Result<Self, ConversionError> {
        value.parse::<Self>().map_err(|_| ConversionError::NotNumeric {
            field: field.to_string(),
        })
    }
}

impl FromArg for f32 {
    fn from_arg(field: &str, value: &str) -> Result<Self, ConversionError> {
        let wide = f64::from_arg(field, value)?;
        if wide < f64::from(Self::MIN) || wide > f64::from(Self::MAX) {
            return Err(out_of_range(field, Self::MIN, Self::MAX));
        }
        // Re-parse at the target width rather than casting down.
        value.parse::<Self>().map_err(|_| ConversionError::NotNumeric {
            field: field.to_string(),
        })
    }
}

// MARK: --- UNIT TESTS ---
