//! Term types and typed values.

use std::fmt;

/// The declared type of an option or argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermType {
    Int,
    Float,
    Str,
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TermType::Int => "int",
            TermType::Float => "float",
            TermType::Str => "string",
        };
        f.write_str(name)
    }
}

/// A parsed term value. The tag always matches the declared [`TermType`] of
/// the term it was recorded for, so getters check the tag instead of assuming
/// it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TermValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl TermValue {
    pub(crate) fn as_int(&self) -> Option<i64> {
        match self {
            TermValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub(crate) fn as_float(&self) -> Option<f64> {
        match self {
            TermValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub(crate) fn as_str(&self) -> Option<&str> {
        match self {
            TermValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Converts a raw token into a value of the given type. Strings always
/// convert; integers and floats require the whole token to parse.
pub(crate) fn coerce(ty: TermType, raw: &str) -> Option<TermValue> {
    match ty {
        TermType::Str => Some(TermValue::Str(raw.to_string())),
        TermType::Int => raw.parse::<i64>().ok().map(TermValue::Int),
        TermType::Float => raw.parse::<f64>().ok().map(TermValue::Float),
    }
}
