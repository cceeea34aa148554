//! Typed answers and the conversion from accepted raw text.

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

use crate::{numeric, Error, Result};

/// The type a prompt hands back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum ReturnType {
    #[default]
    Text,
    Integer,
    Float,
    Boolean,
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
        };
        write!(f, "{s}")
    }
}

impl ReturnType {
    /// Convert return type string to enum
    ///
    /// # Errors
    /// when the given name is not supported
    pub fn from_string(str: &str) -> Result<Self> {
        let lower = str.trim().to_lowercase();
        Self::iter()
            .find(|t| t.to_string() == lower)
            .ok_or_else(|| Error::InvalidReturnType {
                name: str.to_string(),
            })
    }
}

/// A validated answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl Answer {
    /// Convert accepted raw text to `return_type`. Numbers and booleans
    /// are read from the trimmed text.
    ///
    /// # Errors
    /// when the text is not a valid value of `return_type`
    pub fn convert(raw: &str, return_type: ReturnType) -> Result<Self> {
        let converted = match return_type {
            ReturnType::Text => Some(Self::Text(raw.to_string())),
            ReturnType::Integer => numeric::parse_integer(raw).map(Self::Integer),
            ReturnType::Float => numeric::parse_float(raw).map(Self::Float),
            ReturnType::Boolean => parse_bool(raw).map(Self::Boolean),
        };
        converted.ok_or_else(|| Error::Conversion {
            value: raw.to_string(),
            return_type,
        })
    }

    #[must_use]
    pub const fn return_type(&self) -> ReturnType {
        match self {
            Self::Text(_) => ReturnType::Text,
            Self::Integer(_) => ReturnType::Integer,
            Self::Float(_) => ReturnType::Float,
            Self::Boolean(_) => ReturnType::Boolean,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Float value. Integer answers widen.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            Self::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Read a yes/no style answer.
#[must_use]
pub fn parse_bool(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Whether `input` converts to `return_type`.
#[must_use]
pub fn convertible(input: &str, return_type: ReturnType) -> bool {
    match return_type {
        ReturnType::Text => true,
        ReturnType::Integer => numeric::parse_integer(input).is_some(),
        ReturnType::Float => numeric::parse_float(input).is_some(),
        ReturnType::Boolean => parse_bool(input).is_some(),
    }
}
