//! Validator registry
//!
//! Maps a [`ValidationSpec`] to a predicate over the raw text typed by the
//! user. The prompt renderer keeps asking until the predicate accepts, so
//! every rule here must be pure: the same input always gives the same
//! answer.

use std::{fmt, sync::Arc};

use regex::Regex;
use strum::{EnumIter, IntoEnumIterator};

use crate::{
    answer::{self, ReturnType},
    numeric, Error, Result,
};

/// A custom acceptance rule. `true` accepts the input.
pub type Validator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Names the acceptance rule without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum ValidationKind {
    Any,
    #[default]
    NonEmpty,
    IntRange,
    IntAtLeast,
    IntAtMost,
    FloatRange,
    FloatAtLeast,
    FloatAtMost,
    Custom,
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Any => "any",
            Self::NonEmpty => "non-empty",
            Self::IntRange => "int-range",
            Self::IntAtLeast => "int-at-least",
            Self::IntAtMost => "int-at-most",
            Self::FloatRange => "float-range",
            Self::FloatAtLeast => "float-at-least",
            Self::FloatAtMost => "float-at-most",
            Self::Custom => "custom",
        };
        write!(f, "{s}")
    }
}

impl ValidationKind {
    /// Numeric code for the kind. Codes `1.0` to `3.2` are the historical
    /// ones; `Custom` has no code because it needs a predicate.
    #[must_use]
    pub const fn code(self) -> Option<&'static str> {
        match self {
            Self::Any => Some("0"),
            Self::NonEmpty => Some("1.0"),
            Self::IntRange => Some("2.0"),
            Self::IntAtLeast => Some("2.1"),
            Self::IntAtMost => Some("2.2"),
            Self::FloatRange => Some("3.0"),
            Self::FloatAtLeast => Some("3.1"),
            Self::FloatAtMost => Some("3.2"),
            Self::Custom => None,
        }
    }

    /// Resolve a numeric code such as `"2.1"`.
    ///
    /// # Errors
    /// when the code is not one of the known codes
    pub fn from_code(code: &str) -> Result<Self> {
        let code = code.trim();
        // "2" and "2.0" name the same kind
        let normalized = if code.contains('.') || code == "0" {
            code.to_string()
        } else {
            format!("{code}.0")
        };
        Self::iter()
            .find(|kind| kind.code() == Some(normalized.as_str()))
            .ok_or_else(|| Error::UnsupportedValidationCode {
                code: code.to_string(),
            })
    }

    /// Resolve a kind by its name (`int-range`) or by its numeric code.
    ///
    /// # Errors
    /// when the string is neither a known name nor a known code
    pub fn from_string(str: &str) -> Result<Self> {
        let lower = str.trim().to_lowercase();
        if let Some(kind) = Self::iter().find(|kind| kind.to_string() == lower) {
            return Ok(kind);
        }
        if lower.starts_with(|c: char| c.is_ascii_digit()) {
            return Self::from_code(&lower);
        }
        Err(Error::UnsupportedValidationName {
            name: str.to_string(),
        })
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::IntRange | Self::IntAtLeast | Self::IntAtMost)
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(
            self,
            Self::FloatRange | Self::FloatAtLeast | Self::FloatAtMost
        )
    }

    /// The answer type a numeric kind produces when the caller did not ask
    /// for one explicitly.
    #[must_use]
    pub const fn implied_return_type(self) -> ReturnType {
        if self.is_integer() {
            ReturnType::Integer
        } else if self.is_float() {
            ReturnType::Float
        } else {
            ReturnType::Text
        }
    }

    /// Whether an accepted answer of this kind can be returned as
    /// `return_type`.
    #[must_use]
    pub const fn supports(self, return_type: ReturnType) -> bool {
        match (self, return_type) {
            (_, ReturnType::Text) => true,
            (Self::Any, _) => false,
            (_, ReturnType::Float) => true,
            (kind, ReturnType::Integer) => !kind.is_float(),
            (kind, ReturnType::Boolean) => !kind.is_integer() && !kind.is_float(),
        }
    }
}

/// Which acceptance rule applies to one text prompt.
#[derive(Clone, Default)]
pub enum ValidationSpec {
    /// Accept everything, including an empty answer.
    Any,
    /// Reject answers that are empty after trimming.
    #[default]
    NonEmpty,
    IntInRange { min: i64, max: i64 },
    IntAtLeast { min: i64 },
    IntAtMost { max: i64 },
    FloatInRange { min: f64, max: f64 },
    FloatAtLeast { min: f64 },
    FloatAtMost { max: f64 },
    /// Caller supplied predicate, called with the raw input.
    Custom(Validator),
}

impl fmt::Debug for ValidationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "Any"),
            Self::NonEmpty => write!(f, "NonEmpty"),
            Self::IntInRange { min, max } => write!(f, "IntInRange({min}..={max})"),
            Self::IntAtLeast { min } => write!(f, "IntAtLeast({min})"),
            Self::IntAtMost { max } => write!(f, "IntAtMost({max})"),
            Self::FloatInRange { min, max } => write!(f, "FloatInRange({min}..={max})"),
            Self::FloatAtLeast { min } => write!(f, "FloatAtLeast({min})"),
            Self::FloatAtMost { max } => write!(f, "FloatAtMost({max})"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl ValidationSpec {
    /// Build a spec from a kind and float bounds. Unused bounds are
    /// ignored; integer kinds round their bounds inward.
    ///
    /// # Errors
    /// when the kind is `Custom` (it needs a predicate, see
    /// [`ValidationSpec::custom`]) or the bounds are invalid
    pub fn from_kind(kind: ValidationKind, min: f64, max: f64) -> Result<Self> {
        // rounding would turn a NaN bound into 0
        let nan_bound = match kind {
            ValidationKind::IntRange => min.is_nan() || max.is_nan(),
            ValidationKind::IntAtLeast => min.is_nan(),
            ValidationKind::IntAtMost => max.is_nan(),
            _ => false,
        };
        if nan_bound {
            return Err(Error::InvalidRange { min, max });
        }
        let spec = match kind {
            ValidationKind::Any => Self::Any,
            ValidationKind::NonEmpty => Self::NonEmpty,
            ValidationKind::IntRange => Self::IntInRange {
                min: numeric::lower_int_bound(min),
                max: numeric::upper_int_bound(max),
            },
            ValidationKind::IntAtLeast => Self::IntAtLeast {
                min: numeric::lower_int_bound(min),
            },
            ValidationKind::IntAtMost => Self::IntAtMost {
                max: numeric::upper_int_bound(max),
            },
            ValidationKind::FloatRange => Self::FloatInRange { min, max },
            ValidationKind::FloatAtLeast => Self::FloatAtLeast { min },
            ValidationKind::FloatAtMost => Self::FloatAtMost { max },
            ValidationKind::Custom => {
                return Err(Error::UnsupportedValidationName {
                    name: kind.to_string(),
                })
            }
        };
        spec.check()?;
        Ok(spec)
    }

    /// Build a spec from a historical code (`"1.0"`, `"2.0"` ... `"3.2"`).
    ///
    /// # Errors
    /// when the code is unknown or the bounds are invalid
    pub fn from_code(code: &str, min: f64, max: f64) -> Result<Self> {
        Self::from_kind(ValidationKind::from_code(code)?, min, max)
    }

    /// Wrap a predicate.
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }

    /// A custom rule that accepts input matching `pattern`.
    #[must_use]
    pub fn matching(pattern: Regex) -> Self {
        Self::custom(move |input| pattern.is_match(input))
    }

    /// Compile `pattern` and wrap it with [`ValidationSpec::matching`].
    ///
    /// # Errors
    /// when the pattern does not compile
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Self::matching(Regex::new(pattern)?))
    }

    #[must_use]
    pub const fn kind(&self) -> ValidationKind {
        match self {
            Self::Any => ValidationKind::Any,
            Self::NonEmpty => ValidationKind::NonEmpty,
            Self::IntInRange { .. } => ValidationKind::IntRange,
            Self::IntAtLeast { .. } => ValidationKind::IntAtLeast,
            Self::IntAtMost { .. } => ValidationKind::IntAtMost,
            Self::FloatInRange { .. } => ValidationKind::FloatRange,
            Self::FloatAtLeast { .. } => ValidationKind::FloatAtLeast,
            Self::FloatAtMost { .. } => ValidationKind::FloatAtMost,
            Self::Custom(_) => ValidationKind::Custom,
        }
    }

    /// Reject specs that no input could ever satisfy.
    ///
    /// # Errors
    /// when a bound is NaN or `min` is greater than `max`
    #[allow(clippy::cast_precision_loss)]
    pub fn check(&self) -> Result<()> {
        let (min, max) = match *self {
            Self::IntInRange { min, max } if min > max => {
                return Err(Error::InvalidRange {
                    min: min as f64,
                    max: max as f64,
                });
            }
            Self::FloatInRange { min, max } => (min, max),
            Self::FloatAtLeast { min } => (min, f64::INFINITY),
            Self::FloatAtMost { max } => (f64::NEG_INFINITY, max),
            _ => return Ok(()),
        };
        if min.is_nan() || max.is_nan() || min > max {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(())
    }

    /// Whether `input` satisfies this rule.
    #[must_use]
    pub fn accepts(&self, input: &str) -> bool {
        match self {
            Self::Any => true,
            Self::NonEmpty => !input.trim().is_empty(),
            Self::IntInRange { min, max } => {
                numeric::parse_integer(input).is_some_and(|n| (*min..=*max).contains(&n))
            }
            Self::IntAtLeast { min } => numeric::parse_integer(input).is_some_and(|n| n >= *min),
            Self::IntAtMost { max } => numeric::parse_integer(input).is_some_and(|n| n <= *max),
            Self::FloatInRange { min, max } => {
                numeric::parse_float(input).is_some_and(|n| *min <= n && n <= *max)
            }
            Self::FloatAtLeast { min } => numeric::parse_float(input).is_some_and(|n| n >= *min),
            Self::FloatAtMost { max } => numeric::parse_float(input).is_some_and(|n| n <= *max),
            Self::Custom(predicate) => predicate(input),
        }
    }

    /// The acceptance predicate handed to the renderer for a prompt that
    /// returns `return_type`. Besides the rule itself the input must be
    /// convertible, so conversion after acceptance cannot fail.
    ///
    /// # Errors
    /// when this spec cannot produce `return_type`
    pub fn gate(&self, return_type: ReturnType) -> Result<Validator> {
        let kind = self.kind();
        if !kind.supports(return_type) {
            return Err(Error::UnsupportedReturnType { kind, return_type });
        }
        self.check()?;
        let spec = self.clone();
        Ok(Arc::new(move |input: &str| {
            spec.accepts(input) && answer::convertible(input, return_type)
        }))
    }
}
