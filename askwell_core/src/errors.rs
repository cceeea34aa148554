use thiserror::Error;

use crate::answer::ReturnType;
use crate::validation::ValidationKind;

/// Configuration errors. These describe a mistake made by the integrator,
/// never by the person answering the prompt.
#[derive(Debug, Error)]
pub enum Error {
    #[error("given validation code not found: {code}")]
    UnsupportedValidationCode { code: String },

    #[error("given validation name not found: {name}")]
    UnsupportedValidationName { name: String },

    #[error("given return type not found: {name}")]
    InvalidReturnType { name: String },

    #[error("validation `{kind}` cannot produce a `{return_type}` answer")]
    UnsupportedReturnType {
        kind: ValidationKind,
        return_type: ReturnType,
    },

    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("a menu needs at least one choice")]
    EmptyChoices,

    #[error("could not convert `{value}` to {return_type}")]
    Conversion {
        value: String,
        return_type: ReturnType,
    },

    #[error("invalid validation pattern: {source}")]
    InvalidPattern {
        #[from]
        source: regex::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
