//! Typed error types for askwell.

/// All errors produced by the askwell library.
///
/// Cancelling a prompt is not an error; it is resolved by the cancellation
/// interceptor before a result reaches the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid prompt configuration: unknown validation, impossible range,
    /// unsupported return type, empty menu.
    #[error(transparent)]
    Core(#[from] askwell_core::Error),

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Prompt(String),
}

/// A `Result` alias where the error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
