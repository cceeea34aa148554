//! Prompt façade
//!
//! [`Prompter`] ties the validator registry, a [`Renderer`] and a
//! [`Process`] together. Each `ask_*` call resolves its configuration
//! first (bad configuration is returned as an error before anything is
//! shown), runs the renderer through the cancellation interceptor and
//! converts the accepted answer.

use std::time::Duration;

use askwell_core::{
    choice, Answer, Extract, FarewellTable, ReturnType, ValidationSpec, DEFAULT_ERROR_REPORT,
    DEFAULT_FAREWELL,
};
use tracing::debug;

use crate::{
    config::Settings,
    error::Result,
    interceptor::{self, OnCancel},
    process::{Process, EXIT_ERROR, EXIT_OK},
    renderer::Renderer,
};

/// Message used by a menu when the caller gives none.
pub const DEFAULT_SELECT_MESSAGE: &str = "Choose one of the following options:";
/// Pause before exiting so the last message can be read.
pub const DEFAULT_EXIT_PAUSE: Duration = Duration::from_secs(1);

/// A free text prompt.
pub struct PromptRequest<'a> {
    message: String,
    spec: ValidationSpec,
    return_type: Option<ReturnType>,
    trim: bool,
    on_cancel: Option<OnCancel<'a, Answer>>,
}

impl<'a> PromptRequest<'a> {
    /// Non-empty text, trimmed, returned as text.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            spec: ValidationSpec::NonEmpty,
            return_type: None,
            trim: true,
            on_cancel: None,
        }
    }

    #[must_use]
    pub fn spec(mut self, spec: ValidationSpec) -> Self {
        self.spec = spec;
        self
    }

    /// Use a historical validation code (`"1.0"`, `"2.0"` ... `"3.2"`)
    /// with float bounds.
    ///
    /// # Errors
    /// when the code is unknown or the bounds are invalid
    pub fn validation(self, code: &str, min: f64, max: f64) -> Result<Self> {
        Ok(self.spec(ValidationSpec::from_code(code, min, max)?))
    }

    /// Shortcut for a [`ValidationSpec::custom`] predicate.
    #[must_use]
    pub fn validate<F>(self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.spec(ValidationSpec::custom(predicate))
    }

    /// Without this, numeric specs return their own numeric type and
    /// everything else returns text.
    #[must_use]
    pub const fn return_type(mut self, return_type: ReturnType) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Whether surrounding whitespace is removed from a text answer.
    #[must_use]
    pub const fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, callback: impl FnOnce() -> Answer + 'a) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }

    /// The answer type this request produces.
    #[must_use]
    pub fn resolved_return_type(&self) -> ReturnType {
        self.return_type
            .unwrap_or_else(|| self.spec.kind().implied_return_type())
    }
}

/// A single choice menu.
pub struct SelectRequest<'a> {
    message: String,
    choices: Option<Vec<String>>,
    extract: Extract,
    return_type: ReturnType,
    on_cancel: Option<OnCancel<'a, Answer>>,
}

impl Default for SelectRequest<'_> {
    fn default() -> Self {
        Self::new(DEFAULT_SELECT_MESSAGE)
    }
}

impl<'a> SelectRequest<'a> {
    /// Menu over `A.`, `B.`, `C.` answering with the first character of
    /// the chosen option.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            choices: None,
            extract: Extract::first_char(),
            return_type: ReturnType::Text,
            on_cancel: None,
        }
    }

    #[must_use]
    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub const fn extract(mut self, extract: Extract) -> Self {
        self.extract = extract;
        self
    }

    #[must_use]
    pub const fn return_type(mut self, return_type: ReturnType) -> Self {
        self.return_type = return_type;
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, callback: impl FnOnce() -> Answer + 'a) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }
}

/// A yes/no question.
pub struct ConfirmRequest<'a> {
    message: String,
    default_answer: bool,
    on_cancel: Option<OnCancel<'a, bool>>,
}

impl<'a> ConfirmRequest<'a> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default_answer: false,
            on_cancel: None,
        }
    }

    /// Answer highlighted before the user moves. Defaults to `false`.
    #[must_use]
    pub const fn default_answer(mut self, answer: bool) -> Self {
        self.default_answer = answer;
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, callback: impl FnOnce() -> bool + 'a) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }
}

/// Validated prompts with a uniform cancel-and-exit protocol.
///
/// Build one per program (or per logical module with
/// [`Prompter::with_module`]) and pass it to the code that needs to ask
/// questions.
#[derive(Clone)]
pub struct Prompter<'a> {
    renderer: &'a dyn Renderer,
    process: &'a dyn Process,
    farewells: FarewellTable,
    module: Option<String>,
    default_farewell: String,
    error_report: String,
    exit_pause: Duration,
}

impl<'a> Prompter<'a> {
    pub fn new(renderer: &'a dyn Renderer, process: &'a dyn Process) -> Self {
        Self {
            renderer,
            process,
            farewells: FarewellTable::default(),
            module: None,
            default_farewell: DEFAULT_FAREWELL.to_string(),
            error_report: DEFAULT_ERROR_REPORT.to_string(),
            exit_pause: DEFAULT_EXIT_PAUSE,
        }
    }

    /// Prompter configured from the user settings file.
    #[must_use]
    pub fn from_settings(
        renderer: &'a dyn Renderer,
        process: &'a dyn Process,
        settings: &Settings,
    ) -> Self {
        Self::new(renderer, process)
            .farewells(settings.farewell_table())
            .default_farewell(&settings.default_farewell)
            .error_report(&settings.error_report)
            .exit_pause(Duration::from_millis(settings.exit_pause_ms))
    }

    #[must_use]
    pub fn farewells(mut self, farewells: FarewellTable) -> Self {
        self.farewells = farewells;
        self
    }

    #[must_use]
    pub fn default_farewell(mut self, message: &str) -> Self {
        self.default_farewell = message.to_string();
        self
    }

    #[must_use]
    pub fn error_report(mut self, report: &str) -> Self {
        self.error_report = report.to_string();
        self
    }

    #[must_use]
    pub const fn exit_pause(mut self, pause: Duration) -> Self {
        self.exit_pause = pause;
        self
    }

    /// A copy of this prompter speaking for `module`. Its farewell is
    /// looked up under that id.
    #[must_use]
    pub fn with_module(&self, module: &str) -> Self {
        let mut prompter = self.clone();
        prompter.module = Some(module.to_string());
        prompter
    }

    #[must_use]
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// Ask for free text and return it as the requested type.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::Core`] when the spec cannot produce
    /// the requested return type or is impossible to satisfy, and
    /// renderer errors as is.
    pub fn ask_text(&self, request: PromptRequest<'_>) -> Result<Answer> {
        let return_type = request.resolved_return_type();
        let PromptRequest {
            message,
            spec,
            trim,
            on_cancel,
            ..
        } = request;

        let gate = spec.gate(return_type)?;
        debug!(message = %message, spec = ?spec, return_type = %return_type, "asking for text");

        interceptor::intercept(
            || {
                let reply = self.renderer.ask_text(&message, &|input: &str| gate(input))?;
                reply.try_map(|raw| {
                    let raw = if trim { raw.trim() } else { raw.as_str() };
                    Ok(Answer::convert(raw, return_type)?)
                })
            },
            on_cancel,
            || self.exit(),
        )
    }

    /// Show a menu and answer with the extracted part of the chosen option.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::Core`] for an empty menu or when an
    /// option cannot produce the requested return type.
    pub fn ask_select(&self, request: SelectRequest<'_>) -> Result<Answer> {
        let SelectRequest {
            message,
            choices,
            extract,
            return_type,
            on_cancel,
        } = request;

        let choices = choice::resolve_choices(choices)?;
        choice::check_choices(&choices, &extract, return_type)?;
        debug!(message = %message, choices = ?choices, extract = ?extract, "asking for selection");

        interceptor::intercept(
            || {
                let reply = self.renderer.ask_select(&message, &choices)?;
                reply.try_map(|selected| Ok(extract.answer(&selected, return_type)?))
            },
            on_cancel,
            || self.exit(),
        )
    }

    /// Ask a yes/no question.
    ///
    /// # Errors
    /// Returns renderer errors.
    pub fn ask_confirm(&self, request: ConfirmRequest<'_>) -> Result<bool> {
        let ConfirmRequest {
            message,
            default_answer,
            on_cancel,
        } = request;
        debug!(message = %message, default_answer, "asking for confirmation");

        interceptor::intercept(
            || self.renderer.ask_confirm(&message, default_answer),
            on_cancel,
            || self.exit(),
        )
    }

    /// Non-empty, trimmed text.
    ///
    /// # Errors
    /// Returns renderer errors.
    pub fn text(&self, message: &str) -> Result<String> {
        let answer = self.ask_text(PromptRequest::new(message))?;
        Ok(answer.to_string())
    }

    /// A whole number in `min..=max`.
    ///
    /// # Errors
    /// Returns a configuration error when `min > max`.
    pub fn integer(&self, message: &str, min: i64, max: i64) -> Result<i64> {
        let answer = self
            .ask_text(PromptRequest::new(message).spec(ValidationSpec::IntInRange { min, max }))?;
        answer
            .as_integer()
            .ok_or_else(|| mismatch(&answer, ReturnType::Integer))
    }

    /// A decimal number in `min..=max`.
    ///
    /// # Errors
    /// Returns a configuration error when the range is empty or NaN.
    pub fn float(&self, message: &str, min: f64, max: f64) -> Result<f64> {
        let answer = self
            .ask_text(PromptRequest::new(message).spec(ValidationSpec::FloatInRange { min, max }))?;
        answer
            .as_float()
            .ok_or_else(|| mismatch(&answer, ReturnType::Float))
    }

    /// Menu answering with the first character of the chosen option.
    ///
    /// # Errors
    /// Returns a configuration error for an empty menu.
    pub fn select<S: Into<String>>(&self, message: &str, choices: Vec<S>) -> Result<String> {
        let answer = self.ask_select(SelectRequest::new(message).choices(choices))?;
        Ok(answer.to_string())
    }

    /// Yes/no question defaulting to no.
    ///
    /// # Errors
    /// Returns renderer errors.
    pub fn confirm(&self, message: &str) -> Result<bool> {
        self.ask_confirm(ConfirmRequest::new(message))
    }

    /// Print the farewell for this prompter's module (or the configured
    /// default), pause and exit with status 0.
    pub fn exit(&self) -> ! {
        self.exit_with(&self.default_farewell)
    }

    /// Like [`Prompter::exit`] with `message` as the fallback farewell. A
    /// module entry in the farewell table still wins.
    pub fn exit_with(&self, message: &str) -> ! {
        let farewell = self.farewells.lookup(self.module.as_deref(), message);
        debug!(module = ?self.module, farewell, "exiting");
        self.process.print(farewell, true);
        self.process.pause(self.exit_pause);
        self.process.terminate(EXIT_OK)
    }

    /// Print `report`, pause and exit with status 1.
    pub fn exit_error(&self, report: &str) -> ! {
        debug!(report, "exiting with error");
        self.process.print(report, false);
        self.process.pause(self.exit_pause);
        self.process.terminate(EXIT_ERROR)
    }

    /// [`Prompter::exit_error`] with the configured error report.
    pub fn abort(&self) -> ! {
        self.exit_error(&self.error_report)
    }
}

fn mismatch(answer: &Answer, return_type: ReturnType) -> crate::error::Error {
    askwell_core::Error::Conversion {
        value: answer.to_string(),
        return_type,
    }
    .into()
}
