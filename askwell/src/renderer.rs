//! Terminal rendering abstraction.
//!
//! The [`Renderer`] trait is the only place where a prompt touches the
//! terminal. The real application uses [`RequesttyRenderer`]; tests inject
//! [`MockRenderer`] with scripted answers.

use std::{cell::RefCell, collections::VecDeque};

use requestty::{ErrorKind, OnEsc, Question};
use tracing::debug;

use crate::error::{Error, Result};

/// Shown under a text prompt while the input is rejected.
const INVALID_ANSWER: &str = "invalid answer, try again...";

/// Result of one renderer call: a definite answer or a cancellation.
///
/// Cancellation is its own variant so an empty string or `false` is never
/// mistaken for "no answer".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Answered(T),
    Cancelled,
}

impl<T> Reply<T> {
    /// Map the answered value, keeping a cancellation as is.
    ///
    /// # Errors
    /// Returns the error produced by `f`.
    pub fn try_map<U, F>(self, f: F) -> Result<Reply<U>>
    where
        F: FnOnce(T) -> Result<U>,
    {
        match self {
            Self::Answered(value) => Ok(Reply::Answered(f(value)?)),
            Self::Cancelled => Ok(Reply::Cancelled),
        }
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Draws prompts and collects answers.
pub trait Renderer {
    /// Ask for free text. Must not return an answer until `accept` returns
    /// `true` for it; rejected input is re-prompted.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be used.
    fn ask_text(&self, message: &str, accept: &dyn Fn(&str) -> bool) -> Result<Reply<String>>;

    /// Let the user pick one of `choices`. The answer is the chosen element.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be used.
    fn ask_select(&self, message: &str, choices: &[String]) -> Result<Reply<String>>;

    /// Ask a yes/no question.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be used.
    fn ask_confirm(&self, message: &str, default: bool) -> Result<Reply<bool>>;
}

// ---------------------------------------------------------------------------
// Real implementation (used in production)
// ---------------------------------------------------------------------------

/// Production [`Renderer`] backed by `requestty`.
///
/// `^C`, `Esc` and end of input all count as a cancellation.
pub struct RequesttyRenderer;

impl RequesttyRenderer {
    fn resolve<T>(
        result: requestty::Result<requestty::Answer>,
        read: impl FnOnce(requestty::Answer) -> Option<T>,
    ) -> Result<Reply<T>> {
        match result {
            Ok(answer) => read(answer)
                .map(Reply::Answered)
                .ok_or_else(|| Error::Prompt("unexpected answer kind from prompt".to_string())),
            Err(ErrorKind::Interrupted | ErrorKind::Aborted | ErrorKind::Eof) => {
                debug!("prompt cancelled by the user");
                Ok(Reply::Cancelled)
            }
            Err(ErrorKind::IoError(err)) => Err(Error::Io(err)),
            #[allow(unreachable_patterns)]
            Err(err) => Err(Error::Prompt(format!("{err:?}"))),
        }
    }
}

impl Renderer for RequesttyRenderer {
    fn ask_text(&self, message: &str, accept: &dyn Fn(&str) -> bool) -> Result<Reply<String>> {
        let question = Question::input("text")
            .message(message)
            .validate(|input, _| {
                if accept(input) {
                    Ok(())
                } else {
                    Err(INVALID_ANSWER.to_string())
                }
            })
            .on_esc(OnEsc::Terminate)
            .build();

        Self::resolve(requestty::prompt_one(question), |answer| {
            answer.as_string().map(ToString::to_string)
        })
    }

    fn ask_select(&self, message: &str, choices: &[String]) -> Result<Reply<String>> {
        let question = Question::select("select")
            .message(message)
            .choices(choices.to_vec())
            .on_esc(OnEsc::Terminate)
            .build();

        Self::resolve(requestty::prompt_one(question), |answer| {
            answer
                .as_list_item()
                .and_then(|item| choices.get(item.index).cloned())
        })
    }

    fn ask_confirm(&self, message: &str, default: bool) -> Result<Reply<bool>> {
        let question = Question::confirm("confirm")
            .message(message)
            .default(default)
            .on_esc(OnEsc::Terminate)
            .build();

        Self::resolve(requestty::prompt_one(question), |answer| answer.as_bool())
    }
}

// ---------------------------------------------------------------------------
// Mock implementation (used in tests — zero terminal I/O)
// ---------------------------------------------------------------------------

/// A scripted [`Renderer`] for sandboxed testing.
///
/// Every queue holds the answers in the order they will be given; `None`
/// stands for a cancellation. Text answers rejected by the acceptance
/// predicate are recorded in `rejected_inputs` and the next scripted text
/// is tried, the same way a user would be asked again.
#[derive(Debug, Default)]
pub struct MockRenderer {
    pub texts: RefCell<VecDeque<Option<String>>>,
    pub selections: RefCell<VecDeque<Option<usize>>>,
    pub confirms: RefCell<VecDeque<Option<bool>>>,
    /// Every prompt message shown, in order.
    pub captured_messages: RefCell<Vec<String>>,
    pub captured_choices: RefCell<Vec<Vec<String>>>,
    pub rejected_inputs: RefCell<Vec<String>>,
}

impl MockRenderer {
    #[must_use]
    pub fn typing(self, input: &str) -> Self {
        self.texts.borrow_mut().push_back(Some(input.to_string()));
        self
    }

    #[must_use]
    pub fn selecting(self, index: usize) -> Self {
        self.selections.borrow_mut().push_back(Some(index));
        self
    }

    #[must_use]
    pub fn confirming(self, answer: bool) -> Self {
        self.confirms.borrow_mut().push_back(Some(answer));
        self
    }

    /// Cancel the next text prompt.
    #[must_use]
    pub fn cancelling_text(self) -> Self {
        self.texts.borrow_mut().push_back(None);
        self
    }

    #[must_use]
    pub fn cancelling_select(self) -> Self {
        self.selections.borrow_mut().push_back(None);
        self
    }

    #[must_use]
    pub fn cancelling_confirm(self) -> Self {
        self.confirms.borrow_mut().push_back(None);
        self
    }

    fn capture(&self, message: &str) {
        self.captured_messages.borrow_mut().push(message.to_string());
    }
}

fn script_exhausted(kind: &str) -> Error {
    Error::Prompt(format!("mock renderer has no scripted {kind} answer left"))
}

impl Renderer for MockRenderer {
    fn ask_text(&self, message: &str, accept: &dyn Fn(&str) -> bool) -> Result<Reply<String>> {
        self.capture(message);
        loop {
            let next = self.texts.borrow_mut().pop_front();
            match next {
                None => return Err(script_exhausted("text")),
                Some(None) => return Ok(Reply::Cancelled),
                Some(Some(input)) if accept(&input) => return Ok(Reply::Answered(input)),
                Some(Some(input)) => self.rejected_inputs.borrow_mut().push(input),
            }
        }
    }

    fn ask_select(&self, message: &str, choices: &[String]) -> Result<Reply<String>> {
        self.capture(message);
        self.captured_choices.borrow_mut().push(choices.to_vec());
        let next = self.selections.borrow_mut().pop_front();
        match next {
            None => Err(script_exhausted("select")),
            Some(None) => Ok(Reply::Cancelled),
            Some(Some(index)) => choices
                .get(index)
                .cloned()
                .map(Reply::Answered)
                .ok_or_else(|| Error::Prompt(format!("no choice at index {index}"))),
        }
    }

    fn ask_confirm(&self, message: &str, _default: bool) -> Result<Reply<bool>> {
        self.capture(message);
        let next = self.confirms.borrow_mut().pop_front();
        match next {
            None => Err(script_exhausted("confirm")),
            Some(None) => Ok(Reply::Cancelled),
            Some(Some(answer)) => Ok(Reply::Answered(answer)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_text_skips_rejected_input() {
        let renderer = MockRenderer::default().typing("-5").typing("abc").typing("25");
        let reply = renderer
            .ask_text("Age:", &|s| s.parse::<u8>().is_ok())
            .expect("scripted");
        assert_eq!(reply, Reply::Answered("25".to_string()));
        assert_eq!(*renderer.rejected_inputs.borrow(), vec!["-5", "abc"]);
    }

    #[test]
    fn mock_text_cancel_and_exhaustion() {
        let renderer = MockRenderer::default().cancelling_text();
        assert!(renderer
            .ask_text("Name:", &|_| true)
            .expect("scripted")
            .is_cancelled());
        assert!(matches!(
            renderer.ask_text("Name:", &|_| true),
            Err(Error::Prompt(_))
        ));
    }

    #[test]
    fn mock_select_returns_the_chosen_element() {
        let renderer = MockRenderer::default().selecting(1).selecting(9);
        let choices = vec!["Create".to_string(), "Edit".to_string()];
        assert_eq!(
            renderer.ask_select("Pick:", &choices).expect("scripted"),
            Reply::Answered("Edit".to_string())
        );
        assert!(renderer.ask_select("Pick:", &choices).is_err());
        assert_eq!(renderer.captured_choices.borrow().len(), 2);
    }

    #[test]
    fn try_map_keeps_cancellation() {
        let cancelled: Reply<String> = Reply::Cancelled;
        assert_eq!(
            cancelled.try_map(|s| Ok(s.len())).expect("no error"),
            Reply::Cancelled
        );
        assert_eq!(
            Reply::Answered("abc".to_string())
                .try_map(|s| Ok(s.len()))
                .expect("no error"),
            Reply::Answered(3)
        );
    }
}
