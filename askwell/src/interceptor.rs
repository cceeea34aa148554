//! Cancellation interceptor
//!
//! Wraps one renderer call. An answer passes through unchanged. A
//! cancellation runs the caller's `on_cancel` callback when there is one
//! (it may return a substitute value or exit on its own), otherwise the
//! default exit routine. The wrapped call is made exactly once; asking
//! again after a cancellation is up to the caller.

use tracing::debug;

use crate::{error::Result, renderer::Reply};

/// Callback run instead of the default exit when the user cancels.
pub type OnCancel<'a, T> = Box<dyn FnOnce() -> T + 'a>;

/// Run `prompt` and resolve its reply.
///
/// `default_exit` is usually a call to a diverging exit routine such as
/// [`crate::Prompter::exit`].
///
/// # Errors
/// Returns the error from `prompt`. Cancellation is never an error.
pub fn intercept<'a, T, P, X>(
    prompt: P,
    on_cancel: Option<OnCancel<'a, T>>,
    default_exit: X,
) -> Result<T>
where
    P: FnOnce() -> Result<Reply<T>>,
    X: FnOnce() -> T,
{
    match prompt()? {
        Reply::Answered(value) => {
            debug!("prompt answered");
            Ok(value)
        }
        Reply::Cancelled => {
            if let Some(callback) = on_cancel {
                debug!("prompt cancelled, running on_cancel callback");
                Ok(callback())
            } else {
                debug!("prompt cancelled, running default exit");
                Ok(default_exit())
            }
        }
    }
}
