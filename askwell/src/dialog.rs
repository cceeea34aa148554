use requestty::{ErrorKind, Question};

use crate::error::{Error, Result};

/// Selection index meaning "leave the configuration alone".
pub const RESET_CANCEL: usize = 2;

/// prompt select option
///
/// `^C` and `Esc` count as [`RESET_CANCEL`].
///
/// # Errors
///
/// Will return `Err` when interact error
pub fn reset_config() -> Result<usize> {
    let answer = requestty::prompt_one(
        Question::raw_select("reset")
            .message("Reset configuration will restore the default farewells and validators. Select how to continue...")
            .choices(vec![
                "Yes, i want to override the current configuration",
                "Override and backup the existing file",
                "Cancel Or ^C",
            ])
            .build(),
    );

    match answer {
        Ok(answer) => answer
            .as_list_item()
            .map(|item| item.index)
            .ok_or_else(|| Error::Prompt("select option is empty".to_string())),
        Err(ErrorKind::Interrupted | ErrorKind::Aborted | ErrorKind::Eof) => Ok(RESET_CANCEL),
        Err(ErrorKind::IoError(err)) => Err(Error::Io(err)),
        #[allow(unreachable_patterns)]
        Err(err) => Err(Error::Prompt(format!("{err:?}"))),
    }
}
