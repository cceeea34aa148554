//! Process boundary: printing the last message, pausing and exiting.

use std::{
    any::Any,
    cell::RefCell,
    io::{self, Write},
    panic::{self, AssertUnwindSafe},
    thread,
    time::Duration,
};

use console::Style;

/// Exit status for a normal end, including a user cancellation.
pub const EXIT_OK: exitcode::ExitCode = exitcode::OK;
/// Exit status for an internal or configuration error.
pub const EXIT_ERROR: exitcode::ExitCode = 1;

/// The calls made on the way out of the program.
pub trait Process {
    /// Print the final message. `success` selects the styling.
    fn print(&self, message: &str, success: bool);

    fn pause(&self, duration: Duration);

    /// End the process with `code`.
    fn terminate(&self, code: exitcode::ExitCode) -> !;
}

/// Production [`Process`].
pub struct RealProcess;

impl Process for RealProcess {
    fn print(&self, message: &str, success: bool) {
        // stdout carries answers, so the last message goes to stderr
        let _ = write_message(&mut io::stderr().lock(), message, success);
    }

    fn pause(&self, duration: Duration) {
        thread::sleep(duration);
    }

    fn terminate(&self, code: exitcode::ExitCode) -> ! {
        std::process::exit(code)
    }
}

/// Write the final message, green on success and red otherwise.
///
/// # Errors
/// Returns the error from `out`.
pub fn write_message(out: &mut impl Write, message: &str, success: bool) -> io::Result<()> {
    let style = if success {
        Style::new().green()
    } else {
        Style::new().red()
    };
    writeln!(out, "\n{}", style.apply_to(message))
}

/// Unwind payload used by [`MockProcess::terminate`] in place of a real exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockExit {
    pub code: exitcode::ExitCode,
}

/// A recording [`Process`] for tests. Nothing is printed, nothing sleeps and
/// `terminate` unwinds with a [`MockExit`] instead of ending the test
/// binary. Use [`catch_exit`] to observe it.
#[derive(Debug, Default)]
pub struct MockProcess {
    /// `(message, success)` for every print.
    pub printed: RefCell<Vec<(String, bool)>>,
    pub pauses: RefCell<Vec<Duration>>,
    pub exit_codes: RefCell<Vec<exitcode::ExitCode>>,
}

impl Process for MockProcess {
    fn print(&self, message: &str, success: bool) {
        self.printed.borrow_mut().push((message.to_string(), success));
    }

    fn pause(&self, duration: Duration) {
        self.pauses.borrow_mut().push(duration);
    }

    fn terminate(&self, code: exitcode::ExitCode) -> ! {
        self.exit_codes.borrow_mut().push(code);
        panic::resume_unwind(Box::new(MockExit { code }))
    }
}

/// Run `f`, turning a [`MockProcess`] exit into `Err(MockExit)`. Any other
/// panic keeps unwinding.
///
/// # Errors
/// Returns the exit raised by [`MockProcess::terminate`].
pub fn catch_exit<T>(f: impl FnOnce() -> T) -> Result<T, MockExit> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload: Box<dyn Any + Send>| {
        match payload.downcast::<MockExit>() {
            Ok(exit) => *exit,
            Err(other) => panic::resume_unwind(other),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_terminate_is_caught() {
        let process = MockProcess::default();
        let result = catch_exit(|| {
            process.print("bye", true);
            process.terminate(EXIT_OK)
        });
        let exit: MockExit = result.expect_err("terminated");
        assert_eq!(exit.code, EXIT_OK);
        assert_eq!(*process.exit_codes.borrow(), vec![EXIT_OK]);
        assert_eq!(*process.printed.borrow(), vec![("bye".to_string(), true)]);
    }

    #[test]
    fn final_message_is_written_on_its_own_line() {
        let mut out = Vec::new();
        write_message(&mut out, "Thanks for using!", true).expect("written");
        write_message(&mut out, "Something went wrong!", false).expect("written");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with('\n'));
        assert!(text.contains("Thanks for using!"));
        assert!(text.contains("Something went wrong!"));
        assert_eq!(text.lines().filter(|line| !line.is_empty()).count(), 2);
    }

    #[test]
    fn catch_exit_passes_values_through() {
        assert_eq!(catch_exit(|| 5), Ok(5));
    }
}
