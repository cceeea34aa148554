/// Outcome of a CLI command: the process exit code and an optional message
/// printed before exiting.
#[derive(Debug)]
pub struct CmdExit {
    pub code: exitcode::ExitCode,
    pub message: Option<String>,
}
