use askwell::{CmdExit, ConfirmRequest, Prompter, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};

/// Exit status for a "no" answer. `1` is taken by errors and `2` by clap
/// usage errors.
pub const EXIT_DECLINED: exitcode::ExitCode = 3;

pub fn command() -> Command {
    Command::new("confirm")
        .about("Ask a yes/no question. Exits with 0 on yes and 3 on no")
        .arg(Arg::new("message").help("Prompt message").required(true))
        .arg(
            Arg::new("default-yes")
                .long("default-yes")
                .help("Highlight yes as the default answer")
                .action(ArgAction::SetTrue),
        )
}

pub fn run(matches: &ArgMatches, prompter: &Prompter<'_>) -> Result<CmdExit> {
    let message = matches
        .get_one::<String>("message")
        .map_or("", String::as_str);

    let confirmed = prompter.ask_confirm(
        ConfirmRequest::new(message).default_answer(matches.get_flag("default-yes")),
    )?;
    Ok(CmdExit {
        code: if confirmed {
            exitcode::OK
        } else {
            EXIT_DECLINED
        },
        message: None,
    })
}
