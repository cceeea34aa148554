use askwell::{
    CmdExit, Extract, Prompter, Result, ReturnType, SelectRequest, DEFAULT_SELECT_MESSAGE,
};
use clap::{Arg, ArgAction, ArgMatches, Command};

pub fn command() -> Command {
    Command::new("select")
        .about("Show a menu and print the extracted part of the chosen option")
        .arg(
            Arg::new("choices")
                .help("Menu options (A., B., C. when omitted)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("message")
                .long("message")
                .short('m')
                .help("Prompt message")
                .default_value(DEFAULT_SELECT_MESSAGE),
        )
        .arg(
            Arg::new("whole")
                .long("whole")
                .help("Answer with the whole option")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["start", "end"]),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .help("First character of the answer (0 based)")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .help("Character after the last one of the answer")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("return-type")
                .long("return-type")
                .short('r')
                .help("Answer type: text, integer, float or boolean")
                .default_value("text"),
        )
}

pub fn run(matches: &ArgMatches, prompter: &Prompter<'_>) -> Result<CmdExit> {
    let message = matches
        .get_one::<String>("message")
        .map_or(DEFAULT_SELECT_MESSAGE, String::as_str);

    let start = matches.get_one::<usize>("start").copied();
    let end = matches.get_one::<usize>("end").copied();
    let extract = if matches.get_flag("whole") {
        Extract::whole()
    } else {
        match (start, end) {
            (None, None) => Extract::first_char(),
            (start, Some(end)) => Extract::range(start.unwrap_or(0), end),
            (Some(start), None) => Extract::starting_at(start),
        }
    };

    let return_type = matches
        .get_one::<String>("return-type")
        .map_or(Ok(ReturnType::Text), |r| ReturnType::from_string(r))?;

    let mut request = SelectRequest::new(message)
        .extract(extract)
        .return_type(return_type);
    if let Some(choices) = matches.get_many::<String>("choices") {
        request = request.choices(choices.cloned());
    }

    let answer = prompter.ask_select(request)?;
    println!("{answer}");
    Ok(CmdExit {
        code: exitcode::OK,
        message: None,
    })
}
