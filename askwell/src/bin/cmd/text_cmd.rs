use askwell::{
    CmdExit, PromptRequest, Prompter, Result, ReturnType, Settings, ValidationKind, ValidationSpec,
};
use clap::{Arg, ArgAction, ArgMatches, Command};

pub fn command() -> Command {
    Command::new("text")
        .about("Ask for free text and print the accepted answer")
        .arg(Arg::new("message").help("Prompt message").required(true))
        .arg(
            Arg::new("validation")
                .long("validation")
                .short('v')
                .help("Validation name (non-empty, int-range, ...) or code (1.0, 2.0, ... 3.2)")
                .default_value("non-empty"),
        )
        .arg(
            Arg::new("validator")
                .long("validator")
                .help("Named pattern validator from the settings file")
                .conflicts_with("validation"),
        )
        .arg(
            Arg::new("min")
                .long("min")
                .help("Lower bound for range validations")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("max")
                .long("max")
                .help("Upper bound for range validations")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("return-type")
                .long("return-type")
                .short('r')
                .help("Answer type: text, integer, float or boolean"),
        )
        .arg(
            Arg::new("no-trim")
                .long("no-trim")
                .help("Keep surrounding whitespace in text answers")
                .action(ArgAction::SetTrue),
        )
}

pub fn run(matches: &ArgMatches, prompter: &Prompter<'_>, settings: &Settings) -> Result<CmdExit> {
    let message = matches
        .get_one::<String>("message")
        .map_or("", String::as_str);

    let spec = match matches.get_one::<String>("validator") {
        Some(name) => settings.validator(name)?,
        None => {
            let kind = matches
                .get_one::<String>("validation")
                .map_or(Ok(ValidationKind::default()), |v| {
                    ValidationKind::from_string(v)
                })?;
            let min = matches
                .get_one::<f64>("min")
                .copied()
                .unwrap_or(f64::NEG_INFINITY);
            let max = matches
                .get_one::<f64>("max")
                .copied()
                .unwrap_or(f64::INFINITY);
            ValidationSpec::from_kind(kind, min, max)?
        }
    };

    let mut request = PromptRequest::new(message)
        .spec(spec)
        .trim(!matches.get_flag("no-trim"));
    if let Some(return_type) = matches.get_one::<String>("return-type") {
        request = request.return_type(ReturnType::from_string(return_type)?);
    }

    let answer = prompter.ask_text(request)?;
    println!("{answer}");
    Ok(CmdExit {
        code: exitcode::OK,
        message: None,
    })
}
