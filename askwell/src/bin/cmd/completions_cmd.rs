use clap::{Arg, ArgMatches, Command};
use clap_complete::{generate, Generator, Shell};

pub fn command() -> Command {
    Command::new("completions")
        .about("Generate shell completion scripts")
        .arg(
            Arg::new("shell")
                .help("Shell to generate completions for: bash, zsh, fish, elvish, powershell")
                .required(true)
                .value_parser(clap::value_parser!(Shell)),
        )
}

pub fn run(matches: &ArgMatches, app: &mut Command) -> askwell::CmdExit {
    let Some(shell) = matches.get_one::<Shell>("shell").copied() else {
        return askwell::CmdExit {
            code: exitcode::USAGE,
            message: Some("Supported shells: bash, zsh, fish, elvish, powershell".to_string()),
        };
    };

    generate_completions(shell, app);
    askwell::CmdExit {
        code: exitcode::OK,
        message: None,
    }
}

fn generate_completions(gen: impl Generator, app: &mut Command) {
    generate(gen, app, "askwell", &mut std::io::stdout());
}
