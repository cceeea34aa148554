use clap::{crate_version, Arg, Command};

pub fn command() -> Command {
    Command::new("askwell")
        .version(crate_version!())
        .about("Ask validated questions from shell scripts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log")
                .long("log")
                .help("Set logging level (overrides ASKWELL_LOG)")
                .value_name("LEVEL")
                .value_parser(["off", "trace", "debug", "info", "warn", "error"])
                .ignore_case(true)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration folder")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("module")
                .long("module")
                .help("Module id used to pick the farewell message")
                .value_name("ID")
                .global(true),
        )
}
