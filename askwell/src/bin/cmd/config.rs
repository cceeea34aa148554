use askwell::{CmdExit, Config, Result, Settings};
use clap::{Arg, ArgAction, ArgMatches, Command};

pub fn command() -> Command {
    Command::new("config")
        .about("Manage askwell configuration")
        .subcommand(Command::new("show").about("Show current configuration"))
        .subcommand(Command::new("reset").about("Reset configuration to defaults"))
        .subcommand(
            Command::new("farewell")
                .about("Set or remove the farewell of a module")
                .arg(Arg::new("module").help("Module id").required(true))
                .arg(
                    Arg::new("message")
                        .help("Farewell message")
                        .required_unless_present("remove"),
                )
                .arg(
                    Arg::new("remove")
                        .long("remove")
                        .help("Remove the module farewell")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("message"),
                ),
        )
        .subcommand(
            Command::new("validator")
                .about("Add or replace a named pattern validator")
                .arg(Arg::new("name").help("Validator name").required(true))
                .arg(Arg::new("pattern").help("Regular expression").required(true)),
        )
}

pub fn run(matches: &ArgMatches, config: &Config) -> Result<CmdExit> {
    matches.subcommand().map_or_else(
        || run_show(config),
        |tup| match tup {
            ("show", _) => run_show(config),
            ("reset", _) => Ok(run_reset(config, None)),
            ("farewell", sub) => {
                let module = sub.get_one::<String>("module").map_or("", String::as_str);
                if sub.get_flag("remove") {
                    run_remove_farewell(config, module)
                } else {
                    let message = sub.get_one::<String>("message").map_or("", String::as_str);
                    run_farewell(config, module, message)
                }
            }
            ("validator", sub) => {
                let name = sub.get_one::<String>("name").map_or("", String::as_str);
                let pattern = sub.get_one::<String>("pattern").map_or("", String::as_str);
                run_validator(config, name, pattern)
            }
            _ => unreachable!(),
        },
    )
}

pub fn run_reset(config: &Config, force_selection: Option<usize>) -> CmdExit {
    match config.reset_config(force_selection) {
        Ok(()) => CmdExit {
            code: exitcode::OK,
            message: Some("askwell configuration reset successfully".to_string()),
        },
        Err(e) => CmdExit {
            code: exitcode::CONFIG,
            message: Some(format!("reset settings error: {e}")),
        },
    }
}

pub fn run_show(config: &Config) -> Result<CmdExit> {
    let settings = config.get_settings_from_file()?;
    println!("{}", format_settings_display(&settings, config));
    Ok(CmdExit {
        code: exitcode::OK,
        message: None,
    })
}

fn format_settings_display(settings: &Settings, config: &Config) -> String {
    let mut lines = vec![
        format!("config:           {}", config.setting_file_path.display()),
        String::new(),
        format!("default_farewell: {}", settings.default_farewell),
        format!("error_report:     {}", settings.error_report),
        format!("exit_pause_ms:    {}", settings.exit_pause_ms),
        String::new(),
        "farewells:".to_string(),
    ];
    if settings.farewells.is_empty() {
        lines.push("  (none)".to_string());
    }
    for (module, message) in &settings.farewells {
        lines.push(format!("  {module}: {message}"));
    }

    lines.push(String::new());
    lines.push("validators:".to_string());
    if settings.validators.is_empty() {
        lines.push("  (none)".to_string());
    }
    for (name, validator) in &settings.validators {
        lines.push(format!("  {name}: {}", validator.pattern.as_str()));
    }
    lines.join("\n")
}

fn run_farewell(config: &Config, module: &str, message: &str) -> Result<CmdExit> {
    config.update_farewell(module, message)?;
    Ok(CmdExit {
        code: exitcode::OK,
        message: Some(format!("farewell for `{module}` updated")),
    })
}

fn run_remove_farewell(config: &Config, module: &str) -> Result<CmdExit> {
    if config.remove_farewell(module)? {
        Ok(CmdExit {
            code: exitcode::OK,
            message: Some(format!("farewell for `{module}` removed")),
        })
    } else {
        Ok(CmdExit {
            code: exitcode::DATAERR,
            message: Some(format!("no farewell configured for `{module}`")),
        })
    }
}

fn run_validator(config: &Config, name: &str, pattern: &str) -> Result<CmdExit> {
    config.update_validator(name, pattern)?;
    Ok(CmdExit {
        code: exitcode::OK,
        message: Some(format!("validator `{name}` saved")),
    })
}
