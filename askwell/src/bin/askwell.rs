mod cmd;

use std::process::exit;

use askwell::{Config, Prompter, RealProcess, RequesttyRenderer};
use console::Style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV: &str = "ASKWELL_LOG";

fn main() {
    let mut app = cmd::default::command()
        .subcommand(cmd::text_cmd::command())
        .subcommand(cmd::select_cmd::command())
        .subcommand(cmd::confirm_cmd::command())
        .subcommand(cmd::config::command())
        .subcommand(cmd::completions_cmd::command());

    let matches = app.clone().get_matches();

    init_logging(matches.get_one::<String>("log").map(String::as_str));

    let renderer = RequesttyRenderer;
    let process = RealProcess;

    let config = match Config::new(matches.get_one::<String>("config").map(String::as_str)) {
        Ok(config) => config,
        Err(err) => {
            Prompter::new(&renderer, &process).exit_error(&format!("Loading config error: {err}"))
        }
    };

    let settings = match config.get_settings_from_file() {
        Ok(settings) => settings,
        Err(err) => Prompter::new(&renderer, &process).exit_error(&format!(
            "Could not load config from file. Try resolving by running `{}`\nError: {err}",
            Style::new().bold().italic().apply_to("askwell config reset")
        )),
    };

    let prompter = Prompter::from_settings(&renderer, &process, &settings);
    let prompter = match matches.get_one::<String>("module") {
        Some(module) => prompter.with_module(module),
        None => prompter,
    };

    let res = match matches.subcommand() {
        Some(("text", subcommand_matches)) => {
            cmd::text_cmd::run(subcommand_matches, &prompter, &settings)
        }
        Some(("select", subcommand_matches)) => cmd::select_cmd::run(subcommand_matches, &prompter),
        Some(("confirm", subcommand_matches)) => {
            cmd::confirm_cmd::run(subcommand_matches, &prompter)
        }
        Some(("config", subcommand_matches)) => cmd::config::run(subcommand_matches, &config),
        Some(("completions", subcommand_matches)) => {
            Ok(cmd::completions_cmd::run(subcommand_matches, &mut app))
        }
        _ => unreachable!(),
    };

    match res {
        Ok(cmd) => {
            if let Some(message) = cmd.message {
                let style = if exitcode::is_success(cmd.code) {
                    Style::new().green()
                } else {
                    Style::new().red()
                };
                eprintln!("{}", style.apply_to(message));
            }
            exit(cmd.code)
        }
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            prompter.exit_error(&format!("{}\n{err}", settings.error_report))
        }
    }
}

/// `--log` wins over `ASKWELL_LOG`; without either only warnings are shown.
fn init_logging(level: Option<&str>) {
    let filter = level.map_or_else(
        || EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
