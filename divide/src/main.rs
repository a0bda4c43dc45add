use std::process::ExitCode;

use clap::Parser;
use divide::cli::{self, Cli};
use divide::config::Config;
use divide::{DivideError, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, config_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::from_env(), Some(e)),
    };
    logging::init(&config.log_level);

    // A broken config file only costs the log settings.
    if let Some(e) = config_err {
        tracing::warn!("{e}, using defaults");
    }

    match cli::run(&cli, &mut std::io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(&e, cli.json),
    }
}

fn fail(err: &DivideError, json: bool) -> ExitCode {
    tracing::debug!(kind = err.kind(), "exiting with error");

    if let Err(e) = cli::report(
        err,
        json,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    ) {
        tracing::debug!("failed to report error: {e}");
    }
    ExitCode::from(err.exit_code())
}
