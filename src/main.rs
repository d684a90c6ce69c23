use caesar_cipher::cli::{self, Cli};
use caesar_cipher::config::load_settings;
use caesar_cipher::errors::AppError;
use caesar_cipher::logger;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings = load_settings(cli.config.as_deref())?;
    logger::init_logging(&settings);
    cli::run(cli, &settings)
}
