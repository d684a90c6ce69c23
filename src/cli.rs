use clap::{Parser, Subcommand};
use prometheus::Registry;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use crate::config::Settings;
use crate::engine::{CipherEngine, Report};
use crate::errors::AppError;
use crate::menu::run_menu;
use crate::metrics::{self, Metrics};

#[derive(Parser)]
#[command(name = "caesar-cipher", version)]
#[command(about = "Caesar cipher over a 40-symbol Cyrillic alphabet, with key recovery")]
pub struct Cli {
    /// TOML settings file (defaults to ./caesar.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the operation report as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Dump prometheus metrics to stderr before exiting
    #[arg(long, global = true)]
    pub print_metrics: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a file with a known key
    Encrypt {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short, long, allow_negative_numbers = true)]
        key: i64,
    },
    /// Decrypt a file with a known key
    Decrypt {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short, long, allow_negative_numbers = true)]
        key: i64,
    },
    /// Try every key until the output contains the sample text
    BruteForce {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short, long)]
        sample: Option<PathBuf>,
    },
    /// Pick the key whose output best matches the sample's symbol frequencies
    Analyze {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short, long)]
        sample: Option<PathBuf>,
    },
    /// Interactive numbered menu (default when no command is given)
    Menu,
}

pub fn run(cli: Cli, settings: &Settings) -> Result<(), AppError> {
    let registry = Registry::new();
    let engine = CipherEngine::new(settings).with_metrics(Metrics::new(&registry)?);

    let report = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Encrypt { input, output, key } => engine.encrypt_file(&input, &output, key)?,
        Commands::Decrypt { input, output, key } => engine.decrypt_file(&input, &output, key)?,
        Commands::BruteForce {
            input,
            output,
            sample,
        } => engine.brute_force_file(&input, &output, sample.as_deref())?,
        Commands::Analyze {
            input,
            output,
            sample,
        } => engine.statistical_analysis_file(&input, &output, sample.as_deref())?,
        Commands::Menu => {
            info!("starting interactive menu");
            let stdin = io::stdin();
            run_menu(&engine, stdin.lock(), io::stdout())?;
            return finish(cli.print_metrics, &registry);
        }
    };

    print_report(&report, cli.json)?;
    finish(cli.print_metrics, &registry)
}

fn print_report(report: &Report, json: bool) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(report)?)?;
    } else {
        writeln!(stdout, "{}", report)?;
    }
    Ok(())
}

fn finish(print_metrics: bool, registry: &Registry) -> Result<(), AppError> {
    if print_metrics {
        eprint!("{}", metrics::render(registry)?);
    }
    Ok(())
}
