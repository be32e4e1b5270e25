//! # Estate Share Calculator CLI
//!
//! Collects an estate input record (JSON file, flags or interactive prompts),
//! runs the share calculation and prints a localized report.
//!
//! ```text
//! estate --total-assets 60000 --parents both --sons 1 --daughters 1
//! estate --input estate.json --format json
//! estate --interactive --language french --currency "€"
//! ```

mod config;
mod i18n;
mod logger;
mod prompt;
mod report;

use std::fs;
use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use estate_core::{distribute, CalcError, EstateInput};

use crate::config::{AppConfig, CliArgs, FileConfig, OutputFormat};

fn load_input(args: &CliArgs) -> Result<EstateInput> {
    let base = match &args.input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading input file {}", path.display()))?;
            EstateInput::from_json(&text)?
        }
        None => EstateInput::default(),
    };
    let input = args.apply_overrides(base);

    if args.interactive {
        println!("Estate Share Calculator");
        println!("=======================");
        println!();
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        return prompt::prompt_input(&mut stdin.lock(), &mut stdout, input);
    }
    Ok(input)
}

fn run(args: &CliArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let config = AppConfig::resolve(args, &file_config);
    tracing::debug!(?config, "resolved configuration");

    let input = load_input(args)?;
    tracing::debug!(?input, "estate input");

    let distribution = distribute(&input, &config.settings)?;
    tracing::info!(
        heirs = distribution.heirs.len(),
        net_estate = distribution.net_estate.value(),
        "calculation complete"
    );

    match config.format {
        OutputFormat::Text => {
            print!("{}", report::render_text(config.language, &config.currency, &distribution));
        }
        OutputFormat::Json => {
            let json = report::render_json(config.language, &distribution)
                .context("serializing report")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logger::init_cli_logger(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<CalcError>() {
            Some(calc) => {
                tracing::error!(code = calc.error_code(), "calculation failed: {calc}");
                eprintln!("Error: {calc}");
                if let Ok(json) = serde_json::to_string_pretty(calc) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{json}");
                }
                ExitCode::from(1)
            }
            None => {
                tracing::error!("{err:#}");
                eprintln!("Error: {err:#}");
                ExitCode::from(2)
            }
        },
    }
}
