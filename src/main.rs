mod cli;
mod commands;

use clap::Parser;
use client::Variant;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, OutputFormat};
use crate::commands::CliError;

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let variant = Variant::from(cli.variant);
    tracing::debug!(%variant, command = ?cli.command, "starting");

    match cli.command {
        Command::Routes => emit(cli.format, &commands::routes(variant)?),
        Command::Resolve { path } => emit(cli.format, &commands::resolve(variant, &path)?),
        Command::Walk { steps } => {
            let entries = commands::walk(variant, &steps)?;
            match cli.format {
                OutputFormat::Json => print_json(&entries),
                OutputFormat::Text => {
                    for entry in &entries {
                        println!("{entry}");
                    }
                    Ok(())
                }
            }
        }
        Command::Render { path } => {
            let html = commands::render(variant, &path)?;
            match cli.format {
                OutputFormat::Json => print_json(&serde_json::json!({ "path": path, "html": html })),
                OutputFormat::Text => {
                    println!("{html}");
                    Ok(())
                }
            }
        }
    }
}

fn emit<T: Serialize + std::fmt::Display>(format: OutputFormat, report: &T) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Text => {
            println!("{}", report.to_string().trim_end());
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
