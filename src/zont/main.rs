use clap::{CommandFactory, Parser};
use colored::*;
use zont::error::{Result, ZontError};

mod args;
mod cli;

use args::{Cli, ConversionRequest};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.tui {
        return cli::tui::run_session();
    }

    if cli.conversion.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let request = ConversionRequest::from_words(&cli.conversion).ok_or(ZontError::Usage)?;
    cli::run_conversion(&request)
}
