// SPDX-License-Identifier: MIT
//
// dave-io binary.
//
//   flags → logging → capabilities → Card::render → stdout
//
// Any failure other than Ctrl-C prints the minimal card instead, so the
// user always sees something.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use card_term::terminal::{self, Capabilities};
use clap::Parser;
use dave_io::cli::Cli;
use dave_io::{Card, CardError, fallback};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if cli.plain {
        fallback::print(&mut stdout, VERSION).context("Failed to print card")?;
        return Ok(());
    }

    let caps = Capabilities::detect(cli.overrides());
    tracing::debug!(speed = cli.speed, gradient = %cli.gradient, "rendering card");

    if caps.animations {
        terminal::install_interrupt_handler();
    }

    Card::new(caps, cli.animation_config())
        .with_title_gradient(cli.title_gradient())
        .render(&mut stdout, &mut rand::rng())?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("dave-io: {e:#}");
    }

    let Err(e) = run(&cli) else {
        return ExitCode::SUCCESS;
    };

    if let Some(CardError::Interrupted) = e.downcast_ref::<CardError>() {
        let _ = io::stdout().flush();
        return ExitCode::from(CardError::Interrupted.exit_code());
    }

    tracing::warn!(error = %e, "full card failed, printing minimal card");
    match fallback::print(&mut io::stdout().lock(), VERSION) {
        Ok(()) => ExitCode::SUCCESS,
        Err(fallback_err) => {
            eprintln!("An error occurred: {e}");
            tracing::error!(error = %fallback_err, "minimal card failed");
            ExitCode::FAILURE
        }
    }
}
