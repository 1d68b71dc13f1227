//! cygen - Cypress test generation from recorded browser events
//!
//! Reads a JSON array of recorded events and prints the generated test to
//! stdout. Logs go to stderr.

mod cli;
mod input;

use std::path::Path;
use std::sync::OnceLock;

use clap::Parser;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cygen_core::CodeGenerator;

use crate::cli::Cli;

/// Keeps the file writer alive for the program duration.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialize tracing: stderr always, plus daily rotated files when
/// `log_dir` is given.
fn init_tracing(log_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("cygen")
                .filename_suffix("log")
                .max_log_files(7)
                .build(dir)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = LOG_GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        // stdout carries the generated code
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
        )
        .with(file_layer)
        .init();

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_dir.as_deref())?;

    let events = input::read_events(cli.events.as_deref(), std::io::stdin())?;
    info!("Loaded {} events", events.len());

    let generator = CodeGenerator::new(cli.generator_options());
    let code = if cli.strict {
        generator.generate_checked(&events)?
    } else {
        generator.generate(&events)
    };

    debug!("Generated {} bytes", code.len());
    print!("{}", code);
    Ok(())
}
