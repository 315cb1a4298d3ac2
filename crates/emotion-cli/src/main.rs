//! Emotion Detector CLI
//!
//! Serves the emotion detector web page and API, or runs a single analysis
//! from the command line.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{Cli, Commands};

/// Initialize tracing.
///
/// One-shot commands log to stderr without ANSI so stdout carries only the
/// analysis output.
fn init_tracing(verbose: bool, stderr_only: bool) {
    let default_filter = if verbose {
        "emotion_detector=debug,emotion_web=debug,emotion_classifier=debug,tower_http=debug"
    } else {
        "emotion_detector=info,emotion_web=debug,emotion_classifier=info,tower_http=debug"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if stderr_only {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let stderr_only = matches!(&cli.command, Commands::Analyze(_));
    init_tracing(cli.verbose, stderr_only);

    cli.execute().await
}
