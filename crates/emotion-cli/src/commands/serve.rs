//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use emotion_classifier::EmotionClassifierGateway;
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "EMOTION_PORT")]
    pub port: Option<u16>,

    /// Host to bind to
    #[arg(long, env = "EMOTION_HOST")]
    pub host: Option<String>,
}

pub async fn execute(args: ServeArgs, config: AppConfig) -> Result<()> {
    let host = args.host.unwrap_or(config.server.host);
    let port = args.port.unwrap_or(config.server.port);
    let gateway = Arc::new(EmotionClassifierGateway::new(&config.classifier)?);

    println!();
    println!(
        "  {} {}",
        "Emotion Detector".cyan().bold(),
        "Web Server".bold()
    );
    println!();
    println!("  {}        http://{}:{}", "Page".green(), host, port);
    println!(
        "  {}         http://{}:{}/emotionDetector?textToAnalyze=<your_text>",
        "API".green(),
        host,
        port
    );
    println!("  {}  {}", "Classifier".green(), gateway.url());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    info!(host = %host, port, classifier_url = %gateway.url(), "Starting web server");
    emotion_web::run_server(gateway, &host, port).await?;

    Ok(())
}
