//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::config::AppConfig;

pub mod analyze;
pub mod serve;

/// Emotion Detector - classify the emotions expressed in a piece of text
#[derive(Parser)]
#[command(name = "emotion-detector")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "EMOTION_CONFIG")]
    pub config: Option<PathBuf>,

    /// EmotionPredict endpoint URL
    #[arg(long, global = true, env = "EMOTION_SERVICE_URL")]
    pub service_url: Option<String>,

    /// Classification workflow sent in the model id header
    #[arg(long, global = true, env = "EMOTION_MODEL_ID")]
    pub model_id: Option<String>,

    /// Request timeout for the classification service, in seconds
    #[arg(long, global = true, env = "EMOTION_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Analyze a single piece of text
    Analyze(analyze::AnalyzeArgs),
}

impl Cli {
    /// Resolve configuration: defaults, then the config file, then flags and env.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())?;

        if let Some(url) = &self.service_url {
            config.classifier.url = url.clone();
        }
        if let Some(model_id) = &self.model_id {
            config.classifier.model_id = model_id.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.classifier.timeout_secs = timeout;
        }

        Ok(config)
    }

    pub async fn execute(self) -> Result<()> {
        let config = self.resolve_config()?;
        debug!(
            classifier_url = %config.classifier.url,
            model_id = %config.classifier.model_id,
            timeout_secs = config.classifier.timeout_secs,
            "Resolved configuration"
        );

        match self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Analyze(args) => analyze::execute(args, &config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emotion_classifier::DEFAULT_MODEL_ID;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "emotion-detector",
            "--service-url",
            "http://localhost:9000/predict",
            "--timeout-secs",
            "3",
            "analyze",
            "I am glad this happened",
        ])
        .unwrap();

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.classifier.url, "http://localhost:9000/predict");
        assert_eq!(config.classifier.timeout_secs, 3);
        assert_eq!(config.classifier.model_id, DEFAULT_MODEL_ID);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "emotion-detector",
            "serve",
            "--port",
            "8080",
            "--model-id",
            "custom-workflow",
        ])
        .unwrap();

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.classifier.model_id, "custom-workflow");
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.port, Some(8080)),
            Commands::Analyze(_) => panic!("expected serve"),
        }
    }

    #[test]
    fn test_analyze_requires_text() {
        assert!(Cli::try_parse_from(["emotion-detector", "analyze"]).is_err());
    }
}
