//! mistral-chat - ask Mistral one question and print the answer
//!
//! Usage:
//!     mistral-chat [OPTIONS] [QUESTION]
//!
//! Environment Variables:
//!     MISTRAL_API_KEY: API key sent as a bearer token
//!     MISTRAL_MODEL: Model name (default: mistral-tiny)
//!     MISTRAL_BASE_URL: API base URL (default: https://api.mistral.ai/v1)
//!     RUST_LOG: Log filter for stderr output (default: warn)

use anyhow::{Context, Result};
use clap::Parser;
use mistral_chat::{run, ChatConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Ask Mistral one question and print the answer
#[derive(Parser, Debug)]
#[command(name = "mistral-chat")]
#[command(about = "Ask Mistral one question and print the answer")]
#[command(after_help = r#"Examples:
    # Ask the default question using MISTRAL_API_KEY and MISTRAL_MODEL
    mistral-chat

    # Ask your own question
    mistral-chat "Hvor står elgen ved SV-vind?"

    # Use a different model
    mistral-chat --model mistral-medium
"#)]
struct Cli {
    /// Model name (overrides MISTRAL_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// API base URL (overrides MISTRAL_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Log debug output to stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Question to ask (default question if not provided)
    question: Option<String>,
}

/// Logs go to stderr; stdout carries only the banner and answer.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Apply command-line overrides on top of the environment configuration
fn build_config(args: &Cli, base: ChatConfig) -> ChatConfig {
    let mut config = base;

    if let Some(model) = &args.model {
        config = config.with_model(model);
    }
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url);
    }

    config
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let config = build_config(&args, ChatConfig::from_env());
    debug!("Model: {}, base URL: {}", config.model, config.base_url);

    run(config, args.question.as_deref(), &mut std::io::stdout())
        .await
        .context("chat completion failed")?;

    Ok(())
}
