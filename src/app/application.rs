use super::aws::get_token;
use crate::app::cli::CliArgs;
use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::EnvFilter;

pub async fn run() -> Result<()> {
    // Logs go to stderr; stdout carries only the token so exec-plugin
    // consumers can parse it.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let exec_credential = args.exec_credential;
    let token = get_token(&args.into()).await?;

    let output = if exec_credential {
        serde_json::to_string(&token.exec_credential())
            .context("failed to serialize the ExecCredential document")?
    } else {
        token.token
    };

    tokio::io::stdout().write_all(output.as_bytes()).await?;
    tokio::io::stdout().flush().await?;
    Ok(())
}
