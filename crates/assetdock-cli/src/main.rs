mod client;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use client::UploadClient;

#[derive(Parser)]
#[command(name = "assetdock", about = "Assetdock upload client", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload a file to the intake service (fire-and-forget)
    Upload {
        /// File to upload; without one this is a no-op
        file: Option<PathBuf>,

        /// Declared MIME type for the file
        #[arg(long, default_value = "application/octet-stream")]
        content_type: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "assetdock=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Upload { file, content_type } => {
            // No file selected: nothing to send.
            let Some(file) = file else {
                tracing::debug!("No file given, nothing to upload");
                return Ok(());
            };

            let client = UploadClient::from_env()?;
            client.submit_upload(&file, &content_type).await?;
        }
    }

    Ok(())
}
