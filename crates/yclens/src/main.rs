use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "yclens")]
#[command(about = "Read-only Yandex Cloud inspection over MCP", long_about = None)]
struct Cli {
    /// Log file path. stdout carries JSON-RPC, so logs never go there.
    #[arg(long, env = "YCLENS_LOG_FILE", default_value = "/tmp/yclens-mcp.log")]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if matches!(cli.command, Some(Commands::Version)) {
        println!("yclens {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Serving is the default action. stdout belongs to the JSON-RPC
    // transport, so tracing goes to an append-mode file.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log_file)
        .ok();

    if let Some(file) = log_file {
        tracing_subscriber::fmt()
            .with_writer(file)
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::INFO.into()),
            )
            .with_ansi(false)
            .init();
    }

    yclens_mcp::run_server().await
}
