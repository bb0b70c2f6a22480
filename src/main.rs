use anyhow::Result;
use clap::{Parser, Subcommand};

/// marketside - marketplace agency website
#[derive(Parser)]
#[command(name = "marketside")]
#[command(about = "Marketing site and contact form handler", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Send a sample operator email through the configured provider
    SendTestEmail {
        /// Recipient address
        #[arg(long)]
        to: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = marketside::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    marketside::observability::init_observability(
        "marketside",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => marketside::cli::serve(config, host, port).await,
        Commands::SendTestEmail { to } => marketside::cli::send_test_email(config, to).await,
    }
}
