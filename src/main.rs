use anyhow::Result;
use clap::{Parser, Subcommand};

/// portfolio-contact - contact form relay for the portfolio site
#[derive(Parser)]
#[command(name = "portfolio-contact")]
#[command(about = "Relays portfolio contact form submissions via email", long_about = None)]
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
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = portfolio_contact::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    portfolio_contact::observability::init_observability(&config.logging.level)?;

    match cli.command {
        Commands::Serve { host, port } => {
            portfolio_contact::server::serve(config, host, port).await
        }
    }
}
