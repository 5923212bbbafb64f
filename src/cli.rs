use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::reviews::ReviewService;
use crate::site;

/// `Serenity Space` - bilingual therapy-practice site with a live-review pipeline.
#[derive(Parser, Debug)]
#[command(name = "serenity-space")]
#[command(version = "0.1.0")]
#[command(about = "Marketing site server for the Serenity Space practice.", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (default: ./serenity.toml if present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the site
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (use 0 for a random available port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run one live-review fetch and print the outcome (diagnostics)
    Reviews,
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Some(Commands::Serve { host, port }) => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            site::run_site(&host, port, config).await
        }
        Some(Commands::Reviews) => run_reviews_probe(config).await,
        None => site::run_site(&config.server.host.clone(), config.server.port, config).await,
    }
}

/// One adapter invocation, printed as JSON. An empty list means the site
/// would fall back to the mock dataset.
async fn run_reviews_probe(config: Config) -> Result<()> {
    let service = ReviewService::new(config.gemini);
    let reviews = service.fetch_reviews().await;

    if reviews.is_empty() {
        println!("no live reviews — the site would keep its mock dataset");
    } else {
        println!("{}", serde_json::to_string_pretty(&reviews)?);
    }
    Ok(())
}
