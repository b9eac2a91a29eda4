//! lapscan CLI
//!
//! Runs the crawl directly or serves the HTTP API.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use lapscan::{
    api,
    error::Result,
    models::{Config, CrawlRequest},
    pipeline,
    utils::http,
};

/// lapscan - Laptop Listing Crawler
#[derive(Parser, Debug)]
#[command(name = "lapscan", version, about = "E-commerce laptop listing crawler")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "lapscan.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl the listing and print the records as JSON
    Crawl {
        /// Crawl exactly this 1-based page instead of discovering the range
        #[arg(long)]
        page: Option<u32>,

        /// Stop visiting pages once this many records are collected
        #[arg(long)]
        limit: Option<usize>,

        /// Include every brand instead of only the configured filter brand
        #[arg(long)]
        all_brands: bool,

        /// Write the JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the HTTP API server
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Crawl {
            page,
            limit,
            all_brands,
            output,
        } => {
            config.validate()?;
            let config = Arc::new(config);
            let client = http::create_client(&config.crawler)?;

            let request = CrawlRequest {
                page,
                max_laptops: limit,
                all_brands,
            };
            let outcome = pipeline::run_crawl(&config, &client, &request).await?;

            log::info!(
                "crawled {} laptop(s) across {} page(s) ({} page failure(s), {} detail failure(s))",
                outcome.laptops.len(),
                outcome.pages_visited,
                outcome.page_failures,
                outcome.detail_failures
            );

            let json = serde_json::to_string_pretty(&outcome.laptops)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    log::info!("records written to {}", path.display());
                }
                None => println!("{json}"),
            }
        }

        Command::Serve { port } => {
            config.validate()?;
            let mut config = config;
            if let Some(port) = port {
                config.server.port = port;
            }
            api::serve(Arc::new(config)).await?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("Config OK");
        }
    }

    Ok(())
}
