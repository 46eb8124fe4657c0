use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

use doofeed::{app, environment::Config, logging};

/// Export Shopify storefront content as Doofinder RSS feeds.
#[derive(Parser, Debug)]
#[command(name = "doofeed", version, about)]
struct Args {
    /// Directory the feed files are written into.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Storefront API version, overriding SHOPIFY_API_VERSION.
    #[arg(long)]
    api_version: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::configure_logging(args.verbose);

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Feed export failed: {}", err);
            eprintln!("doofeed: {}", err);
            process::exit(1);
        }
    };
    if let Some(api_version) = args.api_version {
        config.api_version = api_version;
    }

    info!("Starting feed export for {}", config.store_domain);

    if let Err(err) = app::run(&config, &args.output_dir).await {
        error!("Feed export failed: {}", err);
        eprintln!("doofeed: {}", err);
        process::exit(1);
    }

    info!("Feed export complete");
}
