use anyhow::Result;
use clap::Parser;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use tech_compass::models::Config;
use tech_compass::ui;

/// Terminal client for the Tech Compass internship platform
#[derive(Parser, Debug)]
#[command(name = "tech-compass", version, about)]
struct Args {
    /// Backend base URL (overrides COMPASS_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging - suppress most logs so the TUI stays clean
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::ERROR)
        .with_env_filter("tech_compass=error")
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let args = Args::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("❌ Configuration Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }

    match ui::run_app(config).await {
        Ok(_) => {
            println!("Thanks for using Tech Compass!");
        }
        Err(e) => {
            eprintln!("❌ TUI Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
