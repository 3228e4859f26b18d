use clap::Parser;
use pages_portfolio::utils::{logger, validation::Validate};
use pages_portfolio::{CliConfig, LocalStorage, SiteEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, config.log_format());

    tracing::info!("Starting pages-portfolio");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Could not load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(settings.output_path.clone());
    let engine = SiteEngine::new(storage, settings)?;

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Portfolio page written");
            println!("✅ Portfolio page written to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Build failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    }

    Ok(())
}
