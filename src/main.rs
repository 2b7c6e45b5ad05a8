use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use vessel_info::app;
use vessel_info::utils::{logger, validation::Validate};
use vessel_info::{CliConfig, VesselInfoFetcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting vessel-info");

    // 載入並驗證配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration invalid: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved config: {:?}", config);

    if config.scraper.proxies.is_empty() {
        tracing::info!("No proxies configured, connecting directly");
    } else {
        tracing::info!("Rotating across {} proxies", config.scraper.proxies.len());
    }

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;
    tracing::info!("✅ Listening on http://{}", listener.local_addr()?);

    let fetcher = VesselInfoFetcher::new(config.scraper);
    app::serve(listener, fetcher, shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
