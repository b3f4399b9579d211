//! Travel quickstart server entry point.

mod config;

use anyhow::Result;
use axum::Router;
use clap::Parser;
use config::{AppConfig, LoggingConfig};
use sea_orm::{ConnectOptions, Database};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use travel_service::TravelServiceModule;

#[derive(Debug, Parser)]
#[command(name = "travel-server", version, about = "Airline, airport and route REST API")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    if cli.print_config {
        println!("{config:#?}");
        return Ok(());
    }

    init_tracing(&config.logging);
    info!("Travel server v{}", env!("CARGO_PKG_VERSION"));

    // Connect database
    let mut options = ConnectOptions::new(config.database.url.clone());
    options
        .max_connections(config.database.max_connections)
        .connect_timeout(config.database.connect_timeout)
        .sqlx_logging(false);
    let db = Database::connect(options).await?;
    info!(url = %config.database.url, "Database connected");

    // Bring up the module
    let module = TravelServiceModule::new();
    module.migrate(&db).await?;
    module.init(config.travel.clone(), Arc::new(db)).await?;

    let router = module
        .register_rest(Router::new())?
        .layer(TimeoutLayer::new(config.server.request_timeout))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!(bind = %config.server.bind, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
