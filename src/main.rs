use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tally::adapters::counter_store::CounterStore;
use tally::adapters::metrics_handler::MetricsCollector;
use tally::cli::Cli;
use tally::config::Settings;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting Hit Counter Service on {}:{}", host, port);

    // The store is owned here and injected into the router; there is no
    // process-global state.
    let store = CounterStore::new();
    let metrics = Arc::new(MetricsCollector::new()?);

    let app = tally::create_app(store, metrics);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
