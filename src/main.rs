use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod api;
mod config;
mod data_source;
mod error;
mod reading;
mod service;
mod store;

use config::Cli;
use service::data_loop::AgentLoop;
use service::reader::spawn_reader;
use service::state::{AgentState, create_shared_state};
use store::StoreClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with colors and stderr output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sensor_agent=info".into()),
        )
        .init();

    let cli = Cli::parse();

    tracing::info!("Starting sensor agent on {}:{}", cli.host, cli.listen);

    // Create shared state
    let state = create_shared_state(AgentState::new(
        cli.agent_id.clone(),
        cli.store_api_url.clone(),
    ));

    // Create data source and start reading from it
    let data_source = cli.to_source_config().create_source();
    tracing::info!("Reading from {}", data_source.name());

    let (event_rx, mut reader) = spawn_reader(data_source, cli.to_reader_options())?;

    // Create and spawn the agent loop
    let agent_loop = AgentLoop::new(state.clone(), StoreClient::new()?);

    let agent_handle = tokio::spawn(async move {
        if let Err(e) = agent_loop.run(event_rx).await {
            tracing::error!("Agent loop error: {}", e);
        }
    });

    // Create and run HTTP server
    let router = api::create_router(state);
    let addr: SocketAddr = format!("{}:{}", cli.host, cli.listen).parse()?;

    tracing::info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run server with graceful shutdown
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Cleanup
    tracing::info!("Shutting down...");
    if reader.is_active() {
        reader.stop().await;
    }
    agent_handle.abort();

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C)
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
