use std::path::PathBuf;
use tokio::net::TcpListener;

use ledger_proxy::config::loader;
use ledger_proxy::http::HttpServer;
use ledger_proxy::lifecycle::{signals, Shutdown};
use ledger_proxy::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional first argument names a TOML config file; otherwise defaults
    // apply, with the listen port overridable via PORT.
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = loader::from_sources(config_path.as_deref())?;

    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = %config.backend.origin(),
        upstream_timeout_secs = config.timeouts.upstream_secs,
        "Configuration loaded"
    );

    let listener = match TcpListener::bind(&config.listener.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(
                bind_address = %config.listener.bind_address,
                error = %e,
                "Failed to bind listener"
            );
            return Err(e.into());
        }
    };

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    let server = HttpServer::new(config);
    server.run(listener, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
