//! Standalone health-check responder.
//!
//! Degenerate variant of the proxy with the forwarding branch removed:
//! every path and every method gets `200 OK`. Request logging is fully
//! suppressed; only the startup line is emitted.

use clap::Parser;
use tokio::net::TcpListener;

use ledger_proxy::config::schema::ObservabilityConfig;
use ledger_proxy::http::health;
use ledger_proxy::observability::logging;

#[derive(Parser)]
#[command(name = "health-server")]
#[command(about = "Answers every request with 200 OK", long_about = None)]
struct Cli {
    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(&ObservabilityConfig::default());

    let addr = format!("0.0.0.0:{}", cli.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Health-check server listening");

    axum::serve(listener, health::health_only_router()).await?;
    Ok(())
}
