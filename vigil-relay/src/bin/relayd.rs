//! vigil-relayd — binds the HTTP ingress over the production collaborators.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use vigil_core::RelayConfig;
use vigil_inference::{EndpointClient, EndpointClientConfig};
use vigil_relay::http::{router, AppState};
use vigil_relay::{ReaderService, RelayService};
use vigil_storage::SqliteAuditStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    // VIGIL_CONFIG points at a TOML file; VIGIL_* variables win either way.
    let config = match std::env::var("VIGIL_CONFIG") {
        Ok(path) => RelayConfig::load(Path::new(&path))?.overlay_env(),
        Err(_) => RelayConfig::from_env(),
    };
    config.validate()?;

    let classifier = Arc::new(EndpointClient::new(EndpointClientConfig::from(&config))?);
    let store = Arc::new(SqliteAuditStore::open(Path::new(&config.db_path))?);

    let state = AppState {
        relay: Arc::new(RelayService::new(classifier, store.clone())),
        reader: Arc::new(ReaderService::new(store)),
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        endpoint = %config.endpoint_url,
        db = %config.db_path,
        "relay: listening"
    );
    axum::serve(listener, router(state)).await?;
    Ok(())
}
