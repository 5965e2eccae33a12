use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::ServerConfig;
use crate::router::create_router;

pub async fn serve(
    config_file: Option<&Path>,
    bind_address: Option<String>,
    static_dir: Option<PathBuf>,
) -> Result<()> {
    trace!("Entering serve function");
    info!("OrgFin static host starting up");

    let config = ServerConfig::load(config_file)?.with_overrides(bind_address, static_dir);
    debug!("Resolved configuration: {:?}", config);

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    trace!("Creating application router");
    let app = create_router(&config);

    info!("Starting server on {}", config.bind_address);
    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", config.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!(
        "OrgFin running on http://{} serving {}",
        config.bind_address,
        config.static_dir.display()
    );

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
