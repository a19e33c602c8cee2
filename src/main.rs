use std::net::{IpAddr, SocketAddr};

use quiz_backend::{
    config::Config,
    error::Error,
    routes, AppState,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins; otherwise the DEBUG flag picks the default level.
    let default_filter = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let host: IpAddr = config
        .host
        .parse()
        .map_err(|e| Error::Config(format!("Invalid HOST {}: {}", config.host, e)))?;
    let addr = SocketAddr::new(host, config.port);
    let static_dir = config.static_dir.clone();

    let app_state = AppState::new(config);
    let app = routes::router(app_state)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
