mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod test_support;
mod views;

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;
use store::RecipeStore;
use views::Views;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    tracing::info!("rust-mongo-recipes starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = RecipeStore::from_config(&config).await?;
    if let Err(err) = store.ping().await {
        // The client connects lazily, so startup proceeds; each request
        // fails with a 500 until the store becomes reachable.
        tracing::warn!("MongoDB not reachable yet: {:#}", err);
    }

    let views = Views::new()?;
    let state = AppState {
        store: store.clone(),
        views: Arc::new(views),
    };

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let address = format!("{}:{}", config.service_host, config.service_port);
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("http://localhost:{}/", config.service_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.shutdown().await;
    tracing::info!("Store connection released, exiting");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
