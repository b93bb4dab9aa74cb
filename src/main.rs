//! Server: opens the SQLite store, ensures the `productos` table, serves the API until Ctrl-C / SIGTERM,
//! then closes the store.

use productos_api::{app, AppState, Settings, Store};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("productos_api=info,tower_http=info")),
        )
        .init();

    tracing::info!(db_file = %settings.db_file.display(), "connecting to SQLite");
    let store = match Store::open(&settings.db_file).await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(error = %err, "failed to start server");
            return Err(err.into());
        }
    };
    store.ensure_schema().await?;

    let state = AppState::new(store.clone());
    let listener = TcpListener::bind(settings.listen_addr().await?).await?;
    let addr = listener.local_addr()?;
    tracing::info!("listening on http://{}", addr);
    tracing::info!("products at http://{}/api/productos", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown requested");
}
