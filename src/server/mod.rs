//! Development static file server.
//!
//! Serves a directory over plain HTTP with every response marked
//! uncacheable, so browser reloads always see the files on disk.

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use axum::{middleware, routing::get, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod access_log;
pub mod listing;
pub mod no_cache;

/// Build the router serving `config.root`.
///
/// Directory requests get `index.html` when present; otherwise an HTML
/// listing is rendered if `directory_listing` is enabled.
pub fn create_router(config: &ServerConfig) -> Router {
    let serve_dir = ServeDir::new(&config.root).append_index_html_on_directories(true);

    let app = if config.directory_listing {
        let root = Arc::new(PathBuf::from(&config.root));
        let listing = get(listing::directory_listing).with_state::<()>(root);
        Router::new().fallback_service(serve_dir.fallback(listing))
    } else {
        Router::new().fallback_service(serve_dir)
    };

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(access_log::access_log));

    // Outermost, so error responses and redirects carry the headers too.
    no_cache::apply(app)
}

/// Startup banner printed once the listener is bound.
pub fn banner(port: u16) -> String {
    let rule = "=".repeat(60);
    format!(
        "{rule}\n🚀 Chess Puzzle Server (NO CACHE)\n{rule}\n\
         Server running at: http://localhost:{port}/\n\
         Cache headers: DISABLED (no-store, no-cache)\n\
         Press Ctrl+C to stop\n{rule}"
    )
}

/// Bind `config.host:config.port` and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    serve_on(listener, config, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, config: ServerConfig, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("Failed to read local address")?;
    let app = create_router(&config);

    tracing::info!("Serving {:?} on {}", config.root, addr);
    println!("{}", banner(addr.port()));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    println!("\n\n✓ Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
