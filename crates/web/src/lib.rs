//! LuvUMore: a small web application recording which partner won each day.
//!
//! One SQLite table keyed by calendar date, an axum front, and a
//! relationship-duration counter on the home page.

pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod stats;
pub mod time;
pub mod view;

use std::sync::Arc;

use tracing::info;

use config::WebConfig;
use db::Database;
use server::AppState;

/// Handle to a running server.
pub struct WebHandle {
    pub url: String,
    shutdown: tokio::sync::oneshot::Sender<()>,
}

impl WebHandle {
    /// Stop accepting connections; in-flight requests finish first.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(());
    }
}

/// Open the database, bind the listener, and serve. Returns a handle.
pub async fn start(config: WebConfig) -> anyhow::Result<WebHandle> {
    let db = Database::open(&config.db_path)?;

    let state = Arc::new(AppState {
        config: config.clone(),
        db,
    });

    let app = server::router(state);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    let url = format!("http://{}", listener.local_addr()?);
    info!(%url, "web listening");

    let (tx, rx) = tokio::sync::oneshot::channel();
    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = rx.await;
            })
            .await
            .ok();
    });

    Ok(WebHandle { url, shutdown: tx })
}
