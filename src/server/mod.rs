pub mod config;
pub mod error;
pub mod listing;
pub mod middleware;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tokio::{net::TcpListener, sync::broadcast};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, info};

use config::ServerConfig;
use error::StartupError;
use middleware::NoCacheLayer;

pub struct HttpServer {
    config: ServerConfig,
    shutdown_tx: Option<broadcast::Sender<()>>,
}

impl HttpServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            shutdown_tx: None,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub async fn bind(&mut self) -> Result<BoundServer, StartupError> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|err| StartupError::from_bind(err, self.config.port))?;
        let local_addr = listener.local_addr()?;
        info!("listening on {}", local_addr);

        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        self.shutdown_tx = Some(shutdown_tx);

        Ok(BoundServer {
            listener,
            router: build_router(&self.config),
            local_addr,
            shutdown_rx,
        })
    }

    pub fn shutdown(&self) {
        if let Some(shutdown_tx) = &self.shutdown_tx {
            let _ = shutdown_tx.send(());
        }
    }
}

pub struct BoundServer {
    listener: TcpListener,
    router: Router,
    local_addr: SocketAddr,
    shutdown_rx: broadcast::Receiver<()>,
}

impl BoundServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serves requests until an interrupt signal or a programmatic
    /// shutdown, draining in-flight connections before returning.
    pub async fn serve(self) -> Result<()> {
        let BoundServer {
            listener,
            router,
            local_addr,
            mut shutdown_rx,
        } = self;

        debug!("serving requests on {}", local_addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        info!("interrupt received, shutting down");
                    }
                    _ = shutdown_rx.recv() => {
                        info!("shutdown requested");
                    }
                }
            })
            .await?;

        info!("server stopped");
        Ok(())
    }
}

fn build_router(config: &ServerConfig) -> Router {
    let listing = axum::routing::any(listing::list_directory).with_state(config.root_dir.clone());

    let static_files = ServeDir::new(&config.root_dir)
        .append_index_html_on_directories(true)
        .fallback(listing);

    Router::new()
        .fallback_service(static_files)
        .layer(NoCacheLayer::new())
        .layer(TraceLayer::new_for_http())
}
