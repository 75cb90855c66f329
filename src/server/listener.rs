use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Router;
use crate::store::FileStore;

const BACKLOG: u32 = 1024;
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Binds the configured address, indexes the serving directory and serves
/// until the process is stopped.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(&cfg.listen_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    let store = FileStore::open_configured(cfg.directory.as_deref()).await;
    let router = Arc::new(Router::new(store));

    serve(listener, router, cfg.read_timeout()).await;
    Ok(())
}

/// Creates a listening socket with `SO_REUSEADDR` set.
pub async fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = tokio::net::lookup_host(addr)
        .await
        .with_context(|| format!("resolving {addr}"))?
        .next()
        .with_context(|| format!("{addr} did not resolve to any address"))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("binding {addr}"))?;

    Ok(socket.listen(BACKLOG)?)
}

/// Accept loop: every connection gets its own task.
pub async fn serve(listener: TcpListener, router: Arc<Router>, read_timeout: Option<Duration>) {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!("Accept failed: {}", e);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router).with_read_timeout(read_timeout);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
