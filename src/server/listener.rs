use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::http::connection::Connection;

const LISTEN_BACKLOG: u32 = 128;

/// How accepted connections are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ServeMode {
    /// One connection at a time; the next accept waits for the previous
    /// connection to close.
    Serial,
    /// One task per connection on the current runtime. Run on a
    /// current-thread runtime, tasks interleave only at I/O.
    #[default]
    Concurrent,
}

impl fmt::Display for ServeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServeMode::Serial => f.write_str("serial"),
            ServeMode::Concurrent => f.write_str("concurrent"),
        }
    }
}

/// Owns the listening socket for its whole lifetime.
///
/// The socket is released when the server is dropped, whether `serve`
/// returned an error or the future was cancelled.
pub struct Server {
    listener: TcpListener,
    root: Arc<PathBuf>,
    mode: ServeMode,
}

impl Server {
    /// Binds and listens. Failure here is fatal to startup.
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let addrs: Vec<SocketAddr> = tokio::net::lookup_host((cfg.host.as_str(), cfg.port))
            .await
            .with_context(|| format!("failed to resolve {}", cfg.address()))?
            .collect();
        let addr = pick_address(&addrs)
            .with_context(|| format!("no address found for {}", cfg.address()))?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket
            .bind(addr)
            .with_context(|| format!("failed to bind {}", addr))?;
        let listener = socket.listen(LISTEN_BACKLOG)?;

        info!("Server created at {}", listener.local_addr()?);

        Ok(Self {
            listener,
            root: Arc::new(cfg.root.clone()),
            mode: cfg.mode,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn mode(&self) -> ServeMode {
        self.mode
    }

    /// Accepts connections until accepting itself fails.
    pub async fn serve(&self) -> anyhow::Result<()> {
        info!(mode = %self.mode, root = %self.root.display(), "Serving");

        match self.mode {
            ServeMode::Serial => self.serve_serial().await,
            ServeMode::Concurrent => self.serve_concurrent().await,
        }
    }

    async fn serve_serial(&self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = self.accept().await?;

            handle(socket, peer, self.root.clone()).await;
        }
    }

    async fn serve_concurrent(&self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = self.accept().await?;

            tokio::spawn(handle(socket, peer, self.root.clone()));
        }
    }

    async fn accept(&self) -> anyhow::Result<(TcpStream, SocketAddr)> {
        let (socket, peer) = self
            .listener
            .accept()
            .await
            .context("failed to accept connection")?;
        debug!("Accepted request from {}", peer);
        Ok((socket, peer))
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.local_addr() {
            Ok(addr) => write!(f, "Webserv addr={} mode={}", addr, self.mode),
            Err(_) => write!(f, "Webserv mode={}", self.mode),
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        info!("Socket terminated.");
    }
}

/// First IPv4 address, else whatever the resolver listed first.
fn pick_address(addrs: &[SocketAddr]) -> Option<SocketAddr> {
    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
}

async fn handle(socket: TcpStream, peer: SocketAddr, root: Arc<PathBuf>) {
    let conn = Connection::new(socket, root).with_peer(peer);
    if let Err(e) = conn.run().await {
        error!("Connection error from {}: {:#}", peer, e);
    }
}
