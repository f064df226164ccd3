use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error};

use crate::http::error::RequestError;
use crate::http::parser::parse_request;
use crate::http::path::{resolve, ResolvedPath};
use crate::http::request::ParsedRequest;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Size of a single socket read.
pub const READ_CHUNK: usize = 1024;

/// Reading stops once this much has been buffered; only the request line
/// is ever used.
pub const MAX_REQUEST_BYTES: usize = 64 * 1024;

/// Serves exactly one request over `stream`, then closes it.
pub struct Connection<S> {
    stream: S,
    root: Arc<PathBuf>,
    peer: Option<SocketAddr>,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Parsing,
    Resolving(ParsedRequest),
    Loading(ParsedRequest, ResolvedPath),
    Responding(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, root: Arc<PathBuf>) -> Self {
        Self {
            stream,
            root,
            peer: None,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            state: ConnectionState::Reading,
        }
    }

    pub fn with_peer(mut self, peer: SocketAddr) -> Self {
        self.peer = Some(peer);
        self
    }

    /// Drives the connection to `Closed`.
    ///
    /// Request failures become responses; the only error returned is a
    /// failure to deliver the response. The stream is shut down and dropped
    /// on every path since `run` consumes the connection.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut outcome = Ok(());

        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::Reading => match self.read_request().await {
                    Ok(()) => ConnectionState::Parsing,
                    Err(e) => self.fail(RequestError::Internal(e.into())),
                },

                ConnectionState::Parsing => match parse_request(&self.buffer) {
                    Ok(req) => {
                        debug!(
                            peer = ?self.peer,
                            verb = %req.method,
                            path = %req.path,
                            content_kind = %req.content_kind,
                            "Parsed request"
                        );
                        ConnectionState::Resolving(req)
                    }
                    Err(e) => self.fail(e.into()),
                },

                ConnectionState::Resolving(req) => match resolve(&req.path, &self.root) {
                    Ok(path) => ConnectionState::Loading(req, path),
                    Err(e) => self.fail(e.into()),
                },

                ConnectionState::Loading(req, path) => match load(path.as_path()).await {
                    Ok(body) => Self::respond(Response::ok(req.content_kind, body)),
                    Err(e) => self.fail(e),
                },

                ConnectionState::Responding(mut writer) => {
                    if let Err(e) = writer.write_to_stream(&mut self.stream).await {
                        outcome = Err(e);
                    } else {
                        debug!(peer = ?self.peer, bytes = writer.len(), "Sent response");
                    }
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        // Shutdown may fail if the peer already went away; the socket is
        // released on drop either way.
        if let Err(e) = self.stream.shutdown().await {
            debug!(peer = ?self.peer, error = %e, "Shutdown failed");
        }

        outcome
    }

    /// Reads until a short read.
    ///
    /// A request that is an exact multiple of [`READ_CHUNK`] waits for the
    /// client to half-close or send more; that boundary is accepted.
    async fn read_request(&mut self) -> std::io::Result<()> {
        let mut chunk = [0u8; READ_CHUNK];

        loop {
            let n = self.stream.read(&mut chunk).await?;
            self.buffer.extend_from_slice(&chunk[..n]);

            if n < READ_CHUNK || self.buffer.len() >= MAX_REQUEST_BYTES {
                return Ok(());
            }
        }
    }

    fn fail(&self, err: RequestError) -> ConnectionState {
        if err.is_internal() {
            error!(peer = ?self.peer, "Internal error: {:#}", err);
        } else {
            error!(peer = ?self.peer, error = %err, "Error with request");
        }

        Self::respond(err.to_response())
    }

    fn respond(response: Response) -> ConnectionState {
        debug!(status = %response.status, content_kind = %response.content_kind, "Responding");
        ConnectionState::Responding(ResponseWriter::new(&response))
    }
}

async fn load(path: &Path) -> Result<Vec<u8>, RequestError> {
    tokio::fs::read(path)
        .await
        .map_err(|e| RequestError::from_io(e, path.to_path_buf()))
}
