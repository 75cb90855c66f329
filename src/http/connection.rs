use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::parser::{parse_http_request, parse_partial_request, ParseError};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::router::Router;

/// One client connection, serving exactly one request.
///
/// The stream is owned by the connection and is closed when the connection
/// is dropped, so every exit path out of [`Connection::run`] (including
/// errors) releases the socket.
pub struct Connection<S> {
    stream: S,
    buffer: Vec<u8>,
    state: ConnectionState,
    router: Arc<Router>,
    read_timeout: Option<Duration>,
}

pub enum ConnectionState {
    Parsing,
    Routing(Result<Request, ParseError>),
    Responding(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(4096),
            state: ConnectionState::Parsing,
            router,
            read_timeout: None,
        }
    }

    /// Limits how long a single read may wait for the client.
    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Parsing => ConnectionState::Routing(self.read_request().await?),

                ConnectionState::Routing(parsed) => {
                    let response = match &parsed {
                        Ok(req) => {
                            let response = self.router.route(req).await;
                            tracing::info!(
                                method = %req.method,
                                path = %req.path,
                                status = response.status.as_u16(),
                                "Served request"
                            );
                            response
                        }
                        Err(e) => self.router.reject(e),
                    };

                    ConnectionState::Responding(ResponseWriter::new(&response))
                }

                ConnectionState::Responding(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if let Err(e) = self.stream.shutdown().await {
                        tracing::debug!(error = %e, "Shutdown after response failed");
                    }
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    /// Reads until one request parses, the parser gives up, or the peer
    /// closes its side. I/O failures and timeouts are the outer error.
    pub async fn read_request(&mut self) -> anyhow::Result<Result<Request, ParseError>> {
        loop {
            match parse_http_request(&self.buffer) {
                Ok((request, _consumed)) => return Ok(Ok(request)),
                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }
                Err(e) => return Ok(Err(e)),
            }

            let mut temp = [0u8; 1024];
            let n = self.read_some(&mut temp).await?;

            if n == 0 {
                // Client finished sending, parse what we have
                return Ok(parse_partial_request(&self.buffer));
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }

    async fn read_some(&mut self, buf: &mut [u8]) -> anyhow::Result<usize> {
        let Some(limit) = self.read_timeout else {
            return Ok(self.stream.read(buf).await?);
        };

        match tokio::time::timeout(limit, self.stream.read(buf)).await {
            Ok(read) => Ok(read?),
            Err(_) => Err(anyhow::anyhow!("read timed out after {:?}", limit)),
        }
    }
}
