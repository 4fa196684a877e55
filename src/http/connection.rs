use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{info, warn};

use crate::http::handler;
use crate::http::parser::parse_request;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// How much of a request is read, in one receive call. Anything the
/// client sends past this, or delivers in a later segment, is ignored.
pub const REQUEST_BUFFER_SIZE: usize = 1024;

pub struct Connection {
    stream: TcpStream,
    root: String,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closing,
}

impl Connection {
    pub fn new(stream: TcpStream, root: String) -> Self {
        Self {
            stream,
            root,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through one request/response cycle and
    /// closes it. The socket is released on every exit path, including
    /// write errors, when the Connection is dropped.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(Ok(req)) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        Some(Err(response)) => {
                            // Malformed request line: answer 400 instead
                            // of dying on it.
                            let writer = ResponseWriter::new(&response);
                            self.state = ConnectionState::Writing(writer);
                        }
                        None => {
                            // Client closed before sending anything.
                            self.state = ConnectionState::Closing;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let response = handler::respond(&self.root, req).await;
                    info!(
                        "{} {} -> {} {}",
                        req.method.map_or("?", |m| m.as_str()),
                        req.uri,
                        response.status.as_u16(),
                        response.status.reason_phrase()
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closing;
                }

                ConnectionState::Closing => {
                    // Flush and send FIN; the handle itself closes on drop.
                    let _ = self.stream.shutdown().await;
                    break;
                }
            }
        }

        Ok(())
    }

    /// Performs the single fixed-size read this server allows a request,
    /// then parses it.
    ///
    /// Returns `None` when the client disconnected without sending data,
    /// `Some(Err(response))` with a ready 400 response when the bytes held
    /// no usable request line.
    async fn read_request(&mut self) -> anyhow::Result<Option<Result<Request, Response>>> {
        let mut buf = BytesMut::with_capacity(REQUEST_BUFFER_SIZE);
        let n = self.stream.read_buf(&mut buf).await?;

        if n == 0 {
            return Ok(None);
        }

        match parse_request(&buf) {
            Ok(req) => Ok(Some(Ok(req))),
            Err(e) => {
                warn!("Unparseable request ({:?})", e);
                Ok(Some(Err(Response::bad_request())))
            }
        }
    }
}
