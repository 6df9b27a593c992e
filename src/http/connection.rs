use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::{MAX_REQUEST_BYTES, parse_request};
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::router::Router;

/// One accepted socket, serving exactly one request/response exchange.
pub struct Connection {
    stream: TcpStream,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }

    /// Reads one request, dispatches it, writes the response and closes.
    ///
    /// A single read is issued; whatever it captured is the whole request.
    /// An unparseable request gets a 400 without touching the router. The
    /// socket is closed on every path when `self` drops.
    pub async fn serve(mut self, router: &Router) -> anyhow::Result<()> {
        let mut buf = [0u8; MAX_REQUEST_BYTES];
        let n = self.stream.read(&mut buf).await?;

        if n == 0 {
            // Client connected and went away without sending anything.
            return Ok(());
        }

        let response = match parse_request(&buf[..n]) {
            Ok(request) => {
                tracing::debug!(
                    method = %request.method,
                    path = %request.path,
                    body_len = request.body.len(),
                    "request parsed"
                );
                router.dispatch(&request)
            }
            Err(e) => {
                tracing::debug!(error = %e, bytes = n, "rejecting request");
                Response::bad_request()
            }
        };

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }
}
