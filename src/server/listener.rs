//! Listening socket and the accept loop.
//!
//! The loop serves one connection at a time: accept, run the connection to
//! completion, then wait again. The accept wait is bounded by a one-second
//! timeout so the shutdown flag is observed within a second even when no
//! traffic arrives.

use std::net::SocketAddr;
use std::time::Duration;

use socket2::{Domain, Protocol, Socket, Type};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::http::connection::Connection;
use crate::router::Router;

const ACCEPT_BACKLOG: i32 = 10;
const ACCEPT_POLL: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
}

pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl Server {
    /// Creates the listening socket: SO_REUSEADDR, bound to `addr`,
    /// listening with a small fixed backlog. Any failure here is fatal to
    /// startup.
    ///
    /// Must be called from within a tokio runtime.
    pub fn bind(addr: SocketAddr) -> Result<Self, ServerError> {
        let bind_err = |source| ServerError::Bind { addr, source };

        let domain = if addr.is_ipv4() {
            Domain::IPV4
        } else {
            Domain::IPV6
        };

        let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP)).map_err(bind_err)?;
        socket.set_reuse_address(true).map_err(bind_err)?;
        socket.bind(&addr.into()).map_err(bind_err)?;
        socket.listen(ACCEPT_BACKLOG).map_err(bind_err)?;
        socket.set_nonblocking(true).map_err(bind_err)?;

        let listener = TcpListener::from_std(socket.into()).map_err(bind_err)?;
        let local_addr = listener.local_addr().map_err(bind_err)?;

        Ok(Self {
            listener,
            local_addr,
        })
    }

    /// The bound address; useful when binding port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Runs the accept loop until `should_continue` returns false.
    ///
    /// Each accepted connection is served to completion before the next
    /// accept, strictly in arrival order. Connection failures are logged and
    /// contained; a failed accept never terminates the loop.
    pub async fn run(&self, router: &Router, should_continue: impl Fn() -> bool) {
        info!(addr = %self.local_addr, "server loop started");

        while should_continue() {
            match timeout(ACCEPT_POLL, self.listener.accept()).await {
                // Poll tick, go re-check the flag.
                Err(_elapsed) => continue,

                Ok(Ok((stream, peer))) => {
                    debug!(%peer, "accepted connection");
                    if let Err(e) = Connection::new(stream).serve(router).await {
                        warn!(%peer, error = %e, "connection failed");
                    }
                }

                Ok(Err(e)) => {
                    warn!(error = %e, "accept failed");
                }
            }
        }

        info!("server loop stopped");
    }

    /// Closes the listening socket. Dropping the server does the same.
    pub fn shutdown(self) {
        info!(addr = %self.local_addr, "listener closed");
    }
}
