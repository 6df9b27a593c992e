//! HTTP/1.1 transport layer.
//!
//! The submodules cover one request/response exchange end to end:
//!
//! - **`parser`**: turns the raw bytes of one read into a [`request::Request`]
//! - **`request`**: the parsed request handed to route handlers
//! - **`response`**: the response value handlers produce
//! - **`writer`**: serializes a response and writes it to the client
//! - **`connection`**: per-connection orchestration, parse → dispatch →
//!   respond → close
//!
//! Connections are one-shot: exactly one request is read, exactly one
//! response is written, and the socket is closed on every path. There is no
//! keep-alive, no chunked encoding and no pipelining; every response carries
//! `Connection: close`.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
