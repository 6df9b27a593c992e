//! koban - one-shot HTTP/1.1 transport core
//!
//! Listener, request parser, exact-match router, response writer and a
//! one-connection-at-a-time server loop. Application handlers (board pages,
//! admin, uploads) plug in through the router and are not part of this crate.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
