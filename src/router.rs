//! Exact-match request routing.
//!
//! Routes are (method, path, handler) triples checked with case-sensitive
//! string equality, first registered match wins. No patterns, no wildcard
//! segments, no trailing-slash normalization. The router is built before the
//! server loop starts and is never mutated during dispatch, so it needs no
//! interior locking.

use crate::http::request::Request;
use crate::http::response::Response;

/// Route handlers take the parsed request and return a complete response.
/// They must not stash references into the request past their return, which
/// the borrow on `&Request` enforces.
pub type Handler = Box<dyn Fn(&Request) -> Response + Send + Sync>;

/// Registration beyond this count is dropped with a warning. Routes are
/// added once at startup under developer control, so overflow means a
/// programming error, not a runtime condition worth failing on.
pub const MAX_ROUTES: usize = 64;

struct Route {
    method: String,
    path: String,
    handler: Handler,
}

#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route. Method and path are taken as given, without
    /// validation; duplicates are allowed and never win over the first.
    pub fn register(
        &mut self,
        method: impl Into<String>,
        path: impl Into<String>,
        handler: impl Fn(&Request) -> Response + Send + Sync + 'static,
    ) {
        let method = method.into();
        let path = path.into();

        if self.routes.len() >= MAX_ROUTES {
            tracing::warn!(%method, %path, "route table full, registration dropped");
            return;
        }

        tracing::info!(%method, %path, "route registered");
        self.routes.push(Route {
            method,
            path,
            handler: Box::new(handler),
        });
    }

    /// Scans routes in registration order and runs the first exact match.
    /// A miss is not an error; it synthesizes a plain-text 404.
    pub fn dispatch(&self, request: &Request) -> Response {
        for route in &self.routes {
            if route.method == request.method && route.path == request.path {
                return (route.handler)(request);
            }
        }

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            "no route matched"
        );
        Response::not_found()
    }

    /// Empties the table. Used at shutdown and by tests resetting state.
    pub fn clear(&mut self) {
        self.routes.clear();
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
