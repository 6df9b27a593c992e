use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;

use koban::config::Config;
use koban::http::response::Response;
use koban::router::Router;
use koban::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();
    let addr: SocketAddr = cfg
        .listen_addr
        .parse()
        .with_context(|| format!("invalid listen address {:?}", cfg.listen_addr))?;

    // Stand-in routes; the board application registers its own here.
    let mut router = Router::new();
    router.register("GET", "/", |_req| {
        Response::html("<!DOCTYPE html><html><body><h1>koban</h1></body></html>")
    });
    router.register("GET", "/ping", |_req| Response::text(200, "pong"));

    let server = Server::bind(addr)?;
    tracing::info!("listening on http://{}", server.local_addr());

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        tokio::spawn(async move {
            shutdown_signal().await;
            tracing::info!("shutdown signal received");
            running.store(false, Ordering::SeqCst);
        });
    }

    server.run(&router, || running.load(Ordering::SeqCst)).await;

    server.shutdown();
    router.clear();
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut term = match signal(SignalKind::terminate()) {
            Ok(term) => term,
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = term.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
