/// Listen address environment variable, `addr:port` form.
const LISTEN_ENV: &str = "LISTEN";

const DEFAULT_LISTEN: &str = "127.0.0.1:8080";

/// Process configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
}

impl Config {
    pub fn load() -> Self {
        let listen_addr =
            std::env::var(LISTEN_ENV)
                .unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        Self { listen_addr }
    }
}
