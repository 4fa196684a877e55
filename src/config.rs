use anyhow::Context;

/// Listen address used when `LISTEN` is not set: any interface, port 15000.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:15000";

/// Pool size used when `WORKERS` is not set. The same constant serves as
/// the listen backlog depth.
pub const DEFAULT_WORKERS: usize = 5;

#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub workers: usize,
    /// Document root every request URI is resolved against. Computed once
    /// at startup, never mutated afterwards.
    pub root: String,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let listen_addr =
            std::env::var("LISTEN")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        let workers = std::env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_WORKERS);

        let root = match std::env::var("ROOT") {
            Ok(dir) => dir,
            Err(_) => std::env::current_dir()
                .context("Could not determine current directory")?
                .to_string_lossy()
                .into_owned(),
        };

        Ok(Self { listen_addr, workers, root })
    }
}
