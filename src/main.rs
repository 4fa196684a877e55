mod config;
mod http;
mod server;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let listener = server::listener::bind(&cfg.listen_addr)?;
    tracing::info!("Listening on {}", cfg.listen_addr);

    tokio::select! {
        res = server::pool::run(listener, cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
