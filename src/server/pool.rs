//! Fixed pool of worker tasks sharing one listening socket.
//!
//! Every worker blocks on `accept()` against the same listener; the runtime
//! delivers each completed connection to exactly one of them, so no explicit
//! coordination is needed between workers. A worker handles one connection
//! fully before accepting the next — concurrency across clients comes only
//! from the pool size.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;

/// Spawns `cfg.workers` accept-loop tasks over the shared listener and
/// waits for all of them to finish.
///
/// Workers never return under normal operation; one that exits early is
/// reaped and the pool permanently shrinks. There is no respawn.
pub async fn run(listener: TcpListener, cfg: Config) -> anyhow::Result<()> {
    let listener = Arc::new(listener);
    let mut workers = JoinSet::new();

    for slot in 0..cfg.workers {
        let listener = Arc::clone(&listener);
        let root = cfg.root.clone();

        let _abort = workers.spawn(async move {
            worker_loop(slot, listener, root).await;
        });
        info!("New worker in slot {}", slot);
    }

    while let Some(res) = workers.join_next().await {
        if let Err(e) = res {
            error!("Worker exited abnormally: {}", e);
        }
    }

    Ok(())
}

/// Per-worker accept loop: accept, serve one connection to completion,
/// repeat. An accept failure is logged and the loop continues; a bad
/// client never kills a worker.
async fn worker_loop(slot: usize, listener: Arc<TcpListener>, root: String) {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(pair) => pair,
            Err(e) => {
                warn!("Worker {}: could not accept incoming request: {}", slot, e);
                continue;
            }
        };

        info!("Worker {}: incoming request from {}", slot, peer);

        let mut conn = Connection::new(socket, root.clone());
        if let Err(e) = conn.run().await {
            error!("Worker {}: connection error from {}: {}", slot, peer, e);
        }
    }
}
