use std::net::ToSocketAddrs;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

/// Pending-connection queue depth for the listening socket.
pub const BACKLOG: u32 = 5;

/// Resolves `addr` and binds the first candidate address that accepts a
/// socket, then puts it into listening state.
///
/// Any failure here is fatal to the caller: a port conflict or an unusable
/// network stack is an operator problem, not something to retry.
pub fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    let candidates = addr
        .to_socket_addrs()
        .with_context(|| format!("could not resolve listen address {addr}"))?;

    let mut last_err = None;

    for candidate in candidates {
        let socket = if candidate.is_ipv4() {
            TcpSocket::new_v4()
        } else {
            TcpSocket::new_v6()
        };

        let socket = match socket {
            Ok(s) => s,
            Err(e) => {
                last_err = Some(e);
                continue;
            }
        };

        if let Err(e) = socket.bind(candidate) {
            last_err = Some(e);
            continue;
        }

        let listener = socket
            .listen(BACKLOG)
            .with_context(|| format!("could not listen on {candidate}"))?;
        info!("Socket created and bound to {}", candidate);
        return Ok(listener);
    }

    Err(match last_err {
        Some(e) => anyhow::Error::new(e).context(format!("could not bind {addr}")),
        None => anyhow::anyhow!("{addr} resolved to no addresses"),
    })
}
