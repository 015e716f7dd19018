// Best-effort UDP forward of the serialized snapshot.

use crate::error::ProbeError;
use tokio::net::UdpSocket;
use tracing::instrument;

/// Sends one datagram from an ephemeral local socket. No ack, no retry;
/// resolution and transmit failures surface as network errors.
#[instrument(skip(payload), fields(operation = "forward_snapshot", host = %host, port, bytes = payload.len()))]
pub async fn send_once(host: &str, port: u16, payload: &[u8]) -> Result<(), ProbeError> {
    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    socket.send_to(payload, (host, port)).await?;
    tracing::debug!("snapshot forwarded");
    Ok(())
}
