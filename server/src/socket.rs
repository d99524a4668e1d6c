use std::net::SocketAddr;
use std::sync::Arc;

use protocol::{CodecError, Message, MESSAGE_MAX_SIZE};
use tokio::net::UdpSocket;

/// Thin wrapper around a shared `UdpSocket` that encodes/decodes [`Message`]s
/// and enforces the buffer discipline from §5: a single reused buffer, sized
/// to [`MESSAGE_MAX_SIZE`], cleared before every send and truncated to the
/// actual datagram length after every receive.
pub struct Transport {
    socket: Arc<UdpSocket>,
}

impl Transport {
    pub fn new(socket: Arc<UdpSocket>) -> Transport {
        Transport { socket }
    }

    pub async fn send_to(&self, message: &Message, peer: SocketAddr) -> std::io::Result<()> {
        let mut buffer = Vec::with_capacity(MESSAGE_MAX_SIZE);
        message
            .encode(&mut buffer)
            .expect("outbound messages always encode within MESSAGE_MAX_SIZE");
        self.socket.send_to(&buffer, peer).await?;
        Ok(())
    }

    pub async fn recv_from(&self) -> std::io::Result<(Vec<u8>, SocketAddr)> {
        let mut buffer = vec![0u8; MESSAGE_MAX_SIZE];
        let (len, peer) = self.socket.recv_from(&mut buffer).await?;
        buffer.truncate(len);
        Ok((buffer, peer))
    }
}

pub fn decode(bytes: &[u8]) -> Result<Message, CodecError> {
    Message::decode(bytes)
}
