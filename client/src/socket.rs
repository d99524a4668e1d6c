use protocol::{Message, MESSAGE_MAX_SIZE};
use tokio::net::UdpSocket;

use crate::error::SessionError;

/// Thin wrapper around the client's single `UdpSocket`, already connected to
/// the server's address, applying the same reused-buffer discipline as the
/// server's transport.
pub struct Transport {
    socket: UdpSocket,
}

impl Transport {
    pub fn new(socket: UdpSocket) -> Transport {
        Transport { socket }
    }

    pub async fn send(&self, message: &Message) -> Result<(), SessionError> {
        let mut buffer = Vec::with_capacity(MESSAGE_MAX_SIZE);
        message
            .encode(&mut buffer)
            .expect("outbound messages always encode within MESSAGE_MAX_SIZE");
        self.socket.send(&buffer).await?;
        Ok(())
    }

    pub async fn recv(&self) -> Result<Message, SessionError> {
        let mut buffer = vec![0u8; MESSAGE_MAX_SIZE];
        let len = self.socket.recv(&mut buffer).await?;
        buffer.truncate(len);
        Ok(Message::decode(&buffer)?)
    }
}
