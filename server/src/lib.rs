//! The number-sequence server: binds a single UDP socket and serves every
//! peer's handshake/request/fragment exchange as an independent async task,
//! demultiplexed from one shared receive loop.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod session;
pub mod socket;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use support::Logger;
use tokio::net::UdpSocket;
use tokio::sync::{mpsc, RwLock};

use crate::socket::Transport;

const PEER_INBOX_CAPACITY: usize = 64;

type PeerMap = Arc<RwLock<HashMap<SocketAddr, mpsc::Sender<Vec<u8>>>>>;

/// Reads datagrams off `socket` forever, routing each to its peer's running
/// session task (spawning a new one on first contact) until the process is
/// asked to shut down.
pub async fn serve(socket: UdpSocket, logger: Arc<Logger>) -> std::io::Result<()> {
    let socket = Arc::new(socket);
    let peers: PeerMap = Arc::new(RwLock::new(HashMap::new()));
    let transport = Transport::new(Arc::clone(&socket));

    loop {
        let (bytes, peer) = transport.recv_from().await?;

        let sender = {
            let peers_read = peers.read().await;
            peers_read.get(&peer).cloned()
        };

        let sender = match sender {
            Some(sender) => sender,
            None => spawn_peer_session(&socket, &peers, peer, Arc::clone(&logger)).await,
        };

        // A closed channel means the peer's session just finished; drop this
        // stray datagram rather than starting a second task for the address
        // before this loop's own cleanup has run.
        let _ = sender.send(bytes).await;
    }
}

async fn spawn_peer_session(
    socket: &Arc<UdpSocket>,
    peers: &PeerMap,
    peer: SocketAddr,
    logger: Arc<Logger>,
) -> mpsc::Sender<Vec<u8>> {
    let (tx, rx) = mpsc::channel(PEER_INBOX_CAPACITY);
    peers.write().await.insert(peer, tx.clone());

    let transport = Transport::new(Arc::clone(socket));
    let peers = Arc::clone(peers);

    tokio::spawn(async move {
        session::run(transport, peer, rx, &logger).await;
        peers.write().await.remove(&peer);
    });

    tx
}
