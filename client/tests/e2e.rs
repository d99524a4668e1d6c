use std::sync::Arc;

use protocol::{max_numbers_per_fragment, Message, VersionError, PROTOCOL_VERSION};
use tokio::net::UdpSocket;

use client::session;
use client::socket::Transport;

async fn spawn_server() -> std::net::SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    let logs_dir = tempfile::tempdir().unwrap();
    let logger = Arc::new(support::Logger::new(logs_dir.path()).unwrap());

    tokio::spawn(async move {
        let _ = server::serve(socket, logger).await;
    });

    addr
}

fn is_descending(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] >= pair[1])
}

#[tokio::test(flavor = "multi_thread")]
async fn single_fragment_round_trip() {
    let server_addr = spawn_server().await;

    let client_socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client_socket.connect(server_addr).await.unwrap();
    let transport = Transport::new(client_socket);

    let logs_dir = tempfile::tempdir().unwrap();
    let logger = support::Logger::new(logs_dir.path()).unwrap();

    let numbers = session::run(&transport, 10, 100.0, &logger).await.unwrap();

    assert_eq!(numbers.len(), 10);
    assert!(is_descending(&numbers));
    for n in &numbers {
        assert!(*n >= -100.0 && *n < 100.0);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn multi_fragment_round_trip_has_no_duplicates_and_is_sorted() {
    let server_addr = spawn_server().await;

    let client_socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client_socket.connect(server_addr).await.unwrap();
    let transport = Transport::new(client_socket);

    let logs_dir = tempfile::tempdir().unwrap();
    let logger = support::Logger::new(logs_dir.path()).unwrap();

    let count = max_numbers_per_fragment() * 2 + 3;
    let numbers = session::run(&transport, count, 1000.0, &logger).await.unwrap();

    assert_eq!(numbers.len() as u64, count);
    assert!(is_descending(&numbers));

    let mut bits: std::collections::HashSet<u64> = std::collections::HashSet::new();
    for n in &numbers {
        assert!(bits.insert(n.to_bits()), "duplicate number in merged output");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn mismatched_protocol_version_is_rejected() {
    let server_addr = spawn_server().await;

    let client_socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client_socket.connect(server_addr).await.unwrap();

    let mut buffer = Vec::new();
    Message::ProtocolVersionRequest { protocol_version: PROTOCOL_VERSION + 1 }
        .encode(&mut buffer)
        .unwrap();
    client_socket.send(&buffer).await.unwrap();

    let mut response_buffer = vec![0u8; protocol::MESSAGE_MAX_SIZE];
    let len = client_socket.recv(&mut response_buffer).await.unwrap();
    let response = Message::decode(&response_buffer[..len]).unwrap();

    match response {
        Message::ProtocolVersionResponse { error, .. } => {
            assert_eq!(error, VersionError::ClientTooOld);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn zero_count_request_yields_empty_output() {
    let server_addr = spawn_server().await;

    let client_socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client_socket.connect(server_addr).await.unwrap();
    let transport = Transport::new(client_socket);

    let logs_dir = tempfile::tempdir().unwrap();
    let logger = support::Logger::new(logs_dir.path()).unwrap();

    let numbers = session::run(&transport, 0, 100.0, &logger).await.unwrap();
    assert!(numbers.is_empty());
}
