use std::net::SocketAddr;

use protocol::{
    compute_checksum, fragment_plan, AckVerdict, Message, SequenceError, VersionError,
    PROTOCOL_VERSION, SEQUENCE_RESPONSE_MAX_RETRIES_COUNT,
};
use support::Logger;
use tokio::sync::mpsc;

use crate::error::SessionError;
use crate::generator::PeerSession;
use crate::socket::{decode, Transport};

/// Drives one peer through the version handshake, the sequence request, and
/// fragment-by-fragment emission with retry-bounded acknowledgement. Returns
/// normally on every exit path (handshake rejection, invalid bound, transport
/// failure, or a clean finish) so the caller can unconditionally release this
/// peer's map entry afterward.
pub async fn run(
    transport: Transport,
    peer: SocketAddr,
    mut inbox: mpsc::Receiver<Vec<u8>>,
    logger: &Logger,
) {
    if let Err(error) = run_inner(&transport, peer, &mut inbox).await {
        logger.log(format!("session with {peer} ended: {error}"));
    }
}

async fn run_inner(
    transport: &Transport,
    peer: SocketAddr,
    inbox: &mut mpsc::Receiver<Vec<u8>>,
) -> Result<(), SessionError> {
    // S0: await the version handshake.
    let request = next_message(inbox).await?;
    let client_version = match request {
        Message::ProtocolVersionRequest { protocol_version } => protocol_version,
        _ => return Err(SessionError::UnexpectedMessage),
    };

    let version_error = if client_version == PROTOCOL_VERSION {
        VersionError::VersionOk
    } else if client_version < PROTOCOL_VERSION {
        VersionError::ClientTooOld
    } else {
        VersionError::ClientTooNew
    };

    let error_message = match version_error {
        VersionError::VersionOk => String::new(),
        VersionError::ClientTooOld => "client protocol version is older than this server".to_string(),
        VersionError::ClientTooNew => "client protocol version is newer than this server".to_string(),
    };

    transport
        .send_to(
            &Message::ProtocolVersionResponse {
                protocol_version: PROTOCOL_VERSION,
                error: version_error,
                error_message,
            },
            peer,
        )
        .await?;

    if version_error != VersionError::VersionOk {
        return Ok(());
    }

    // S1: await the sequence request.
    let request = next_message(inbox).await?;
    let (number_count, upper_bound) = match request {
        Message::NumberSequenceRequest { number_count, upper_bound } => (number_count, upper_bound),
        _ => return Err(SessionError::UnexpectedMessage),
    };

    if upper_bound <= 0.0 {
        transport
            .send_to(
                &Message::NumberSequenceResponse {
                    number_count: 0,
                    sequence_index: 0,
                    sequence_count: 0,
                    sequence_number_count: 0,
                    numbers: Vec::new(),
                    checksum: 0,
                    error: SequenceError::InvalidUpperBound,
                    error_message: "Upper bound must be greater than zero".to_string(),
                },
                peer,
            )
            .await?;
        return Ok(());
    }

    // S2: emit fragments in order, retrying each until acknowledged or abandoned.
    let plan = fragment_plan(number_count);

    if plan.sequence_count == 0 {
        transport
            .send_to(
                &Message::NumberSequenceResponse {
                    number_count: 0,
                    sequence_index: 0,
                    sequence_count: 0,
                    sequence_number_count: 0,
                    numbers: Vec::new(),
                    checksum: 0,
                    error: SequenceError::SequenceOk,
                    error_message: String::new(),
                },
                peer,
            )
            .await?;
        return Ok(());
    }

    let mut peer_session = PeerSession::new();

    for sequence_index in 0..plan.sequence_count {
        let fragment_size = plan.numbers_in_fragment(sequence_index);
        let numbers = peer_session.draw_unique(fragment_size, upper_bound)?;
        let checksum = compute_checksum(&numbers);

        let response = Message::NumberSequenceResponse {
            number_count,
            sequence_index,
            sequence_count: plan.sequence_count,
            sequence_number_count: fragment_size,
            numbers,
            checksum,
            error: SequenceError::SequenceOk,
            error_message: String::new(),
        };

        let mut acknowledged = false;
        for _ in 0..=SEQUENCE_RESPONSE_MAX_RETRIES_COUNT {
            transport.send_to(&response, peer).await?;

            let ack = next_message(inbox).await?;
            match ack {
                Message::NumberSequenceAckRequest { sequence_index: acked_index, ack, .. }
                    if acked_index == sequence_index =>
                {
                    if ack == AckVerdict::AckOk {
                        acknowledged = true;
                        break;
                    }
                }
                _ => return Err(SessionError::UnexpectedMessage),
            }
        }

        if !acknowledged {
            continue;
        }
    }

    Ok(())
}

async fn next_message(inbox: &mut mpsc::Receiver<Vec<u8>>) -> Result<Message, SessionError> {
    let bytes = inbox.recv().await.ok_or(SessionError::UnexpectedMessage)?;
    Ok(decode(&bytes)?)
}
