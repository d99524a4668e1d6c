use protocol::{
    compute_checksum, AckVerdict, Message, SequenceError, VersionError, PROTOCOL_VERSION,
    SEQUENCE_RESPONSE_MAX_RETRIES_COUNT,
};
use support::Logger;

use crate::error::SessionError;
use crate::merge::FragmentStack;
use crate::socket::Transport;

/// Drives the client through the handshake, the sequence request, and
/// fragment ingestion, returning the fully merged descending sequence.
pub async fn run(
    transport: &Transport,
    number_count: u64,
    upper_bound: f64,
    logger: &Logger,
) -> Result<Vec<f64>, SessionError> {
    // C0 -> C1: version handshake.
    transport
        .send(&Message::ProtocolVersionRequest { protocol_version: PROTOCOL_VERSION })
        .await?;

    let response = transport.recv().await?;
    match response {
        Message::ProtocolVersionResponse { error: VersionError::VersionOk, .. } => {}
        Message::ProtocolVersionResponse { error, error_message, .. } => {
            logger.log(format!("server rejected protocol version ({error:?}): {error_message}"));
            return Err(SessionError::VersionRejected(error_message));
        }
        _ => return Err(SessionError::UnexpectedMessage),
    }

    // C2 -> C3: request the sequence, then ingest fragments until exhausted.
    transport
        .send(&Message::NumberSequenceRequest { number_count, upper_bound })
        .await?;

    let mut stack = FragmentStack::new();
    let mut expected_sequence_count: Option<u64> = None;
    let mut next_index: u64 = 0;
    let mut retries_for_current_fragment: u32 = 0;

    loop {
        let response = transport.recv().await?;
        let (sequence_index, sequence_count, sequence_number_count, numbers, checksum, error, error_message) =
            match response {
                Message::NumberSequenceResponse {
                    sequence_index,
                    sequence_count,
                    sequence_number_count,
                    numbers,
                    checksum,
                    error,
                    error_message,
                    ..
                } => (sequence_index, sequence_count, sequence_number_count, numbers, checksum, error, error_message),
                _ => return Err(SessionError::UnexpectedMessage),
            };

        if error != SequenceError::SequenceOk {
            logger.log(format!("server rejected sequence request: {error_message}"));
            return Err(SessionError::SequenceRejected(error_message));
        }

        let expected_count = *expected_sequence_count.get_or_insert(sequence_count);

        if expected_count == 0 {
            break;
        }

        if sequence_index != next_index {
            // A retransmission of a fragment we've already accepted; ack it
            // again so the server can advance, but don't re-ingest it.
            transport
                .send(&Message::NumberSequenceAckRequest {
                    sequence_index,
                    ack: AckVerdict::AckOk,
                    checksum,
                })
                .await?;
            continue;
        }

        let recomputed = compute_checksum(&numbers);
        let ack = if recomputed == checksum { AckVerdict::AckOk } else { AckVerdict::AckInvalid };

        transport
            .send(&Message::NumberSequenceAckRequest { sequence_index, ack, checksum })
            .await?;

        if ack == AckVerdict::AckInvalid {
            retries_for_current_fragment += 1;
            if retries_for_current_fragment > SEQUENCE_RESPONSE_MAX_RETRIES_COUNT {
                return Err(SessionError::RetriesExhausted(sequence_index));
            }
            continue;
        }

        debug_assert_eq!(numbers.len() as u64, sequence_number_count);
        stack.push(numbers);
        next_index += 1;
        retries_for_current_fragment = 0;

        if next_index >= expected_count {
            break;
        }
    }

    Ok(stack.finish())
}
