use crate::error::CodecError;

/// One-byte wire tag identifying which [`Message`] variant follows. Plays the
/// same role as the teacher's `ProtocolOpCode`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MessageTag {
    ProtocolVersionRequest = 0x01,
    ProtocolVersionResponse = 0x02,
    NumberSequenceRequest = 0x03,
    NumberSequenceResponse = 0x04,
    NumberSequenceAckRequest = 0x05,
}

pub struct UnknownMessageTag(pub u8);

impl TryFrom<u8> for MessageTag {
    type Error = UnknownMessageTag;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(MessageTag::ProtocolVersionRequest),
            0x02 => Ok(MessageTag::ProtocolVersionResponse),
            0x03 => Ok(MessageTag::NumberSequenceRequest),
            0x04 => Ok(MessageTag::NumberSequenceResponse),
            0x05 => Ok(MessageTag::NumberSequenceAckRequest),
            other => Err(UnknownMessageTag(other)),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VersionError {
    VersionOk = 0,
    ClientTooOld = 1,
    ClientTooNew = 2,
}

impl TryFrom<u8> for VersionError {
    type Error = UnknownMessageTag;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(VersionError::VersionOk),
            1 => Ok(VersionError::ClientTooOld),
            2 => Ok(VersionError::ClientTooNew),
            other => Err(UnknownMessageTag(other)),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SequenceError {
    SequenceOk = 0,
    InvalidUpperBound = 1,
}

impl TryFrom<u8> for SequenceError {
    type Error = UnknownMessageTag;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SequenceError::SequenceOk),
            1 => Ok(SequenceError::InvalidUpperBound),
            other => Err(UnknownMessageTag(other)),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AckVerdict {
    AckOk = 0,
    AckInvalid = 1,
}

impl TryFrom<u8> for AckVerdict {
    type Error = UnknownMessageTag;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AckVerdict::AckOk),
            1 => Ok(AckVerdict::AckInvalid),
            other => Err(UnknownMessageTag(other)),
        }
    }
}

/// The full set of messages exchanged between client and server. Each
/// variant corresponds 1:1 to a message in the handshake/request/fragment/ack
/// exchange.
#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    ProtocolVersionRequest {
        protocol_version: u32,
    },
    ProtocolVersionResponse {
        protocol_version: u32,
        error: VersionError,
        error_message: String,
    },
    NumberSequenceRequest {
        number_count: u64,
        upper_bound: f64,
    },
    NumberSequenceResponse {
        number_count: u64,
        sequence_index: u64,
        sequence_count: u64,
        sequence_number_count: u64,
        numbers: Vec<f64>,
        checksum: u64,
        error: SequenceError,
        error_message: String,
    },
    NumberSequenceAckRequest {
        sequence_index: u64,
        ack: AckVerdict,
        checksum: u64,
    },
}

impl Message {
    pub fn tag(&self) -> MessageTag {
        match self {
            Message::ProtocolVersionRequest { .. } => MessageTag::ProtocolVersionRequest,
            Message::ProtocolVersionResponse { .. } => MessageTag::ProtocolVersionResponse,
            Message::NumberSequenceRequest { .. } => MessageTag::NumberSequenceRequest,
            Message::NumberSequenceResponse { .. } => MessageTag::NumberSequenceResponse,
            Message::NumberSequenceAckRequest { .. } => MessageTag::NumberSequenceAckRequest,
        }
    }

    pub fn encode(&self, buffer: &mut Vec<u8>) -> Result<(), CodecError> {
        crate::serialize::serialize_message(self, buffer)
    }

    pub fn decode(bytes: &[u8]) -> Result<Message, CodecError> {
        crate::deserialize::deserialize_message(bytes)
    }
}
