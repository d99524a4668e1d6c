use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::CodecError;
use crate::message::{AckVerdict, Message, MessageTag, SequenceError, VersionError};

fn read_u32(cursor: &mut Cursor<&[u8]>, field: &'static str) -> Result<u32, CodecError> {
    cursor
        .read_u32::<LittleEndian>()
        .map_err(|_| CodecError::Truncated { field })
}

fn read_u64(cursor: &mut Cursor<&[u8]>, field: &'static str) -> Result<u64, CodecError> {
    cursor
        .read_u64::<LittleEndian>()
        .map_err(|_| CodecError::Truncated { field })
}

fn read_f64(cursor: &mut Cursor<&[u8]>, field: &'static str) -> Result<f64, CodecError> {
    cursor
        .read_f64::<LittleEndian>()
        .map_err(|_| CodecError::Truncated { field })
}

fn read_u8(cursor: &mut Cursor<&[u8]>, field: &'static str) -> Result<u8, CodecError> {
    cursor
        .read_u8()
        .map_err(|_| CodecError::Truncated { field })
}

fn read_string(cursor: &mut Cursor<&[u8]>, field: &'static str) -> Result<String, CodecError> {
    let len = read_u32(cursor, field)? as usize;
    let mut bytes = vec![0u8; len];
    cursor
        .read_exact(&mut bytes)
        .map_err(|_| CodecError::Truncated { field })?;
    String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
}

fn read_numbers(cursor: &mut Cursor<&[u8]>, field: &'static str) -> Result<Vec<f64>, CodecError> {
    let count = read_u32(cursor, field)? as usize;
    let mut numbers = Vec::with_capacity(count);
    for _ in 0..count {
        numbers.push(read_f64(cursor, field)?);
    }
    Ok(numbers)
}

pub fn deserialize_message(bytes: &[u8]) -> Result<Message, CodecError> {
    let mut cursor = Cursor::new(bytes);
    let raw_tag = read_u8(&mut cursor, "tag")?;
    let tag = MessageTag::try_from(raw_tag).map_err(|e| CodecError::UnknownTag(e.0))?;

    let message = match tag {
        MessageTag::ProtocolVersionRequest => Message::ProtocolVersionRequest {
            protocol_version: read_u32(&mut cursor, "protocol_version")?,
        },
        MessageTag::ProtocolVersionResponse => {
            let protocol_version = read_u32(&mut cursor, "protocol_version")?;
            let raw_error = read_u8(&mut cursor, "error")?;
            let error = VersionError::try_from(raw_error).map_err(|e| CodecError::UnknownTag(e.0))?;
            let error_message = read_string(&mut cursor, "error_message")?;
            Message::ProtocolVersionResponse {
                protocol_version,
                error,
                error_message,
            }
        }
        MessageTag::NumberSequenceRequest => Message::NumberSequenceRequest {
            number_count: read_u64(&mut cursor, "number_count")?,
            upper_bound: read_f64(&mut cursor, "upper_bound")?,
        },
        MessageTag::NumberSequenceResponse => {
            let number_count = read_u64(&mut cursor, "number_count")?;
            let sequence_index = read_u64(&mut cursor, "sequence_index")?;
            let sequence_count = read_u64(&mut cursor, "sequence_count")?;
            let sequence_number_count = read_u64(&mut cursor, "sequence_number_count")?;
            let numbers = read_numbers(&mut cursor, "numbers")?;
            let checksum = read_u64(&mut cursor, "checksum")?;
            let raw_error = read_u8(&mut cursor, "error")?;
            let error = SequenceError::try_from(raw_error).map_err(|e| CodecError::UnknownTag(e.0))?;
            let error_message = read_string(&mut cursor, "error_message")?;
            Message::NumberSequenceResponse {
                number_count,
                sequence_index,
                sequence_count,
                sequence_number_count,
                numbers,
                checksum,
                error,
                error_message,
            }
        }
        MessageTag::NumberSequenceAckRequest => {
            let sequence_index = read_u64(&mut cursor, "sequence_index")?;
            let raw_ack = read_u8(&mut cursor, "ack")?;
            let ack = AckVerdict::try_from(raw_ack).map_err(|e| CodecError::UnknownTag(e.0))?;
            let checksum = read_u64(&mut cursor, "checksum")?;
            Message::NumberSequenceAckRequest {
                sequence_index,
                ack,
                checksum,
            }
        }
    };

    Ok(message)
}
