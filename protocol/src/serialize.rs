use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::CodecError;
use crate::message::Message;

fn write_string(buffer: &mut Vec<u8>, value: &str) -> Result<(), CodecError> {
    buffer.write_u32::<LittleEndian>(value.len() as u32)?;
    buffer.extend_from_slice(value.as_bytes());
    Ok(())
}

fn write_numbers(buffer: &mut Vec<u8>, numbers: &[f64]) -> Result<(), CodecError> {
    buffer.write_u32::<LittleEndian>(numbers.len() as u32)?;
    for number in numbers {
        buffer.write_f64::<LittleEndian>(*number)?;
    }
    Ok(())
}

pub fn serialize_message(message: &Message, buffer: &mut Vec<u8>) -> Result<(), CodecError> {
    buffer.write_u8(message.tag() as u8)?;

    match message {
        Message::ProtocolVersionRequest { protocol_version } => {
            buffer.write_u32::<LittleEndian>(*protocol_version)?;
        }
        Message::ProtocolVersionResponse {
            protocol_version,
            error,
            error_message,
        } => {
            buffer.write_u32::<LittleEndian>(*protocol_version)?;
            buffer.write_u8(*error as u8)?;
            write_string(buffer, error_message)?;
        }
        Message::NumberSequenceRequest {
            number_count,
            upper_bound,
        } => {
            buffer.write_u64::<LittleEndian>(*number_count)?;
            buffer.write_f64::<LittleEndian>(*upper_bound)?;
        }
        Message::NumberSequenceResponse {
            number_count,
            sequence_index,
            sequence_count,
            sequence_number_count,
            numbers,
            checksum,
            error,
            error_message,
        } => {
            buffer.write_u64::<LittleEndian>(*number_count)?;
            buffer.write_u64::<LittleEndian>(*sequence_index)?;
            buffer.write_u64::<LittleEndian>(*sequence_count)?;
            buffer.write_u64::<LittleEndian>(*sequence_number_count)?;
            write_numbers(buffer, numbers)?;
            buffer.write_u64::<LittleEndian>(*checksum)?;
            buffer.write_u8(*error as u8)?;
            write_string(buffer, error_message)?;
        }
        Message::NumberSequenceAckRequest {
            sequence_index,
            ack,
            checksum,
        } => {
            buffer.write_u64::<LittleEndian>(*sequence_index)?;
            buffer.write_u8(*ack as u8)?;
            buffer.write_u64::<LittleEndian>(*checksum)?;
        }
    }

    Ok(())
}
