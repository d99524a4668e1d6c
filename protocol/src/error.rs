use std::io;
use thiserror::Error;

/// Everything that can go wrong turning a [`crate::message::Message`] into bytes
/// or back. Mirrors the shape of the teacher's `SerializeError`/`DeserializeError`
/// pair, collapsed into one enum since both directions share a wire format.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unknown message tag: {0}")]
    UnknownTag(u8),

    #[error("message buffer truncated while reading {field}")]
    Truncated { field: &'static str },

    #[error("string field was not valid utf-8")]
    InvalidUtf8,

    #[error("i/o error while encoding or decoding: {0}")]
    Io(#[from] io::Error),
}
