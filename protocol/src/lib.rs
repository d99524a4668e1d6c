//! Wire protocol shared between the number-sequence server and client:
//! message types, their `byteorder`-based codec, the arithmetic checksum used
//! to detect corruption, and the fragment-sizing math that keeps every
//! response under the configured datagram budget.

pub mod checksum;
pub mod constants;
pub mod error;
pub mod fragment;
pub mod message;

mod deserialize;
mod serialize;

pub use checksum::compute_checksum;
pub use constants::{
    GENERATION_MAX_COLLISIONS, MESSAGE_MAX_SIZE, PROTOCOL_VERSION, SEQUENCE_RESPONSE_MAX_RETRIES_COUNT,
};
pub use error::CodecError;
pub use fragment::{fragment_plan, max_numbers_per_fragment, FragmentPlan};
pub use message::{AckVerdict, Message, MessageTag, SequenceError, VersionError};
