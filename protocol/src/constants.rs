/// Protocol version this build speaks. A client and server with mismatched
/// versions never progress past the handshake; see [`crate::message::VersionError`].
pub const PROTOCOL_VERSION: u32 = 1;

/// Largest serialized payload either side will put on the wire for a single
/// datagram. Chosen to stay under the common safe-MTU bound used by the
/// original implementation.
pub const MESSAGE_MAX_SIZE: usize = 508;

/// How many times the server will retransmit the same fragment after an
/// `ACK_INVALID` before abandoning it and moving on.
pub const SEQUENCE_RESPONSE_MAX_RETRIES_COUNT: u32 = 5;

/// How many consecutive collisions against a peer's uniqueness set are
/// tolerated before a draw is considered exhausted.
pub const GENERATION_MAX_COLLISIONS: u32 = 10;
