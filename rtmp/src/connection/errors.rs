use thiserror::Error;

/// Errors raised while binding media streams to a connection
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConnectionError {
    /// Stream id 0 addresses the connection itself and can not be registered as a media stream
    #[error("Stream id 0 is reserved for connection level messages")]
    StreamIdZeroIsReserved,

    /// The stream id is larger than the connection is configured to allow
    #[error("Stream id {stream_id} exceeds the maximum of {max_streams} streams")]
    StreamIdOutOfRange { stream_id: u32, max_streams: u32 },

    /// A stream is already registered with this id
    #[error("A stream with id {0} is already registered on this connection")]
    StreamAlreadyRegistered(u32),
}
