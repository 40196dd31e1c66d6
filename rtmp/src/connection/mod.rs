//! The physical connection as seen by logical channels.
//!
//! A `Channel` never owns its connection and never touches the connection's stream bindings or
//! invoke id counter directly.  It only calls the operations of the `RtmpConnection` trait, which
//! is implemented by whatever owns the socket and performs chunking and encoding.
//! `MultiplexedConnection` is an in-memory implementation that queues assembled packets for an
//! external framing layer to drain.

pub mod channel_layout;
mod config;
mod errors;
mod multiplexed;

pub use self::config::ConnectionConfig;
pub use self::errors::ConnectionError;
pub use self::multiplexed::MultiplexedConnection;

use crate::messages::Packet;
use crate::scope::Scope;
use std::rc::Rc;

/// A media stream that is currently bound to one or more channels of a connection
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct StreamHandle {
    stream_id: u32,
}

impl StreamHandle {
    pub fn new(stream_id: u32) -> StreamHandle {
        StreamHandle { stream_id }
    }

    pub fn get_stream_id(&self) -> u32 {
        self.stream_id
    }
}

/// Operations a logical channel requires from the physical connection it is multiplexed over.
pub trait RtmpConnection {
    /// Releases the channel id and its stream binding.  Must tolerate unknown and already
    /// closed channel ids.
    fn close_channel(&mut self, channel_id: u32);

    /// The media stream currently bound to the channel, if any
    fn get_stream_by_channel_id(&self, channel_id: u32) -> Option<StreamHandle>;

    /// The message stream id packets on this channel should be addressed to, or 0 if the
    /// channel has no binding.
    fn get_stream_id_for_channel(&self, channel_id: u32) -> u32;

    /// Hands a fully assembled packet to the framing pipeline
    fn write(&mut self, packet: Packet);

    /// The current request correlation id to tag outbound commands with
    fn get_invoke_id(&self) -> u32;

    fn get_scope(&self) -> Option<Rc<dyn Scope>>;
}
