/*!
This module contains the data model handed from logical channels to the physical connection.

Every outbound event is paired with a `Header` describing which channel it is multiplexed on,
which media stream it belongs to, its timestamp, and what type of RTMP message it is.  The
resulting `Packet` is what the physical connection chunks and encodes onto the wire.
*/

mod event;
mod header;
mod packet;

pub use self::event::{CommandEvent, CommandKind, RtmpEvent};
pub use self::header::Header;
pub use self::packet::Packet;

/// The payload type tag of an RTMP message, as carried in the message type id field
/// of a chunk header.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum DataType {
    /// Changes the maximum chunk size the sender will use
    ChunkSize,

    /// Tells the peer to discard a partially received message
    Abort,

    /// Acknowledgement of the number of bytes read so far
    BytesRead,

    /// User control events (stream begin, ping, buffer length)
    UserControl,

    /// Window acknowledgement size
    ServerBandwidth,

    /// Set peer bandwidth
    ClientBandwidth,

    /// Audio data
    Audio,

    /// Video data
    Video,

    /// AMF3 encoded data message
    FlexStreamSend,

    /// AMF3 encoded shared object message
    FlexSharedObject,

    /// AMF3 encoded command message
    FlexMessage,

    /// AMF0 encoded one way notification or data message (e.g. stream metadata)
    Notify,

    /// AMF0 encoded shared object message
    SharedObject,

    /// AMF0 encoded command that expects a reply
    Invoke,

    /// Aggregate of several audio/video/data messages
    Aggregate,

    /// A type id we do not know about
    Unknown(u8),
}

impl DataType {
    pub fn from_type_id(type_id: u8) -> DataType {
        match type_id {
            1 => DataType::ChunkSize,
            2 => DataType::Abort,
            3 => DataType::BytesRead,
            4 => DataType::UserControl,
            5 => DataType::ServerBandwidth,
            6 => DataType::ClientBandwidth,
            8 => DataType::Audio,
            9 => DataType::Video,
            15 => DataType::FlexStreamSend,
            16 => DataType::FlexSharedObject,
            17 => DataType::FlexMessage,
            18 => DataType::Notify,
            19 => DataType::SharedObject,
            20 => DataType::Invoke,
            22 => DataType::Aggregate,
            x => DataType::Unknown(x),
        }
    }

    pub fn get_type_id(&self) -> u8 {
        match *self {
            DataType::ChunkSize => 1_u8,
            DataType::Abort => 2_u8,
            DataType::BytesRead => 3_u8,
            DataType::UserControl => 4_u8,
            DataType::ServerBandwidth => 5_u8,
            DataType::ClientBandwidth => 6_u8,
            DataType::Audio => 8_u8,
            DataType::Video => 9_u8,
            DataType::FlexStreamSend => 15_u8,
            DataType::FlexSharedObject => 16_u8,
            DataType::FlexMessage => 17_u8,
            DataType::Notify => 18_u8,
            DataType::SharedObject => 19_u8,
            DataType::Invoke => 20_u8,
            DataType::Aggregate => 22_u8,
            DataType::Unknown(type_id) => type_id,
        }
    }

    /// Protocol control messages are only ever valid on the protocol control channel
    /// and with a message stream id of zero.
    pub fn is_control(&self) -> bool {
        match self.get_type_id() {
            1..=6 => true,
            _ => false,
        }
    }
}
