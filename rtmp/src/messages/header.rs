use super::DataType;
use crate::time::RtmpTimestamp;

/// Wire metadata for a single outbound message.
///
/// Exactly one header is built per event written to a channel.  The physical connection uses
/// it to pick the chunk stream, delta encode the timestamp and fill in the message type and
/// message stream id fields of the chunk header.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Header {
    pub channel_id: u32,
    pub timer: RtmpTimestamp,
    pub stream_id: u32,
    pub data_type: DataType,
}

impl Header {
    pub fn new(channel_id: u32, timer: RtmpTimestamp, stream_id: u32, data_type: DataType) -> Header {
        Header {
            channel_id,
            timer,
            stream_id,
            data_type,
        }
    }
}
