//! How channel ids are laid out on a connection.
//!
//! The first four channel ids are reserved for control and command traffic and never carry a
//! media stream.  Each media stream past that gets a block of five channel ids, of which the first
//! three carry its data, video and audio messages.

/// Highest channel id reserved for control traffic
pub const MAX_CONTROL_CHANNEL_ID: u32 = 3;

/// Channel protocol control messages (chunk size, acknowledgements, bandwidth) are sent on
pub const PROTOCOL_CHANNEL_ID: u32 = 2;

/// Channel connection level commands are sent on
pub const COMMAND_CHANNEL_ID: u32 = 3;

const CHANNELS_PER_STREAM: u32 = 5;

pub fn is_control_channel(channel_id: u32) -> bool {
    channel_id <= MAX_CONTROL_CHANNEL_ID
}

/// First channel id of the block belonging to a stream.  Stream 0 is the connection itself and
/// uses the command channel.  Returns `None` when the block would not fit in a `u32` channel id.
pub fn get_channel_id_for_stream_id(stream_id: u32) -> Option<u32> {
    if stream_id == 0 {
        return Some(COMMAND_CHANNEL_ID);
    }

    (stream_id - 1)
        .checked_mul(CHANNELS_PER_STREAM)
        .and_then(|x| x.checked_add(MAX_CONTROL_CHANNEL_ID + 1))
}

pub fn get_stream_id_for_channel_id(channel_id: u32) -> u32 {
    if is_control_channel(channel_id) {
        return 0;
    }

    (channel_id - MAX_CONTROL_CHANNEL_ID - 1) / CHANNELS_PER_STREAM + 1
}

pub fn get_data_channel_id(stream_id: u32) -> Option<u32> {
    get_channel_id_for_stream_id(stream_id)
}

pub fn get_video_channel_id(stream_id: u32) -> Option<u32> {
    get_channel_id_for_stream_id(stream_id).and_then(|x| x.checked_add(1))
}

pub fn get_audio_channel_id(stream_id: u32) -> Option<u32> {
    get_channel_id_for_stream_id(stream_id).and_then(|x| x.checked_add(2))
}
