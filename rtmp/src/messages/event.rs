use bytes::Bytes;
use rml_amf0::Amf0Value;

use super::DataType;
use crate::time::RtmpTimestamp;

/// Whether a command expects the peer to reply to it
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub enum CommandKind {
    /// A remote procedure call.  The transaction id is used by the peer to correlate its reply.
    Call,

    /// A one way notification that no handler on the peer will respond to
    Notification,
}

/// A named command sent to the peer, such as `onStatus` or `|RtmpSampleAccess`.
#[derive(PartialEq, Debug, Clone)]
pub struct CommandEvent {
    pub kind: CommandKind,
    pub name: String,
    pub arguments: Vec<Amf0Value>,
    pub transaction_id: u32,

    /// Raw bytes appended after the encoded arguments
    pub data: Option<Bytes>,
    pub timestamp: RtmpTimestamp,
}

impl CommandEvent {
    /// Creates a command that expects a reply
    pub fn call(name: &str, arguments: Vec<Amf0Value>) -> CommandEvent {
        CommandEvent::create(CommandKind::Call, name, arguments)
    }

    /// Creates a one way command
    pub fn notification(name: &str, arguments: Vec<Amf0Value>) -> CommandEvent {
        CommandEvent::create(CommandKind::Notification, name, arguments)
    }

    pub fn with_transaction_id(mut self, transaction_id: u32) -> CommandEvent {
        self.transaction_id = transaction_id;
        self
    }

    pub fn with_data(mut self, data: Bytes) -> CommandEvent {
        self.data = Some(data);
        self
    }

    pub fn with_timestamp(mut self, timestamp: RtmpTimestamp) -> CommandEvent {
        self.timestamp = timestamp;
        self
    }

    pub fn expects_reply(&self) -> bool {
        self.kind == CommandKind::Call
    }

    fn create(kind: CommandKind, name: &str, arguments: Vec<Amf0Value>) -> CommandEvent {
        CommandEvent {
            kind,
            name: name.to_string(),
            arguments,
            transaction_id: 0,
            data: None,
            timestamp: RtmpTimestamp::new(0),
        }
    }
}

/// An application level event that can be written to a logical channel
#[derive(PartialEq, Debug, Clone)]
pub enum RtmpEvent {
    /// A call or notification addressed to a named handler on the peer
    Command(CommandEvent),

    /// A message containing audio data
    AudioData { timestamp: RtmpTimestamp, data: Bytes },

    /// A message containing video data
    VideoData { timestamp: RtmpTimestamp, data: Bytes },

    /// A message containing an array of amf0 values, such as stream metadata
    StreamData {
        timestamp: RtmpTimestamp,
        values: Vec<Amf0Value>,
    },

    /// Pre-encoded data for a message type this layer has no dedicated event for
    Unknown {
        type_id: u8,
        timestamp: RtmpTimestamp,
        data: Bytes,
    },
}

impl RtmpEvent {
    pub fn get_timestamp(&self) -> RtmpTimestamp {
        match *self {
            RtmpEvent::Command(ref command) => command.timestamp,
            RtmpEvent::AudioData { timestamp, .. } => timestamp,
            RtmpEvent::VideoData { timestamp, .. } => timestamp,
            RtmpEvent::StreamData { timestamp, .. } => timestamp,
            RtmpEvent::Unknown { timestamp, .. } => timestamp,
        }
    }

    pub fn get_data_type(&self) -> DataType {
        match *self {
            RtmpEvent::Command(ref command) => match command.kind {
                CommandKind::Call => DataType::Invoke,
                CommandKind::Notification => DataType::Notify,
            },

            RtmpEvent::AudioData { .. } => DataType::Audio,
            RtmpEvent::VideoData { .. } => DataType::Video,
            RtmpEvent::StreamData { .. } => DataType::Notify,
            RtmpEvent::Unknown { type_id, .. } => DataType::from_type_id(type_id),
        }
    }
}

impl From<CommandEvent> for RtmpEvent {
    fn from(command: CommandEvent) -> Self {
        RtmpEvent::Command(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_is_tagged_as_invoke() {
        let event = RtmpEvent::from(CommandEvent::call("play", vec![Amf0Value::Null]));

        assert_eq!(event.get_data_type(), DataType::Invoke);
    }

    #[test]
    fn notification_is_tagged_as_notify() {
        let event = RtmpEvent::from(CommandEvent::notification("onStatus", vec![]));

        assert_eq!(event.get_data_type(), DataType::Notify);
    }

    #[test]
    fn media_events_report_their_own_timestamp() {
        let audio = RtmpEvent::AudioData {
            timestamp: RtmpTimestamp::new(33),
            data: Bytes::from_static(&[0xaf, 0x01]),
        };

        let video = RtmpEvent::VideoData {
            timestamp: RtmpTimestamp::new(40),
            data: Bytes::from_static(&[0x17, 0x01]),
        };

        assert_eq!(audio.get_timestamp(), 33);
        assert_eq!(audio.get_data_type(), DataType::Audio);
        assert_eq!(video.get_timestamp(), 40);
        assert_eq!(video.get_data_type(), DataType::Video);
    }

    #[test]
    fn unknown_event_uses_its_raw_type_id() {
        let event = RtmpEvent::Unknown {
            type_id: 22,
            timestamp: RtmpTimestamp::new(0),
            data: Bytes::new(),
        };

        assert_eq!(event.get_data_type(), DataType::Aggregate);
    }

    #[test]
    fn command_builders_set_correlation_id_and_payload() {
        let command = CommandEvent::notification("|RtmpSampleAccess", vec![])
            .with_transaction_id(7)
            .with_data(Bytes::from_static(&[1, 0, 1, 0]))
            .with_timestamp(RtmpTimestamp::new(12));

        assert!(!command.expects_reply());
        assert_eq!(command.transaction_id, 7);
        assert_eq!(command.data, Some(Bytes::from_static(&[1, 0, 1, 0])));
        assert_eq!(command.timestamp, 12);
    }
}
