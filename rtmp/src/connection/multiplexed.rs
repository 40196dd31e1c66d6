use log::{debug, warn};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use super::channel_layout;
use super::{ConnectionConfig, ConnectionError, RtmpConnection, StreamHandle};
use crate::channel::{Channel, OutputStream};
use crate::messages::Packet;
use crate::scope::Scope;

/// An in-memory connection that tracks channel and stream bindings and queues the packets
/// channels write to it.
///
/// The `MultiplexedConnection` does not perform any chunking or encoding.  Packets are kept
/// in the order they were written and must be drained with `drain_outbound()` and passed to
/// the framing layer **in that order**, otherwise chunk header compression on the peer will
/// break.
///
/// Channels hold a weak reference to the connection, so the connection is shared as an
/// `Rc<RefCell<MultiplexedConnection>>` and must not be borrowed while a channel is being
/// written to.
pub struct MultiplexedConnection {
    config: ConnectionConfig,
    scope: Option<Rc<dyn Scope>>,
    streams: HashMap<u32, StreamHandle>,
    channel_bindings: HashMap<u32, u32>,
    open_channels: HashSet<u32>,
    invoke_id: u32,
    outbound: VecDeque<Packet>,
}

impl MultiplexedConnection {
    pub fn new(config: ConnectionConfig) -> MultiplexedConnection {
        MultiplexedConnection {
            invoke_id: config.initial_invoke_id,
            config,
            scope: None,
            streams: HashMap::new(),
            channel_bindings: HashMap::new(),
            open_channels: HashSet::new(),
            outbound: VecDeque::new(),
        }
    }

    /// Wraps the connection so channels can be created against it
    pub fn into_shared(self) -> Rc<RefCell<MultiplexedConnection>> {
        Rc::new(RefCell::new(self))
    }

    pub fn set_scope(&mut self, scope: Rc<dyn Scope>) {
        self.scope = Some(scope);
    }

    /// Returns a channel handle for the specified id, opening the channel if needed
    pub fn get_channel(connection: &Rc<RefCell<MultiplexedConnection>>, channel_id: u32) -> Channel<MultiplexedConnection> {
        connection.borrow_mut().open_channels.insert(channel_id);
        Channel::new(connection, channel_id)
    }

    /// Registers a media stream and binds the data, video and audio channels of its block
    /// of channel ids to it.
    pub fn create_output_stream(
        connection: &Rc<RefCell<MultiplexedConnection>>,
        stream_id: u32,
    ) -> Result<OutputStream<MultiplexedConnection>, ConnectionError> {
        let (data_channel_id, video_channel_id, audio_channel_id) = {
            let mut inner = connection.borrow_mut();
            inner.register_stream(StreamHandle::new(stream_id))?;

            let channel_ids = (
                channel_layout::get_data_channel_id(stream_id),
                channel_layout::get_video_channel_id(stream_id),
                channel_layout::get_audio_channel_id(stream_id),
            );

            match channel_ids {
                (Some(data), Some(video), Some(audio)) => (data, video, audio),
                _ => {
                    inner.unregister_stream(stream_id);
                    return Err(ConnectionError::StreamIdOutOfRange {
                        stream_id,
                        max_streams: inner.config.max_streams,
                    });
                }
            }
        };

        {
            let mut inner = connection.borrow_mut();
            for channel_id in [data_channel_id, video_channel_id, audio_channel_id].iter() {
                inner.bind_channel(*channel_id, stream_id);
            }
        }

        Ok(OutputStream::new(
            MultiplexedConnection::get_channel(connection, data_channel_id),
            MultiplexedConnection::get_channel(connection, video_channel_id),
            MultiplexedConnection::get_channel(connection, audio_channel_id),
        ))
    }

    pub fn register_stream(&mut self, stream: StreamHandle) -> Result<(), ConnectionError> {
        let stream_id = stream.get_stream_id();
        if stream_id == 0 {
            return Err(ConnectionError::StreamIdZeroIsReserved);
        }

        if stream_id > self.config.max_streams {
            return Err(ConnectionError::StreamIdOutOfRange {
                stream_id,
                max_streams: self.config.max_streams,
            });
        }

        if self.streams.contains_key(&stream_id) {
            return Err(ConnectionError::StreamAlreadyRegistered(stream_id));
        }

        debug!("Registered stream {}", stream_id);
        self.streams.insert(stream_id, stream);
        Ok(())
    }

    /// Removes a media stream.  Channel bindings to it are left in place, so writes on those
    /// channels are discarded while status notifications can still be addressed to the stream id.
    pub fn unregister_stream(&mut self, stream_id: u32) -> Option<StreamHandle> {
        let removed = self.streams.remove(&stream_id);
        if removed.is_some() {
            debug!("Unregistered stream {}", stream_id);
        }

        removed
    }

    /// Binds a channel to a media stream id.  Control channels never carry a media stream and
    /// are left unbound.
    pub fn bind_channel(&mut self, channel_id: u32, stream_id: u32) -> bool {
        if channel_layout::is_control_channel(channel_id) {
            warn!("Refusing to bind control channel {} to stream {}", channel_id, stream_id);
            return false;
        }

        self.channel_bindings.insert(channel_id, stream_id);
        true
    }

    /// Advances the request correlation counter and returns the new value
    pub fn next_invoke_id(&mut self) -> u32 {
        self.invoke_id = self.invoke_id.wrapping_add(1);
        self.invoke_id
    }

    pub fn is_channel_open(&self, channel_id: u32) -> bool {
        self.open_channels.contains(&channel_id)
    }

    pub fn get_open_channel_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.open_channels.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Takes all queued packets in the order they were written
    pub fn drain_outbound(&mut self) -> Vec<Packet> {
        self.outbound.drain(..).collect()
    }

    /// Releases every channel and stream binding, as done when the connection is torn down
    pub fn close_all_channels(&mut self) {
        debug!("Closing {} channels", self.open_channels.len());
        self.open_channels.clear();
        self.channel_bindings.clear();
        self.streams.clear();
    }
}

impl RtmpConnection for MultiplexedConnection {
    fn close_channel(&mut self, channel_id: u32) {
        let was_open = self.open_channels.remove(&channel_id);
        let binding = self.channel_bindings.remove(&channel_id);
        if was_open || binding.is_some() {
            debug!("Closed channel {} (bound stream: {:?})", channel_id, binding);
        }
    }

    fn get_stream_by_channel_id(&self, channel_id: u32) -> Option<StreamHandle> {
        if channel_layout::is_control_channel(channel_id) {
            return None;
        }

        self.channel_bindings
            .get(&channel_id)
            .and_then(|stream_id| self.streams.get(stream_id))
            .cloned()
    }

    fn get_stream_id_for_channel(&self, channel_id: u32) -> u32 {
        match self.channel_bindings.get(&channel_id) {
            Some(stream_id) => *stream_id,
            None => 0,
        }
    }

    fn write(&mut self, packet: Packet) {
        self.outbound.push_back(packet);
    }

    fn get_invoke_id(&self) -> u32 {
        self.invoke_id
    }

    fn get_scope(&self) -> Option<Rc<dyn Scope>> {
        self.scope.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{DataType, RtmpEvent};
    use crate::scope::{ComponentScope, SampleAccessConfig, SAMPLE_ACCESS_COMPONENT};
    use crate::status::{codes, Status};
    use crate::time::RtmpTimestamp;
    use bytes::Bytes;

    fn video_event(timestamp: u32) -> RtmpEvent {
        RtmpEvent::VideoData {
            timestamp: RtmpTimestamp::new(timestamp),
            data: Bytes::from_static(&[0x17, 0x01, 0x00]),
        }
    }

    #[test]
    fn output_stream_channels_are_bound_to_the_stream() {
        let connection = MultiplexedConnection::new(ConnectionConfig::new()).into_shared();
        let stream = MultiplexedConnection::create_output_stream(&connection, 2).unwrap();

        assert_eq!(stream.get_data().get_id(), 9);
        assert_eq!(stream.get_video().get_id(), 10);
        assert_eq!(stream.get_audio().get_id(), 11);

        let inner = connection.borrow();
        assert_eq!(inner.get_open_channel_ids(), vec![9, 10, 11]);
        assert_eq!(inner.get_stream_id_for_channel(10), 2);
        assert_eq!(inner.get_stream_by_channel_id(11), Some(StreamHandle::new(2)));
    }

    #[test]
    fn writes_on_bound_channel_are_queued_with_stream_id() {
        let connection = MultiplexedConnection::new(ConnectionConfig::new()).into_shared();
        let stream = MultiplexedConnection::create_output_stream(&connection, 1).unwrap();

        stream.get_video().write(video_event(100));
        stream.get_video().write(video_event(133));

        let packets = connection.borrow_mut().drain_outbound();
        assert_eq!(packets.len(), 2, "Unexpected number of packets");
        assert_eq!(packets[0].header.channel_id, 5);
        assert_eq!(packets[0].header.stream_id, 1);
        assert_eq!(packets[0].header.data_type, DataType::Video);
        assert_eq!(packets[0].header.timer, 100);
        assert_eq!(packets[1].header.timer, 133);
        assert!(connection.borrow_mut().drain_outbound().is_empty(), "Outbound queue was not drained");
    }

    #[test]
    fn writes_after_stream_is_unregistered_are_discarded() {
        let connection = MultiplexedConnection::new(ConnectionConfig::new()).into_shared();
        let stream = MultiplexedConnection::create_output_stream(&connection, 1).unwrap();
        connection.borrow_mut().unregister_stream(1);

        stream.get_video().write(video_event(100));

        assert!(connection.borrow_mut().drain_outbound().is_empty(), "Packet was written to a removed stream");
    }

    #[test]
    fn status_after_stream_is_unregistered_is_still_addressed_to_stream() {
        let connection = MultiplexedConnection::new(ConnectionConfig::new()).into_shared();
        let stream = MultiplexedConnection::create_output_stream(&connection, 3).unwrap();
        connection.borrow_mut().unregister_stream(3);

        stream.get_data().send_status(&Status::new(codes::NS_PLAY_STOP, "Stopped"));

        let packets = connection.borrow_mut().drain_outbound();
        assert_eq!(packets.len(), 1, "Unexpected number of packets");
        assert_eq!(packets[0].header.stream_id, 3);
        assert_eq!(packets[0].get_command_name(), Some("onStatus"));
    }

    #[test]
    fn play_start_on_output_stream_announces_sample_access_from_scope() {
        let mut scope = ComponentScope::new("live");
        scope.register_component(SAMPLE_ACCESS_COMPONENT, Rc::new(SampleAccessConfig {
            audio_allowed: true,
            video_allowed: true,
        }));

        let mut inner = MultiplexedConnection::new(ConnectionConfig::new());
        inner.set_scope(Rc::new(scope));
        let connection = inner.into_shared();
        let stream = MultiplexedConnection::create_output_stream(&connection, 1).unwrap();

        stream.get_data().send_status(&Status::new(codes::NS_PLAY_START, "Started"));

        let packets = connection.borrow_mut().drain_outbound();
        assert_eq!(packets.len(), 2, "Unexpected number of packets");
        assert_eq!(packets[0].get_command_name(), Some("|RtmpSampleAccess"));
        assert_eq!(packets[1].get_command_name(), Some("onStatus"));
    }

    #[test]
    fn closing_unknown_channel_is_a_no_op() {
        let connection = MultiplexedConnection::new(ConnectionConfig::new()).into_shared();
        let channel = MultiplexedConnection::get_channel(&connection, 3);

        connection.borrow_mut().close_channel(42);

        assert!(connection.borrow().is_channel_open(channel.get_id()));
    }

    #[test]
    fn closing_output_stream_releases_all_its_channels() {
        let connection = MultiplexedConnection::new(ConnectionConfig::new()).into_shared();
        let stream = MultiplexedConnection::create_output_stream(&connection, 1).unwrap();

        stream.close();
        stream.close();

        let inner = connection.borrow();
        assert!(inner.get_open_channel_ids().is_empty(), "Channels were left open");
        assert_eq!(inner.get_stream_id_for_channel(4), 0);
        assert_eq!(inner.get_stream_by_channel_id(5), None);
    }

    #[test]
    fn control_channels_can_not_be_bound_to_streams() {
        let mut connection = MultiplexedConnection::new(ConnectionConfig::new());
        connection.register_stream(StreamHandle::new(1)).unwrap();

        assert!(!connection.bind_channel(3, 1));
        assert_eq!(connection.get_stream_id_for_channel(3), 0);
        assert_eq!(connection.get_stream_by_channel_id(3), None);
    }

    #[test]
    fn stream_registration_is_validated() {
        let mut config = ConnectionConfig::new();
        config.max_streams = 2;
        let mut connection = MultiplexedConnection::new(config);

        assert_eq!(connection.register_stream(StreamHandle::new(0)), Err(ConnectionError::StreamIdZeroIsReserved));
        assert_eq!(
            connection.register_stream(StreamHandle::new(3)),
            Err(ConnectionError::StreamIdOutOfRange { stream_id: 3, max_streams: 2 })
        );

        connection.register_stream(StreamHandle::new(2)).unwrap();
        assert_eq!(connection.register_stream(StreamHandle::new(2)), Err(ConnectionError::StreamAlreadyRegistered(2)));
    }

    #[test]
    fn huge_stream_id_is_rejected_instead_of_overflowing_channel_ids() {
        let connection = MultiplexedConnection::new(ConnectionConfig::new()).into_shared();

        match MultiplexedConnection::create_output_stream(&connection, 1_000_000_000) {
            Err(ConnectionError::StreamIdOutOfRange { stream_id: 1_000_000_000, max_streams: 12 }) => (),
            Err(x) => panic!("Unexpected error: {:?}", x),
            Ok(_) => panic!("Stream id 1000000000 was accepted"),
        }

        assert!(connection.borrow().get_open_channel_ids().is_empty(), "Channels were opened");
    }

    #[test]
    fn stream_id_whose_channels_overflow_is_rejected_even_when_max_streams_allows_it() {
        let mut config = ConnectionConfig::new();
        config.max_streams = u32::max_value();
        let connection = MultiplexedConnection::new(config).into_shared();

        match MultiplexedConnection::create_output_stream(&connection, 1_000_000_000) {
            Err(ConnectionError::StreamIdOutOfRange { stream_id: 1_000_000_000, .. }) => (),
            Err(x) => panic!("Unexpected error: {:?}", x),
            Ok(_) => panic!("Stream id 1000000000 was accepted"),
        }

        assert!(connection.borrow().get_open_channel_ids().is_empty(), "Channels were opened");
        assert_eq!(
            connection.borrow_mut().register_stream(StreamHandle::new(1_000_000_000)),
            Ok(()),
            "Rejected stream was left registered"
        );

        assert!(MultiplexedConnection::create_output_stream(&connection, 1).is_ok(), "Valid stream was rejected after overflow");
    }

    #[test]
    fn invoke_id_starts_at_configured_value_and_advances() {
        let mut config = ConnectionConfig::new();
        config.initial_invoke_id = 10;
        let mut connection = MultiplexedConnection::new(config);

        assert_eq!(connection.get_invoke_id(), 10);
        assert_eq!(connection.next_invoke_id(), 11);
        assert_eq!(connection.get_invoke_id(), 11);
    }

    #[test]
    fn closing_all_channels_discards_every_binding() {
        let connection = MultiplexedConnection::new(ConnectionConfig::new()).into_shared();
        let stream = MultiplexedConnection::create_output_stream(&connection, 1).unwrap();
        let command_channel = MultiplexedConnection::get_channel(&connection, 3);

        connection.borrow_mut().close_all_channels();
        stream.get_audio().write(video_event(10));

        let mut inner = connection.borrow_mut();
        assert!(!inner.is_channel_open(command_channel.get_id()));
        assert!(inner.drain_outbound().is_empty(), "Packet was written after teardown");
    }
}
