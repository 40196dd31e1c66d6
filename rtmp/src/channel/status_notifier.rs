use bytes::Bytes;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

use super::Channel;
use crate::connection::RtmpConnection;
use crate::messages::CommandEvent;
use crate::scope::SAMPLE_ACCESS_COMPONENT;
use crate::status::{codes, Status};

const ON_STATUS: &str = "onStatus";
const SAMPLE_ACCESS: &str = "|RtmpSampleAccess";

impl<C: RtmpConnection + ?Sized> Channel<C> {
    /// Sends an `onStatus` command for the status to the stream bound to this channel.
    ///
    /// `NetStream.Data.Start` is sent as a one way notification, every other code as a call.
    /// A `NetStream.Play.Start` status is preceded by a `|RtmpSampleAccess` notification when the
    /// connection's scope has a sample access policy that allows audio or video sampling.
    ///
    /// Both commands are addressed to the stream id the connection has bound to this channel
    /// rather than going through `write()`, as some statuses are sent before the stream has been
    /// registered (or after it was removed) and would otherwise be discarded.
    pub fn send_status(&self, status: &Status) {
        let connection = match self.get_connection() {
            Some(x) => x,
            None => return,
        };

        let and_return = status.code() != codes::NS_DATA_START;
        let arguments = vec![status.to_amf0_object()];
        let event = if and_return {
            if status.code() == codes::NS_PLAY_START {
                self.announce_sample_access(&connection);
            }

            let invoke_id = connection.borrow().get_invoke_id();
            CommandEvent::call(ON_STATUS, arguments).with_transaction_id(invoke_id)
        } else {
            let invoke_id = connection.borrow().get_invoke_id();
            CommandEvent::notification(ON_STATUS, arguments).with_transaction_id(invoke_id)
        };

        let stream_id = connection.borrow().get_stream_id_for_channel(self.id);
        self.write_to_stream(event.into(), stream_id);
    }

    fn announce_sample_access(&self, connection: &Rc<RefCell<C>>) {
        let scope = match connection.borrow().get_scope() {
            Some(x) => x,
            None => return,
        };

        if !scope.has_component(SAMPLE_ACCESS_COMPONENT) {
            return;
        }

        let policy = match scope.get_component(SAMPLE_ACCESS_COMPONENT) {
            Some(x) => x,
            None => return,
        };

        let video_allowed = policy.is_video_allowed(&*scope);
        let audio_allowed = policy.is_audio_allowed(&*scope);
        if !video_allowed && !audio_allowed {
            return;
        }

        let (invoke_id, stream_id) = {
            let connection = connection.borrow();
            (connection.get_invoke_id(), connection.get_stream_id_for_channel(self.id))
        };

        debug!(
            "Channel {} announcing sample access for scope {} (audio: {}, video: {})",
            self.id,
            scope.get_name(),
            audio_allowed,
            video_allowed
        );

        let payload = Bytes::from(vec![0x01, audio_allowed as u8, 0x01, video_allowed as u8]);
        let notify = CommandEvent::notification(SAMPLE_ACCESS, Vec::new())
            .with_transaction_id(invoke_id)
            .with_data(payload);

        self.write_to_stream(notify.into(), stream_id);
    }
}
