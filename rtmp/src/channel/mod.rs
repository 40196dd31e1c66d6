//! Logical channels multiplexed over a single RTMP connection.
//!
//! A `Channel` is a cheap handle made of a channel id and a weak reference back to the
//! connection it belongs to.  Application code writes events to a channel without knowing how
//! the connection frames them, and the channel fills in the header (channel id, timestamp,
//! message stream id and type) that the framing layer needs.
//!
//! Every operation on a channel whose connection is gone is a silent no-op.  Channels hold no
//! synchronization of their own, so all calls for one connection are expected to come from the
//! single context that drives that connection.

mod output_stream;
mod status_notifier;


pub use self::output_stream::OutputStream;

use log::{info, trace};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::connection::{channel_layout, RtmpConnection};
use crate::messages::{Header, Packet, RtmpEvent};

/// A handle to one logical channel of a connection
pub struct Channel<C: RtmpConnection + ?Sized> {
    id: u32,
    connection: Option<Weak<RefCell<C>>>,
}

impl<C: RtmpConnection + ?Sized> Channel<C> {
    /// Creates a channel bound to the specified connection.  The channel does not keep the
    /// connection alive.
    pub fn new(connection: &Rc<RefCell<C>>, id: u32) -> Channel<C> {
        Channel {
            id,
            connection: Some(Rc::downgrade(connection)),
        }
    }

    /// Creates a channel that is not bound to any connection
    pub fn unbound(id: u32) -> Channel<C> {
        Channel {
            id,
            connection: None,
        }
    }

    pub fn get_id(&self) -> u32 {
        self.id
    }

    /// True while the connection this channel was created for is still alive
    pub fn is_bound(&self) -> bool {
        self.get_connection().is_some()
    }

    /// Asks the connection to release this channel id and its stream binding
    pub fn close(&self) {
        if let Some(connection) = self.get_connection() {
            connection.borrow_mut().close_channel(self.id);
        }
    }

    /// Writes an event to the media stream currently bound to this channel.
    ///
    /// Control channels (ids 0 through 3) never have a media stream and always write with a
    /// message stream id of 0.  Writes to any other channel whose stream no longer exists are
    /// discarded, since the stream was torn down while the event was still in flight.
    pub fn write(&self, event: RtmpEvent) {
        let connection = match self.get_connection() {
            Some(x) => x,
            None => return,
        };

        let stream = connection.borrow().get_stream_by_channel_id(self.id);
        if !channel_layout::is_control_channel(self.id) && stream.is_none() {
            info!(
                "Stream doesn't exist any longer on channel {}, discarding {:?} message at {}",
                self.id,
                event.get_data_type(),
                event.get_timestamp()
            );

            return;
        }

        let stream_id = match stream {
            Some(stream) => stream.get_stream_id(),
            None => 0,
        };

        self.write_to_stream(event, stream_id);
    }

    /// Assembles the header for the event and hands the packet to the connection.  The stream
    /// id is used as given, it is never looked up again.
    fn write_to_stream(&self, event: RtmpEvent, stream_id: u32) {
        let connection = match self.get_connection() {
            Some(x) => x,
            None => return,
        };

        let header = Header::new(self.id, event.get_timestamp(), stream_id, event.get_data_type());
        trace!("Channel {} writing {:?}", self.id, header);

        connection.borrow_mut().write(Packet::new(header, event));
    }

    fn get_connection(&self) -> Option<Rc<RefCell<C>>> {
        self.connection.as_ref().and_then(|x| x.upgrade())
    }
}

impl<C: RtmpConnection + ?Sized> Clone for Channel<C> {
    fn clone(&self) -> Self {
        Channel {
            id: self.id,
            connection: self.connection.clone(),
        }
    }
}

impl<C: RtmpConnection + ?Sized> fmt::Debug for Channel<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Channel")
            .field("id", &self.id)
            .field("bound", &self.is_bound())
            .finish()
    }
}
