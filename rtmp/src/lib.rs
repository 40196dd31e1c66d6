//! This crate provides the logical channel layer of an RTMP server connection.
//!
//! A single RTMP connection multiplexes many channels: protocol control and command traffic on
//! the low channel ids, and the data, video and audio messages of each media stream on the ones
//! after that.  A `Channel` lets application code write events without knowing how the
//! connection frames them.  It resolves which media stream the channel is bound to, builds the
//! header the framing layer needs and hands the packet to the connection.  Channels also
//! implement the `onStatus` notification workflow, including the `|RtmpSampleAccess`
//! announcement that precedes a `NetStream.Play.Start` status.
//!
//! Chunking, AMF0 encoding and the socket itself belong to the connection, which is abstracted
//! behind the `RtmpConnection` trait.
//!
//! # Examples
//!
//! ```
//! use std::rc::Rc;
//! use rml_rtmp_channels::connection::{ConnectionConfig, MultiplexedConnection};
//! use rml_rtmp_channels::scope::{ComponentScope, SampleAccessConfig, SAMPLE_ACCESS_COMPONENT};
//! use rml_rtmp_channels::status::{codes, Status};
//!
//! let mut scope = ComponentScope::new("live");
//! scope.register_component(SAMPLE_ACCESS_COMPONENT, Rc::new(SampleAccessConfig {
//!     audio_allowed: true,
//!     video_allowed: false,
//! }));
//!
//! let mut connection = MultiplexedConnection::new(ConnectionConfig::new());
//! connection.set_scope(Rc::new(scope));
//! let connection = connection.into_shared();
//!
//! let stream = MultiplexedConnection::create_output_stream(&connection, 1).unwrap();
//! stream.get_data().send_status(&Status::new(codes::NS_PLAY_START, "Started playing"));
//!
//! let packets = connection.borrow_mut().drain_outbound();
//! assert_eq!(packets.len(), 2);
//! assert_eq!(packets[0].get_command_name(), Some("|RtmpSampleAccess"));
//! assert_eq!(packets[1].get_command_name(), Some("onStatus"));
//! assert_eq!(packets[1].header.stream_id, 1);
//! ```

pub mod channel;
pub mod connection;
pub mod messages;
pub mod scope;
pub mod status;
pub mod time;
