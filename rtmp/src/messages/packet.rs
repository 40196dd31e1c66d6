use super::{Header, RtmpEvent};

/// An event paired with the header it should be sent with.
///
/// Packets are built fresh for every write and handed over to the connection, which takes
/// ownership of them.
#[derive(PartialEq, Debug, Clone)]
pub struct Packet {
    pub header: Header,
    pub event: RtmpEvent,
}

impl Packet {
    pub fn new(header: Header, event: RtmpEvent) -> Packet {
        Packet { header, event }
    }

    /// Convenience accessor for the name of the command this packet carries, if any
    pub fn get_command_name(&self) -> Option<&str> {
        match self.event {
            RtmpEvent::Command(ref command) => Some(command.name.as_str()),
            _ => None,
        }
    }
}
