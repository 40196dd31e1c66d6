/// The configuration options that govern how a multiplexed connection allocates streams
#[derive(Clone, Debug)]
pub struct ConnectionConfig {
    /// Highest media stream id the connection will register
    pub max_streams: u32,

    /// Value the request correlation counter starts at
    pub initial_invoke_id: u32,
}

impl ConnectionConfig {
    /// Creates a new connection config with overridable defaults
    pub fn new() -> ConnectionConfig {
        ConnectionConfig {
            max_streams: 12,
            initial_invoke_id: 0,
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        ConnectionConfig::new()
    }
}
