//! Resting place for DAL's [Config] & friends

use cube2_demo::ProtocolVersion;


/// Configuration for the DAL crate
pub struct Config {

    /// The protocol the demos are expected to be recorded with -- demos with a different header are refused
    pub protocol_version: ProtocolVersion,

    /// Size for buffering IO (the larger, more RAM is used, but fewer system calls / context switches / hardware requests are required)
    pub buffer_size: usize,

    /// If true, every decoded frame is `trace!`d
    pub debug: bool,

}

impl Default for Config {
    fn default() -> Self {
        Self {
            protocol_version: ProtocolVersion::default(),
            buffer_size: 1024*1024,
            debug: false,
        }
    }
}
