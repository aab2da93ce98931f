//! Packet types

/// A captured frame handed to protocol handlers
#[derive(Debug, Clone)]
pub struct Packet {
    /// Where the frame came from (interface name, file path, "stdin")
    pub source: String,
    /// Frame data (including all headers)
    pub data: Vec<u8>,
    /// Original length on the wire (may differ from data.len() if truncated)
    pub len: usize,
}

impl Packet {
    /// Create a new packet
    pub fn new(source: impl Into<String>, data: Vec<u8>) -> Self {
        let len = data.len();
        Self {
            source: source.into(),
            data,
            len,
        }
    }

    /// Get packet data as slice
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get packet length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if packet is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
