//! Protocol trait and related types

use crate::{Error, Packet};
use std::collections::HashMap;

/// Main trait that all protocol handlers must implement
pub trait Protocol: Send + Sync {
    /// Full name of the protocol (e.g., "Dynamic Trunking Protocol")
    fn name(&self) -> &'static str;

    /// Short name used in CLI (e.g., "dtp")
    fn shortname(&self) -> &'static str;

    /// Protocol ID
    fn id(&self) -> crate::ProtocolId;

    /// Process a captured frame (passive mode)
    ///
    /// A frame that does not decode is a per-frame failure: implementations
    /// record it in their statistics and return `Ok(())`. `Err` is reserved
    /// for failures of the handler itself.
    fn handle_packet(&mut self, packet: &Packet) -> Result<(), Error>;

    /// Get current protocol statistics
    fn stats(&self) -> ProtocolStats;

    /// Reset protocol statistics
    fn reset_stats(&mut self);
}

/// Statistics for a protocol
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolStats {
    /// Number of packets received
    pub packets_received: u64,
    /// Number of packets parsed successfully
    pub packets_parsed: u64,
    /// Number of packets with errors
    pub packets_errors: u64,
    /// Total bytes received
    pub bytes_received: u64,
    /// Protocol-specific stats
    pub custom: HashMap<String, u64>,
}

impl ProtocolStats {
    /// Add `n` to a protocol-specific counter
    pub fn bump(&mut self, key: &str, n: u64) {
        *self.custom.entry(key.to_string()).or_insert(0) += n;
    }

    /// Read a protocol-specific counter (0 when never bumped)
    pub fn counter(&self, key: &str) -> u64 {
        self.custom.get(key).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_counters() {
        let mut stats = ProtocolStats::default();
        assert_eq!(stats.counter("tlvs_seen"), 0);

        stats.bump("tlvs_seen", 3);
        stats.bump("tlvs_seen", 2);
        assert_eq!(stats.counter("tlvs_seen"), 5);
        assert_eq!(stats.counter("other"), 0);
    }
}
