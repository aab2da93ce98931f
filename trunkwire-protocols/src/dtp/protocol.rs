//! DTP Protocol Implementation
//!
//! Implements the Protocol trait for Dynamic Trunking Protocol. Every frame
//! is handled on its own: a DTP payload that does not decode is counted and
//! logged, never propagated, so one bad frame cannot stop a capture run.

use tracing::{debug, trace};
use trunkwire_core::{Packet, Protocol, ProtocolId, ProtocolStats, Result};

use super::packet::{decode, DecodeError, DtpPacket, DTP_MULTICAST_MAC, DTP_VERSION};
use crate::registry::{split_snap, SnapFrame, SnapKey};

/// Counter: frames that were not DTP over LLC/SNAP
pub const STAT_FRAMES_IGNORED: &str = "frames_ignored";
/// Counter: TLV records across all decoded packets
pub const STAT_TLVS_SEEN: &str = "tlvs_seen";
/// Counter: TLV records with a type code outside the known set
pub const STAT_UNKNOWN_TLVS: &str = "unknown_tlvs";

/// Outcome of decoding one DTP frame
pub type FrameResult = std::result::Result<DtpPacket, DecodeError>;

/// DTP Protocol Implementation
#[derive(Debug, Default)]
pub struct DtpProtocol {
    stats: ProtocolStats,
}

impl DtpProtocol {
    /// Create a new DTP protocol instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the payload of a dissected frame if its key is DTP
    pub fn decode_snap(snap: &SnapFrame) -> Option<FrameResult> {
        if snap.key != SnapKey::DTP {
            return None;
        }
        Some(decode(&snap.payload))
    }

    /// Decode a captured frame, record the outcome and hand it back
    ///
    /// Returns `None` for frames that are not DTP over LLC/SNAP.
    pub fn process(&mut self, packet: &Packet) -> Option<FrameResult> {
        let snap = split_snap(packet.data());
        self.process_snap(packet, snap.as_ref())
    }

    /// Like [`DtpProtocol::process`] for a frame the caller already dissected
    ///
    /// `snap` is `None` when the frame is not LLC/SNAP.
    pub fn process_snap(
        &mut self,
        packet: &Packet,
        snap: Option<&SnapFrame>,
    ) -> Option<FrameResult> {
        self.stats.packets_received += 1;
        self.stats.bytes_received += packet.len() as u64;

        let decoded = snap.and_then(|snap| Self::decode_snap(snap).map(|result| (snap, result)));
        let Some((snap, result)) = decoded else {
            trace!(source = %packet.source, len = packet.len(), "Not a DTP frame");
            self.stats.bump(STAT_FRAMES_IGNORED, 1);
            return None;
        };

        match &result {
            Ok(dtp) => {
                debug!(
                    source = %packet.source,
                    mac = %snap.source,
                    version = dtp.version(),
                    tlvs = dtp.len(),
                    "Decoded DTP frame"
                );
                if snap.destination != DTP_MULTICAST_MAC || dtp.version() != DTP_VERSION {
                    trace!(
                        destination = %snap.destination,
                        version = dtp.version(),
                        "DTP frame with unusual destination or version"
                    );
                }
                self.record(dtp);
            }
            Err(err) => {
                debug!(
                    source = %packet.source,
                    mac = %snap.source,
                    kind = err.kind(),
                    offset = err.offset(),
                    error = %err,
                    "DTP frame could not be decoded"
                );
                self.stats.packets_errors += 1;
                self.stats.bump(err.kind(), 1);
            }
        }

        Some(result)
    }

    fn record(&mut self, packet: &DtpPacket) {
        self.stats.packets_parsed += 1;

        let unknown = packet.records().iter().filter(|r| !r.is_known()).count();
        self.stats.bump(STAT_TLVS_SEEN, packet.len() as u64);
        self.stats.bump(STAT_UNKNOWN_TLVS, unknown as u64);
    }
}

impl Protocol for DtpProtocol {
    fn name(&self) -> &'static str {
        "Dynamic Trunking Protocol"
    }

    fn shortname(&self) -> &'static str {
        "dtp"
    }

    fn id(&self) -> ProtocolId {
        ProtocolId::DTP
    }

    fn handle_packet(&mut self, packet: &Packet) -> Result<()> {
        self.process(packet);
        Ok(())
    }

    fn stats(&self) -> ProtocolStats {
        self.stats.clone()
    }

    fn reset_stats(&mut self) {
        self.stats = ProtocolStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dtp_frame(payload: &[u8]) -> Vec<u8> {
        let mut data = vec![0x01, 0x00, 0x0c, 0xcc, 0xcc, 0xcc];
        data.extend_from_slice(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        data.extend_from_slice(&((payload.len() + 8) as u16).to_be_bytes());
        data.extend_from_slice(&[0xaa, 0xaa, 0x03, 0x00, 0x00, 0x0c, 0x20, 0x04]);
        data.extend_from_slice(payload);
        data
    }

    #[test]
    fn test_protocol_metadata() {
        let dtp = DtpProtocol::new();
        assert_eq!(dtp.name(), "Dynamic Trunking Protocol");
        assert_eq!(dtp.shortname(), "dtp");
        assert_eq!(dtp.id(), ProtocolId::DTP);
    }

    #[test]
    fn test_handle_valid_frame() {
        let mut dtp = DtpProtocol::new();
        let frame = dtp_frame(b"\x01\x00\x01\x00\x03ABC\x00\x07\x00\x01\x00");
        dtp.handle_packet(&Packet::new("test", frame.clone())).unwrap();

        let stats = dtp.stats();
        assert_eq!(stats.packets_received, 1);
        assert_eq!(stats.packets_parsed, 1);
        assert_eq!(stats.packets_errors, 0);
        assert_eq!(stats.bytes_received, frame.len() as u64);
        assert_eq!(stats.counter(STAT_TLVS_SEEN), 2);
        assert_eq!(stats.counter(STAT_UNKNOWN_TLVS), 1);
    }

    #[test]
    fn test_handle_malformed_frame_is_not_fatal() {
        let mut dtp = DtpProtocol::new();
        let frame = dtp_frame(b"\x01\x00\x01\x00\x05AB");
        assert!(dtp.handle_packet(&Packet::new("test", frame)).is_ok());

        let empty = dtp_frame(b"");
        assert!(dtp.handle_packet(&Packet::new("test", empty)).is_ok());

        let stats = dtp.stats();
        assert_eq!(stats.packets_parsed, 0);
        assert_eq!(stats.packets_errors, 2);
        assert_eq!(stats.counter("truncated_tlv_value"), 1);
        assert_eq!(stats.counter("truncated_header"), 1);
    }

    #[test]
    fn test_handle_non_dtp_frames() {
        let mut dtp = DtpProtocol::new();

        // CDP over SNAP
        let mut cdp = dtp_frame(b"\x02\xb4");
        cdp[21] = 0x00;
        dtp.handle_packet(&Packet::new("test", cdp)).unwrap();

        // Runt
        dtp.handle_packet(&Packet::new("test", vec![0u8; 6])).unwrap();

        let stats = dtp.stats();
        assert_eq!(stats.packets_received, 2);
        assert_eq!(stats.packets_errors, 0);
        assert_eq!(stats.counter(STAT_FRAMES_IGNORED), 2);
    }

    #[test]
    fn test_reset_stats() {
        let mut dtp = DtpProtocol::new();
        dtp.handle_packet(&Packet::new("test", dtp_frame(b"\x01"))).unwrap();
        assert_eq!(dtp.stats().packets_parsed, 1);

        dtp.reset_stats();
        assert_eq!(dtp.stats(), ProtocolStats::default());
    }

    #[test]
    fn test_process_returns_recorded_outcome() {
        let mut dtp = DtpProtocol::new();
        let packet = Packet::new("test", dtp_frame(b"\x01\x00\x01\x00\x05AB"));
        let snap = split_snap(packet.data());

        let result = dtp.process_snap(&packet, snap.as_ref()).unwrap();
        assert_eq!(result.unwrap_err().kind(), "truncated_tlv_value");
        assert_eq!(dtp.stats().packets_errors, 1);
        assert_eq!(dtp.stats().counter("truncated_tlv_value"), 1);

        let ok = dtp.process(&Packet::new("test", dtp_frame(b"\x01"))).unwrap();
        assert_eq!(ok.unwrap().version(), 1);
        assert_eq!(dtp.stats().packets_parsed, 1);

        assert!(dtp.process_snap(&packet, None).is_none());
        assert_eq!(dtp.stats().counter(STAT_FRAMES_IGNORED), 1);
        assert_eq!(dtp.stats().packets_received, 3);
    }
}
