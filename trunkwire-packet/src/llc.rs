//! LLC (Logical Link Control) and SNAP (SubNetwork Access Protocol)
//!
//! Cisco layer 2 protocols such as CDP, VTP, DTP and UDLD ride on 802.3
//! frames with an LLC header (DSAP/SSAP 0xAA, control 0x03) followed by a
//! SNAP header that names the vendor OUI and the protocol id.

use std::fmt;

/// LLC SAP value announcing a SNAP header
pub const LLC_SAP_SNAP: u8 = 0xAA;

/// LLC control value for Unnumbered Information frames
pub const LLC_CONTROL_UI: u8 = 0x03;

/// OUI (Organizationally Unique Identifier) - 3 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oui(pub [u8; 3]);

impl Oui {
    /// Cisco OUI (0x00000C)
    pub const CISCO: Oui = Oui([0x00, 0x00, 0x0C]);
}

impl fmt::Display for Oui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}:{:02x}:{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

/// SNAP Protocol ID (2 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnapProtocolId(pub u16);

impl SnapProtocolId {
    /// CDP (0x2000)
    pub const CDP: SnapProtocolId = SnapProtocolId(0x2000);

    /// VTP (0x2003)
    pub const VTP: SnapProtocolId = SnapProtocolId(0x2003);

    /// DTP (0x2004)
    pub const DTP: SnapProtocolId = SnapProtocolId(0x2004);

    /// UDLD (0x0111)
    pub const UDLD: SnapProtocolId = SnapProtocolId(0x0111);

    /// PVST+ (0x010B)
    pub const PVST_PLUS: SnapProtocolId = SnapProtocolId(0x010B);

    /// Name of a well-known Cisco protocol id
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::CDP => Some("CDP"),
            Self::VTP => Some("VTP"),
            Self::DTP => Some("DTP"),
            Self::UDLD => Some("UDLD"),
            Self::PVST_PLUS => Some("PVST+"),
            _ => None,
        }
    }
}

impl fmt::Display for SnapProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// LLC header (3 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlcHeader {
    /// Destination Service Access Point
    pub dsap: u8,
    /// Source Service Access Point
    pub ssap: u8,
    /// Control field
    pub control: u8,
}

impl LlcHeader {
    /// LLC header size in bytes
    pub const SIZE: usize = 3;

    /// Parse from bytes
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        match *data.get(..Self::SIZE)? {
            [dsap, ssap, control] => Some(LlcHeader {
                dsap,
                ssap,
                control,
            }),
            _ => None,
        }
    }

    /// Whether this header announces a SNAP extension (DSAP=SSAP=0xAA, UI)
    pub fn is_snap(&self) -> bool {
        self.dsap == LLC_SAP_SNAP && self.ssap == LLC_SAP_SNAP && self.control == LLC_CONTROL_UI
    }
}

/// SNAP header (5 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapHeader {
    /// Organizationally Unique Identifier (3 bytes)
    pub oui: Oui,
    /// Protocol ID (2 bytes)
    pub protocol_id: SnapProtocolId,
}

impl SnapHeader {
    /// SNAP header size in bytes
    pub const SIZE: usize = 5;

    /// Parse from bytes
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < Self::SIZE {
            return None;
        }

        let oui = Oui([data[0], data[1], data[2]]);
        let protocol_id = SnapProtocolId(u16::from_be_bytes([data[3], data[4]]));

        Some(SnapHeader { oui, protocol_id })
    }
}

/// Complete LLC/SNAP frame
#[derive(Debug, Clone)]
pub struct LlcSnapFrame {
    /// LLC header (3 bytes)
    pub llc: LlcHeader,
    /// SNAP header (5 bytes)
    pub snap: SnapHeader,
    /// Payload data
    pub payload: Vec<u8>,
}

impl LlcSnapFrame {
    /// Total LLC/SNAP header size (LLC + SNAP)
    pub const HEADER_SIZE: usize = LlcHeader::SIZE + SnapHeader::SIZE;

    /// Parse from bytes
    ///
    /// Returns `None` when the data is too short or the LLC header does not
    /// announce SNAP.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < Self::HEADER_SIZE {
            return None;
        }

        let llc = LlcHeader::from_bytes(&data[0..3])?;
        if !llc.is_snap() {
            return None;
        }
        let snap = SnapHeader::from_bytes(&data[3..8])?;

        let payload = data[Self::HEADER_SIZE..].to_vec();

        Some(LlcSnapFrame { llc, snap, payload })
    }

    /// Get the total size in bytes
    pub fn len(&self) -> usize {
        Self::HEADER_SIZE + self.payload.len()
    }

    /// Check if the frame carries no payload
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llc_header_snap() {
        let header = LlcHeader::from_bytes(&[0xAA, 0xAA, 0x03]).unwrap();
        assert!(header.is_snap());

        let stp = LlcHeader::from_bytes(&[0x42, 0x42, 0x03]).unwrap();
        assert!(!stp.is_snap());

        assert!(LlcHeader::from_bytes(&[0xAA, 0xAA]).is_none());
    }

    #[test]
    fn test_snap_header_dtp() {
        let header = SnapHeader::from_bytes(&[0x00, 0x00, 0x0C, 0x20, 0x04]).unwrap();
        assert_eq!(header.oui, Oui::CISCO);
        assert_eq!(header.protocol_id, SnapProtocolId::DTP);
    }

    #[test]
    fn test_llc_snap_frame_dtp() {
        let data = hex::decode("aaaa0300000c2004010001000341424300").unwrap();
        let frame = LlcSnapFrame::from_bytes(&data).unwrap();

        assert_eq!(frame.snap.oui, Oui::CISCO);
        assert_eq!(frame.snap.protocol_id, SnapProtocolId::DTP);
        assert_eq!(frame.payload, hex::decode("010001000341424300").unwrap());
        assert_eq!(frame.len(), data.len());
    }

    #[test]
    fn test_llc_snap_frame_rejects_non_snap() {
        let data = hex::decode("424203000000000000").unwrap();
        assert!(LlcSnapFrame::from_bytes(&data).is_none());
    }

    #[test]
    fn test_llc_snap_frame_too_short() {
        assert!(LlcSnapFrame::from_bytes(&[0xAA, 0xAA, 0x03, 0x00, 0x00, 0x0C, 0x20]).is_none());
    }

    #[test]
    fn test_llc_snap_frame_header_only() {
        let header = [0xAA, 0xAA, 0x03, 0x00, 0x00, 0x0C, 0x20, 0x04];
        let frame = LlcSnapFrame::from_bytes(&header).unwrap();
        assert!(frame.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Oui::CISCO.to_string(), "00:00:0c");
        assert_eq!(SnapProtocolId::DTP.to_string(), "0x2004");
    }

    #[test]
    fn test_protocol_id_constants() {
        assert_eq!(SnapProtocolId::CDP.0, 0x2000);
        assert_eq!(SnapProtocolId::VTP.0, 0x2003);
        assert_eq!(SnapProtocolId::DTP.0, 0x2004);
        assert_eq!(SnapProtocolId::UDLD.0, 0x0111);
        assert_eq!(SnapProtocolId::PVST_PLUS.0, 0x010B);
    }

    #[test]
    fn test_protocol_id_names() {
        assert_eq!(SnapProtocolId::DTP.name(), Some("DTP"));
        assert_eq!(SnapProtocolId::CDP.name(), Some("CDP"));
        assert_eq!(SnapProtocolId::PVST_PLUS.name(), Some("PVST+"));
        assert_eq!(SnapProtocolId::UDLD.name(), Some("UDLD"));
        assert_eq!(SnapProtocolId(0x1234).name(), None);
    }
}
