//! Ethernet frame parsing
//!
//! Handles both Ethernet II frames (type field is an EtherType) and
//! IEEE 802.3 frames (type field is a payload length, followed by LLC).

use std::fmt;
use trunkwire_core::MacAddr;

/// Largest type/length field value that is interpreted as an 802.3 length
pub const MAX_8023_LENGTH: u16 = 1500;

/// Type/length field of an Ethernet header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EtherType {
    /// IPv4 (0x0800)
    IPv4,
    /// ARP (0x0806)
    ARP,
    /// VLAN-tagged frame (0x8100)
    VLAN,
    /// IPv6 (0x86DD)
    IPv6,
    /// LLDP (0x88CC)
    LLDP,
    /// IEEE 802.3 length field; an LLC header follows
    Length(u16),
    /// Any other EtherType
    Custom(u16),
}

impl EtherType {
    /// Interpret a raw type/length field
    pub fn from_u16(value: u16) -> Self {
        match value {
            0..=MAX_8023_LENGTH => EtherType::Length(value),
            0x0800 => EtherType::IPv4,
            0x0806 => EtherType::ARP,
            0x8100 => EtherType::VLAN,
            0x86DD => EtherType::IPv6,
            0x88CC => EtherType::LLDP,
            val => EtherType::Custom(val),
        }
    }

    /// Whether an LLC header follows (802.3 framing)
    pub fn is_llc(self) -> bool {
        matches!(self, EtherType::Length(_))
    }
}

impl fmt::Display for EtherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtherType::IPv4 => write!(f, "IPv4"),
            EtherType::ARP => write!(f, "ARP"),
            EtherType::VLAN => write!(f, "VLAN"),
            EtherType::IPv6 => write!(f, "IPv6"),
            EtherType::LLDP => write!(f, "LLDP"),
            EtherType::Length(len) => write!(f, "802.3 length {}", len),
            EtherType::Custom(val) => write!(f, "0x{:04X}", val),
        }
    }
}

/// A parsed Ethernet frame
#[derive(Debug, Clone)]
pub struct EthernetFrame {
    /// Destination MAC address
    pub destination: MacAddr,
    /// Source MAC address
    pub source: MacAddr,
    /// EtherType or length field
    pub ethertype: EtherType,
    /// Payload data (padding removed for 802.3 frames)
    pub payload: Vec<u8>,
}

impl EthernetFrame {
    /// Ethernet header size (dst + src + type/length)
    pub const HEADER_SIZE: usize = 14;

    /// Parse an Ethernet frame from bytes
    ///
    /// Returns `None` if the header is incomplete or an 802.3 length field
    /// claims more bytes than were captured.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < Self::HEADER_SIZE {
            return None;
        }

        let destination = MacAddr::from_slice(&data[0..6])?;
        let source = MacAddr::from_slice(&data[6..12])?;
        let ethertype = EtherType::from_u16(u16::from_be_bytes([data[12], data[13]]));

        let body = &data[Self::HEADER_SIZE..];
        let payload = match ethertype {
            // Trailing bytes past the declared length are minimum-size padding
            EtherType::Length(len) => body.get(..len as usize)?.to_vec(),
            _ => body.to_vec(),
        };

        Some(EthernetFrame {
            destination,
            source,
            ethertype,
            payload,
        })
    }

    /// Get the frame size in bytes (header + payload, without padding)
    pub fn len(&self) -> usize {
        Self::HEADER_SIZE + self.payload.len()
    }

    /// Check if the frame carries no payload
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
