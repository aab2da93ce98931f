//! Dynamic Trunking Protocol (DTP) decoding
//!
//! DTP is Cisco's protocol for automatic trunk negotiation between switches.
//! This module turns a DTP payload into its version byte and the ordered list
//! of raw TLV records it carries.
//!
//! ## Packet Structure
//!
//! DTP uses LLC/SNAP encapsulation over 802.3 Ethernet:
//! ```text
//! Ethernet Header (14 bytes)
//!   Dst: 01:00:0C:CC:CC:CC (DTP multicast)
//!   Src: Interface MAC
//!   Length: payload length
//! LLC/SNAP Header (8 bytes)
//!   DSAP: 0xAA
//!   SSAP: 0xAA
//!   Control: 0x03
//!   OUI: 0x00000C (Cisco)
//!   Type: 0x2004 (DTP)
//! DTP Data:
//!   Version: 1 byte
//!   TLVs until end of payload:
//!     Type:   2 bytes, big-endian
//!     Length: 2 bytes, big-endian, size of Value
//!     Value:  Length bytes
//! ```
//!
//! [`decode`] only sees the DTP data; framing is stripped by
//! [`crate::registry`] or [`DtpProtocol`].
//!
//! ## TLV Types
//!
//! - **Trunk name (0x0001)**: VTP domain name
//! - **Status (0x0002)**: Port status byte
//! - **Type (0x0003)**: Trunk encapsulation byte
//! - **MAC address (0x0004)**: Sender MAC address
//!
//! Values are kept as raw bytes and unknown types are passed through.
//!
//! ## Example Usage
//!
//! ```rust
//! use trunkwire_protocols::dtp::{decode, tlv_types, DecodeError};
//!
//! let packet = decode(b"\x01\x00\x01\x00\x03ABC").unwrap();
//! assert_eq!(packet.version(), 1);
//! assert_eq!(packet.records()[0].tlv_type, tlv_types::TRUNK_NAME);
//! assert_eq!(&packet.records()[0].value[..], b"ABC");
//!
//! assert_eq!(decode(b""), Err(DecodeError::TruncatedHeader));
//! ```

pub mod packet;
pub mod protocol;


pub use packet::{
    decode, tlv_types, DecodeError, DtpPacket, TlvRecord, DTP_HEADER_LEN, DTP_MULTICAST_MAC,
    DTP_SNAP_TYPE, DTP_VERSION, TLV_HEADER_LEN,
};
pub use protocol::DtpProtocol;
