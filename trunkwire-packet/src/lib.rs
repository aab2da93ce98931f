//! Frame dissection library for trunkwire
//!
//! This crate peels the layer 2 framing off captured frames so that protocol
//! decoders only ever see their own payload:
//!
//! - **Ethernet** frames, both Ethernet II (EtherType) and IEEE 802.3 (length)
//! - **LLC/SNAP** encapsulation used by CDP, VTP, DTP, UDLD and PVST+
//!
//! # Architecture
//!
//! - [`ethernet`] - Ethernet header parsing
//! - [`llc`] - LLC and SNAP header parsing
//!
//! # Quick Start
//!
//! ```rust
//! use trunkwire_packet::{EthernetFrame, LlcSnapFrame, Oui, SnapProtocolId};
//!
//! let frame = vec![
//!     0x01, 0x00, 0x0c, 0xcc, 0xcc, 0xcc, // dst
//!     0x00, 0x11, 0x22, 0x33, 0x44, 0x55, // src
//!     0x00, 0x09, // 802.3 length
//!     0xaa, 0xaa, 0x03, 0x00, 0x00, 0x0c, 0x20, 0x04, // LLC/SNAP
//!     0x01, // DTP version
//! ];
//!
//! let eth = EthernetFrame::from_bytes(&frame).unwrap();
//! let llc = LlcSnapFrame::from_bytes(&eth.payload).unwrap();
//! assert_eq!(llc.snap.oui, Oui::CISCO);
//! assert_eq!(llc.snap.protocol_id, SnapProtocolId::DTP);
//! assert_eq!(llc.payload, vec![0x01]);
//! ```

pub mod ethernet;
pub mod llc;

// Re-export commonly used types for convenience
pub use ethernet::{EtherType, EthernetFrame};
pub use llc::{LlcHeader, LlcSnapFrame, Oui, SnapHeader, SnapProtocolId};
