//! Protocol decoders for trunkwire
//!
//! ## Available Protocols
//!
//! ### DTP (Dynamic Trunking Protocol)
//! Decodes the version header and raw TLV records of DTP payloads, and
//! counts decoded and malformed frames through the [`trunkwire_core::Protocol`]
//! trait. See [`dtp`] module for details.
//!
//! ## Dispatch
//!
//! [`registry::DecoderRegistry`] maps LLC/SNAP identifiers to decode
//! functions so that captured frames are routed to the right decoder.

pub mod dtp;
pub mod registry;

// Re-export protocol implementations for convenience
pub use dtp::DtpProtocol;
pub use registry::{Decoded, DecoderRegistry, SnapKey};
