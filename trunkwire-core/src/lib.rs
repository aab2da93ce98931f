//! Trunkwire Core Library
//!
//! This crate provides the fundamental traits, types, and error handling
//! shared by the trunkwire frame dissectors and protocol decoders.

pub mod error;
pub mod packet;
pub mod protocol;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use packet::Packet;
pub use protocol::{Protocol, ProtocolStats};
pub use types::*;
