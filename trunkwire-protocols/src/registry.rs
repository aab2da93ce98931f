//! Decoder registry for LLC/SNAP protocols
//!
//! Frames are dispatched on the SNAP header: the (OUI, protocol id) pair
//! selects a decode function, and every decoder returns one variant of
//! [`Decoded`]. The registry is shared by reference and locks internally.

use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info, trace, warn};
use trunkwire_core::{Error, MacAddr, Result};
use trunkwire_packet::{EthernetFrame, LlcSnapFrame, Oui, SnapProtocolId};

use crate::dtp::{self, DtpPacket};

/// SNAP dispatch key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnapKey {
    pub oui: Oui,
    pub protocol_id: SnapProtocolId,
}

impl SnapKey {
    /// Cisco DTP (00:00:0c / 0x2004)
    pub const DTP: SnapKey = SnapKey::new(Oui::CISCO, SnapProtocolId(dtp::DTP_SNAP_TYPE));

    pub const fn new(oui: Oui, protocol_id: SnapProtocolId) -> Self {
        Self { oui, protocol_id }
    }
}

impl std::fmt::Display for SnapKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.oui, self.protocol_id)
    }
}

/// An 802.3 LLC/SNAP frame reduced to what decoders need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapFrame {
    pub destination: MacAddr,
    pub source: MacAddr,
    pub key: SnapKey,
    pub payload: Vec<u8>,
}

/// A decoded payload, one variant per registered packet kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Dtp(DtpPacket),
}

impl Decoded {
    /// Short name of the packet kind
    pub fn shortname(&self) -> &'static str {
        match self {
            Decoded::Dtp(_) => "dtp",
        }
    }
}

impl std::fmt::Display for Decoded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decoded::Dtp(packet) => std::fmt::Display::fmt(packet, f),
        }
    }
}

/// Decode function for one SNAP payload
pub type DecodeFn = fn(&[u8]) -> Result<Decoded>;

fn decode_dtp(payload: &[u8]) -> Result<Decoded> {
    Ok(Decoded::Dtp(dtp::decode(payload)?))
}

/// Information about a registered decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderInfo {
    pub key: SnapKey,
    pub name: &'static str,
}

struct Entry {
    name: &'static str,
    decode: DecodeFn,
}

/// Built-in decoders registered by [`DecoderRegistry::with_defaults`]
const BUILTIN_DECODERS: &[(SnapKey, &str, DecodeFn)] = &[(SnapKey::DTP, "dtp", decode_dtp)];

/// Split an Ethernet frame into its addresses, SNAP key and payload
///
/// Returns `None` unless the frame is 802.3 with an LLC/SNAP header.
pub fn split_snap(frame: &[u8]) -> Option<SnapFrame> {
    let eth = EthernetFrame::from_bytes(frame)?;
    if !eth.ethertype.is_llc() {
        return None;
    }
    let llc = LlcSnapFrame::from_bytes(&eth.payload)?;
    Some(SnapFrame {
        destination: eth.destination,
        source: eth.source,
        key: SnapKey::new(llc.snap.oui, llc.snap.protocol_id),
        payload: llc.payload,
    })
}

/// Registry mapping SNAP keys to decode functions
pub struct DecoderRegistry {
    decoders: RwLock<HashMap<SnapKey, Entry>>,
}

impl DecoderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        debug!("Creating new DecoderRegistry");
        Self {
            decoders: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry with every built-in decoder registered
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        for &(key, name, decode) in BUILTIN_DECODERS {
            if let Err(err) = registry.register(key, name, decode) {
                warn!(key = %key, error = %err, "Skipping built-in decoder");
            }
        }
        registry
    }

    /// Register a decoder
    ///
    /// Returns an error if a decoder is already registered for `key`.
    pub fn register(&self, key: SnapKey, name: &'static str, decode: DecodeFn) -> Result<()> {
        let mut decoders = self.decoders.write();
        if let Some(existing) = decoders.get(&key) {
            warn!(key = %key, existing = existing.name, "Decoder already registered");
            return Err(Error::AlreadyExists(format!(
                "decoder for {} already registered as '{}'",
                key, existing.name
            )));
        }

        decoders.insert(key, Entry { name, decode });
        info!(key = %key, name = name, "Decoder registered");
        Ok(())
    }

    /// Unregister the decoder for `key`
    pub fn unregister(&self, key: SnapKey) -> Result<()> {
        match self.decoders.write().remove(&key) {
            Some(entry) => {
                info!(key = %key, name = entry.name, "Decoder unregistered");
                Ok(())
            }
            None => {
                warn!(key = %key, "Decoder not found");
                Err(Error::NotFound(format!("no decoder registered for {}", key)))
            }
        }
    }

    /// Get the decode function for `key`
    pub fn get(&self, key: SnapKey) -> Option<DecodeFn> {
        self.decoders.read().get(&key).map(|entry| entry.decode)
    }

    /// Check if a decoder is registered for `key`
    pub fn contains(&self, key: SnapKey) -> bool {
        self.decoders.read().contains_key(&key)
    }

    /// Number of registered decoders
    pub fn count(&self) -> usize {
        self.decoders.read().len()
    }

    /// List registered decoders, ordered by key
    pub fn list(&self) -> Vec<DecoderInfo> {
        let mut infos: Vec<DecoderInfo> = self
            .decoders
            .read()
            .iter()
            .map(|(key, entry)| DecoderInfo {
                key: *key,
                name: entry.name,
            })
            .collect();
        infos.sort_by_key(|info| info.key);
        infos
    }

    /// Decode a SNAP payload with the decoder registered for `key`
    pub fn decode_payload(&self, key: SnapKey, payload: &[u8]) -> Result<Decoded> {
        let decode = self
            .get(key)
            .ok_or_else(|| Error::NotFound(format!("no decoder registered for {}", key)))?;
        trace!(key = %key, len = payload.len(), "Dispatching payload");
        decode(payload)
    }

    /// Dissect an Ethernet frame and decode its payload
    ///
    /// `Ok(None)` means the frame is not LLC/SNAP or nothing is registered
    /// for its key; `Err` means the registered decoder rejected the payload.
    pub fn decode_frame(&self, frame: &[u8]) -> Result<Option<Decoded>> {
        let Some(snap) = split_snap(frame) else {
            trace!(len = frame.len(), "Frame is not LLC/SNAP");
            return Ok(None);
        };
        self.decode_snap(&snap)
    }

    /// Decode an already dissected frame
    ///
    /// `Ok(None)` when nothing is registered for the frame's key.
    pub fn decode_snap(&self, snap: &SnapFrame) -> Result<Option<Decoded>> {
        let Some(decode) = self.get(snap.key) else {
            trace!(
                key = %snap.key,
                protocol = snap.key.protocol_id.name().unwrap_or("unknown"),
                "No decoder for SNAP key"
            );
            return Ok(None);
        };

        decode(&snap.payload).map(Some)
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
