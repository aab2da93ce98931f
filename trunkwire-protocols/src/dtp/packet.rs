//! DTP Packet Structures and Parsing
//!
//! A DTP payload is a one byte version followed by TLV records until the end
//! of the buffer. Every record is a big-endian `u16` type, a big-endian `u16`
//! value length and `length` value bytes. The decoder keeps each record as a
//! raw `(type, value)` pair and never interprets the value.

use bytes::{Buf, Bytes};
use std::fmt;
use thiserror::Error;
use trunkwire_core::MacAddr;

/// DTP multicast destination MAC address (01:00:0C:CC:CC:CC)
pub const DTP_MULTICAST_MAC: MacAddr = MacAddr([0x01, 0x00, 0x0C, 0xCC, 0xCC, 0xCC]);

/// DTP protocol version sent by Cisco switches
pub const DTP_VERSION: u8 = 0x01;

/// SNAP type for DTP (0x2004)
pub const DTP_SNAP_TYPE: u16 = 0x2004;

/// Size of the version header
pub const DTP_HEADER_LEN: usize = 1;

/// Size of the type + length prefix of every TLV
pub const TLV_HEADER_LEN: usize = 4;

/// TLV Type values
///
/// These are exported for callers that want to interpret records. The
/// decoder itself passes every type through untouched.
pub mod tlv_types {
    /// Trunk (VTP domain) name
    pub const TRUNK_NAME: u16 = 0x0001;
    /// Port status (trunk/access, on/off/desirable/auto)
    pub const STATUS: u16 = 0x0002;
    /// Trunk encapsulation type (ISL/802.1Q/negotiated)
    pub const TYPE: u16 = 0x0003;
    /// Sender MAC address
    pub const MAC_ADDR: u16 = 0x0004;

    /// Display label for a known type code
    pub fn name(tlv_type: u16) -> Option<&'static str> {
        match tlv_type {
            TRUNK_NAME => Some("TRUNK_NAME"),
            STATUS => Some("STATUS"),
            TYPE => Some("TYPE"),
            MAC_ADDR => Some("MAC_ADDR"),
            _ => None,
        }
    }

    /// Whether the type code is one of the known DTP TLVs
    pub fn is_known(tlv_type: u16) -> bool {
        name(tlv_type).is_some()
    }
}

/// Malformed DTP payload
///
/// Offsets are absolute positions in the buffer handed to [`decode`] and
/// point at the start of the TLV that could not be read.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer has no version byte
    #[error("DTP payload is empty, missing version byte")]
    TruncatedHeader,

    /// Fewer than 4 bytes left where a TLV type/length prefix starts
    #[error("truncated TLV prefix at offset {offset}: {remaining} of {TLV_HEADER_LEN} bytes present")]
    TruncatedTlvPrefix { offset: usize, remaining: usize },

    /// TLV value shorter than its declared length
    #[error("truncated TLV 0x{tlv_type:04x} at offset {offset}: length {length}, {remaining} bytes present")]
    TruncatedTlvValue {
        offset: usize,
        tlv_type: u16,
        length: usize,
        remaining: usize,
    },
}

impl DecodeError {
    /// Byte offset where decoding stopped
    pub fn offset(&self) -> usize {
        match self {
            Self::TruncatedHeader => 0,
            Self::TruncatedTlvPrefix { offset, .. } | Self::TruncatedTlvValue { offset, .. } => {
                *offset
            }
        }
    }

    /// Stable snake_case name of the error class
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TruncatedHeader => "truncated_header",
            Self::TruncatedTlvPrefix { .. } => "truncated_tlv_prefix",
            Self::TruncatedTlvValue { .. } => "truncated_tlv_value",
        }
    }
}

impl From<DecodeError> for trunkwire_core::Error {
    fn from(err: DecodeError) -> Self {
        trunkwire_core::Error::parsing(format!("DTP: {}", err))
    }
}

/// One raw DTP TLV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvRecord {
    /// Type code, see [`tlv_types`]
    pub tlv_type: u16,
    /// Value bytes (the wire length is `value.len()`)
    pub value: Bytes,
}

impl TlvRecord {
    /// Create a record from a type code and value
    pub fn new(tlv_type: u16, value: impl Into<Bytes>) -> Self {
        Self {
            tlv_type,
            value: value.into(),
        }
    }

    /// Parse one TLV from the front of `buf`
    ///
    /// `offset` is the absolute position of `buf`'s first byte and is only
    /// used for error reporting. On error `buf` may be partially consumed.
    pub fn parse(buf: &mut Bytes, offset: usize) -> Result<Self, DecodeError> {
        if buf.remaining() < TLV_HEADER_LEN {
            return Err(DecodeError::TruncatedTlvPrefix {
                offset,
                remaining: buf.remaining(),
            });
        }

        let tlv_type = buf.get_u16();
        let length = buf.get_u16() as usize;

        if buf.remaining() < length {
            return Err(DecodeError::TruncatedTlvValue {
                offset,
                tlv_type,
                length,
                remaining: buf.remaining(),
            });
        }

        Ok(Self {
            tlv_type,
            value: buf.split_to(length),
        })
    }

    /// Bytes this record occupies on the wire (prefix + value)
    pub fn wire_len(&self) -> usize {
        TLV_HEADER_LEN + self.value.len()
    }

    /// Whether the type code is one of the known DTP TLVs
    pub fn is_known(&self) -> bool {
        tlv_types::is_known(self.tlv_type)
    }
}

/// Decoded DTP payload
///
/// Produced once by [`decode`]; there are no mutating methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DtpPacket {
    version: u8,
    records: Vec<TlvRecord>,
}

impl DtpPacket {
    /// Parse a DTP payload (without Ethernet/LLC/SNAP headers)
    pub fn parse(data: &[u8]) -> Result<Self, DecodeError> {
        decode(data)
    }

    /// DTP version byte
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Records in wire order
    pub fn records(&self) -> &[TlvRecord] {
        &self.records
    }

    /// Consume the packet, keeping the records
    pub fn into_records(self) -> Vec<TlvRecord> {
        self.records
    }

    /// First record with the given type code
    pub fn find(&self, tlv_type: u16) -> Option<&TlvRecord> {
        self.records.iter().find(|r| r.tlv_type == tlv_type)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the packet carries no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Size of the payload this packet was decoded from
    pub fn wire_len(&self) -> usize {
        DTP_HEADER_LEN + self.records.iter().map(TlvRecord::wire_len).sum::<usize>()
    }
}

impl TryFrom<&[u8]> for DtpPacket {
    type Error = DecodeError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        decode(data)
    }
}

/// Decode a DTP payload into its version and TLV records
///
/// The whole buffer must be consumed: the loop only stops when the cursor
/// lands exactly on the end, so trailing bytes surface as a truncation error.
pub fn decode(data: &[u8]) -> Result<DtpPacket, DecodeError> {
    let mut buf = Bytes::copy_from_slice(data);

    if buf.remaining() < DTP_HEADER_LEN {
        return Err(DecodeError::TruncatedHeader);
    }
    let version = buf.get_u8();

    let mut records = Vec::new();
    while buf.has_remaining() {
        let offset = data.len() - buf.remaining();
        records.push(TlvRecord::parse(&mut buf, offset)?);
    }

    Ok(DtpPacket { version, records })
}

impl fmt::Display for TlvRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = tlv_types::name(self.tlv_type).unwrap_or("UNKNOWN");
        write!(
            f,
            "0x{:04X} {} len={} value=",
            self.tlv_type,
            name,
            self.value.len()
        )?;
        if self.value.is_empty() {
            return write!(f, "-");
        }
        for b in self.value.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for DtpPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DTP Packet:")?;
        writeln!(f, "  Version: 0x{:02X}", self.version)?;
        writeln!(f, "  TLVs: {}", self.records.len())?;
        for record in &self.records {
            writeln!(f, "    {}", record)?;
        }
        Ok(())
    }
}
