//! Subcommand implementations
//!
//! Output goes to the supplied writer so the commands can be driven from
//! tests; logging goes through `tracing`.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};
use trunkwire_core::{Error, Packet, Protocol, ProtocolStats};
use trunkwire_protocols::dtp::{self, DtpProtocol};
use trunkwire_protocols::registry::split_snap;
use trunkwire_protocols::DecoderRegistry;

use crate::input::{parse_hex, read_lines};

/// Counter: input lines that were not valid hex
pub const STAT_INVALID_HEX: &str = "invalid_hex";

/// Decode every payload; returns `true` when all of them decoded
pub fn decode_payloads(payloads: &[String], out: &mut impl Write) -> Result<bool> {
    let mut all_ok = true;

    for (idx, text) in payloads.iter().enumerate() {
        let bytes = match parse_hex(text) {
            Ok(bytes) => bytes,
            Err(err) => {
                writeln!(out, "[{}] invalid input: {}", idx + 1, err)?;
                all_ok = false;
                continue;
            }
        };

        match dtp::decode(&bytes) {
            Ok(packet) => {
                debug!(index = idx + 1, tlvs = packet.len(), "Decoded payload");
                write!(out, "[{}] {}", idx + 1, packet)?;
            }
            Err(err) => {
                warn!(
                    index = idx + 1,
                    kind = err.kind(),
                    offset = err.offset(),
                    "Payload rejected"
                );
                writeln!(out, "[{}] {} bytes: {}", idx + 1, bytes.len(), err)?;
                all_ok = false;
            }
        }
    }

    Ok(all_ok)
}

/// Decode hex Ethernet frames read line by line
///
/// Malformed lines and frames are reported and counted; only failures to
/// read the input or write the output abort the run.
pub fn decode_frames(
    reader: impl BufRead,
    source: &str,
    out: &mut impl Write,
) -> Result<ProtocolStats> {
    let registry = DecoderRegistry::with_defaults();
    let mut dtp = DtpProtocol::new();
    let mut invalid = 0u64;

    let lines = read_lines(reader).with_context(|| format!("reading frames from {}", source))?;
    info!(source = source, frames = lines.len(), "Decoding frames");

    for line in lines {
        let frame = match parse_hex(&line.text) {
            Ok(frame) => frame,
            Err(err) => {
                warn!(source = source, line = line.number, error = %err, "Skipping line");
                writeln!(out, "{}:{}: invalid input: {}", source, line.number, err)?;
                invalid += 1;
                continue;
            }
        };

        let at = format!("{}:{}", source, line.number);
        let packet = Packet::new(source, frame);
        let snap = split_snap(packet.data());

        // DTP is decoded once, by the handler; other keys go to the registry
        if let Some(result) = dtp.process_snap(&packet, snap.as_ref()) {
            match result {
                Ok(decoded) => write!(out, "{}: {}", at, decoded)?,
                Err(err) => writeln!(out, "{}: {}", at, Error::from(err))?,
            }
            continue;
        }

        match snap {
            None => writeln!(out, "{}: not an LLC/SNAP frame", at)?,
            Some(snap) => match registry.decode_snap(&snap) {
                Ok(Some(decoded)) => write!(out, "{}: {}", at, decoded)?,
                Ok(None) => writeln!(
                    out,
                    "{}: no decoder for {} ({})",
                    at,
                    snap.key,
                    snap.key.protocol_id.name().unwrap_or("unknown")
                )?,
                Err(err) => writeln!(out, "{}: {}", at, err)?,
            },
        }
    }

    let mut stats = dtp.stats();
    if invalid > 0 {
        stats.bump(STAT_INVALID_HEX, invalid);
    }
    write_summary(&stats, out)?;
    Ok(stats)
}

/// List the registered decoders
pub fn list_protocols(out: &mut impl Write) -> Result<()> {
    let registry = DecoderRegistry::with_defaults();
    for info in registry.list() {
        writeln!(out, "{:<8} {}", info.name, info.key)?;
    }
    Ok(())
}

fn write_summary(stats: &ProtocolStats, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Frames: {}", stats.packets_received)?;
    writeln!(out, "  DTP decoded: {}", stats.packets_parsed)?;
    writeln!(out, "  DTP errors:  {}", stats.packets_errors)?;

    let mut custom: Vec<_> = stats.custom.iter().collect();
    custom.sort();
    for (key, value) in custom {
        writeln!(out, "  {}: {}", key, value)?;
    }
    Ok(())
}
