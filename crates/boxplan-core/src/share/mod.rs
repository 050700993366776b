//! Share-token codec.
//!
//! A plan (plus the space it was computed for) serializes to a compact
//! opaque token: minified JSON record, zlib-compressed, URL-safe base64
//! with no padding. Decoding tries every historical wire format in a
//! fixed order, because tokens shared years ago must keep working:
//!
//! 1. [`WireFormat::Compressed`] -- the current format.
//! 2. [`WireFormat::LegacyUncompressedFull`] -- standard base64 over
//!    uncompressed UTF-8 JSON with full field names.
//! 3. [`WireFormat::LegacyUncompressedMinified`] -- the minified record
//!    without the compression layer.
//!
//! Decode failure is a normal outcome (`None`), never a panic or error;
//! only the encode side can fail, and that failure is reported.

pub mod wire;

use std::io::{Read, Write};

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use thiserror::Error;

use crate::catalog::{BoxSpec, Dimensions};
use crate::plan::GridPlan;

use wire::{DECODE_CHAIN, WireFormat, WireLegacyFull, WireMinified};

/// No padding on encode; tolerate present or absent padding on decode,
/// since legacy producers emitted padded standard base64.
const CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// Standard alphabet with `+`, `/`, `=` remapped to `-`, `_`, nothing.
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, CONFIG);

/// Plain standard alphabet, used only by the legacy decode paths.
const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, CONFIG);

/// A plan restored from a token, with the originating space when the
/// token carried it.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedPlan {
    pub space: Option<Dimensions>,
    pub plan: GridPlan,
}

/// Errors that can occur while encoding a plan into a token.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("failed to serialize plan record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to compress plan record: {0}")]
    Compress(#[from] std::io::Error),
}

/// Encode a plan and its originating space into a URL-safe token.
///
/// The token contains only the plan's structural fields (manufacturer,
/// depth, row heights, column widths, placements as id/row/col triples,
/// counts, and utilization rounded to two decimals) plus the space
/// dimensions. Box geometry is never embedded; it is re-derived from
/// the catalog on the consuming side.
pub fn encode_token(space: &Dimensions, plan: &GridPlan) -> Result<String, ShareError> {
    let record = WireMinified::from_parts(space, plan);
    let json = serde_json::to_vec(&record)?;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;

    Ok(URL_SAFE.encode(compressed))
}

/// Decode a token back into a [`SharedPlan`].
///
/// Tries every format in [`DECODE_CHAIN`] and returns `None` when all
/// of them fail or the parsed record lacks a required field. The
/// decoded plan always gets a freshly generated id, and its utilization
/// comes from the wire record; it is never recomputed here. `catalog`
/// is only consulted to warn about placements whose box id no longer
/// exists.
pub fn decode_token(token: &str, catalog: &[BoxSpec]) -> Option<SharedPlan> {
    if token.is_empty() {
        return None;
    }

    let Some(shared) = DECODE_CHAIN
        .iter()
        .find_map(|&format| try_format(format, token))
    else {
        tracing::warn!("failed to decode share token with any known format");
        return None;
    };

    for p in &shared.plan.placements {
        if !catalog.iter().any(|b| b.id == p.box_id) {
            tracing::warn!(box_id = %p.box_id, "decoded placement references a box missing from the catalog");
        }
    }

    Some(shared)
}

/// Attempt one wire format. Any failure at any stage yields `None` so
/// the caller can move on to the next format.
fn try_format(format: WireFormat, token: &str) -> Option<SharedPlan> {
    match format {
        WireFormat::Compressed => {
            let compressed = URL_SAFE.decode(token).ok()?;
            let mut json = Vec::new();
            ZlibDecoder::new(compressed.as_slice())
                .read_to_end(&mut json)
                .ok()?;
            let record: WireMinified = serde_json::from_slice(&json).ok()?;
            Some(record.into_shared())
        }
        WireFormat::LegacyUncompressedFull => {
            let bytes = STANDARD.decode(token).ok()?;
            let text = String::from_utf8(bytes).ok()?;
            let record: WireLegacyFull = serde_json::from_str(&text).ok()?;
            Some(record.into_shared())
        }
        WireFormat::LegacyUncompressedMinified => {
            let bytes = STANDARD.decode(token).ok()?;
            let text = String::from_utf8(bytes).ok()?;
            let record: WireMinified = serde_json::from_str(&text).ok()?;
            Some(record.into_shared())
        }
    }
}
