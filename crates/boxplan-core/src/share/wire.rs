//! Wire records for the share-token codec.
//!
//! These shapes are a permanent compatibility surface: every key name
//! here has been emitted by some historical producer and must keep
//! decoding forever. Do not rename fields.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Dimensions;
use crate::plan::{GridPlan, Placement};

use super::SharedPlan;

/// One historical token encoding scheme.
///
/// The decoder tries these in the fixed order of [`DECODE_CHAIN`]; the
/// encoder only ever produces [`WireFormat::Compressed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// Current format: minified record, zlib-compressed, URL-safe base64
    /// without padding.
    Compressed,
    /// Oldest format: full-field-name record, standard base64 over the
    /// UTF-8 JSON bytes, no compression.
    LegacyUncompressedFull,
    /// Transitional format: the minified record of [`Compressed`] but
    /// without the compression layer.
    LegacyUncompressedMinified,
}

/// Decode attempt order. Fixed forever so older tokens keep working.
pub const DECODE_CHAIN: [WireFormat; 3] = [
    WireFormat::Compressed,
    WireFormat::LegacyUncompressedFull,
    WireFormat::LegacyUncompressedMinified,
];

// -----------------------------------------------------------------------
// Minified record (Compressed and LegacyUncompressedMinified)
// -----------------------------------------------------------------------

/// The space dimensions under the `i` (input) key.
#[derive(Debug, Serialize, Deserialize)]
pub struct WireSpace {
    pub h: u32,
    pub w: u32,
    pub d: u32,
}

/// One placement under the `b` key: box id, row, col.
#[derive(Debug, Serialize, Deserialize)]
pub struct WirePlacement {
    pub i: String,
    pub r: usize,
    pub c: usize,
}

/// The structural plan fields under the `p` key.
///
/// `m`, `d`, `rh`, `cw`, and `b` are the required fields: a record
/// missing any of them fails to parse and the decoder moves on. The
/// rest are optional and re-derived from the placements when absent.
#[derive(Debug, Serialize, Deserialize)]
pub struct WirePlanRecord {
    pub m: String,
    pub d: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub th: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tw: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u: Option<f64>,
    pub rh: Vec<u32>,
    pub cw: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bc: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub btc: Option<usize>,
    pub b: Vec<WirePlacement>,
}

/// The minified envelope: `i` (originating space) + `p` (plan).
#[derive(Debug, Serialize, Deserialize)]
pub struct WireMinified {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<WireSpace>,
    pub p: WirePlanRecord,
}

impl WireMinified {
    /// Build the record the encoder writes. Utilization is rounded to
    /// two decimals here; box geometry is never embedded.
    pub fn from_parts(space: &Dimensions, plan: &GridPlan) -> Self {
        Self {
            i: Some(WireSpace {
                h: space.height,
                w: space.width,
                d: space.depth,
            }),
            p: WirePlanRecord {
                m: plan.manufacturer.clone(),
                d: plan.depth,
                th: Some(plan.total_height),
                tw: Some(plan.total_width),
                u: Some((plan.utilization * 100.0).round() / 100.0),
                rh: plan.row_heights.clone(),
                cw: plan.col_widths.clone(),
                bc: Some(plan.box_count),
                btc: Some(plan.box_type_count),
                b: plan
                    .placements
                    .iter()
                    .map(|p| WirePlacement {
                        i: p.box_id.clone(),
                        r: p.row,
                        c: p.col,
                    })
                    .collect(),
            },
        }
    }

    /// Reconstruct the shared plan. The embedded id (there is none in
    /// this shape) never matters: every decoded plan gets a fresh one.
    pub fn into_shared(self) -> SharedPlan {
        let placements: Vec<Placement> = self
            .p
            .b
            .into_iter()
            .map(|b| Placement {
                box_id: b.i,
                row: b.r,
                col: b.c,
            })
            .collect();

        let plan = GridPlan {
            id: fresh_shared_id(),
            manufacturer: self.p.m,
            depth: self.p.d,
            total_height: self.p.th.unwrap_or_else(|| self.p.rh.iter().sum()),
            total_width: self.p.tw.unwrap_or_else(|| self.p.cw.iter().sum()),
            utilization: self.p.u.unwrap_or(0.0),
            box_count: self.p.bc.unwrap_or(placements.len()),
            box_type_count: self
                .p
                .btc
                .unwrap_or_else(|| distinct_box_ids(&placements)),
            row_heights: self.p.rh,
            col_widths: self.p.cw,
            placements,
        };

        SharedPlan {
            space: self.i.map(|i| Dimensions {
                height: i.h,
                width: i.w,
                depth: i.d,
            }),
            plan,
        }
    }
}

// -----------------------------------------------------------------------
// Legacy full-shape record (LegacyUncompressedFull)
// -----------------------------------------------------------------------

/// The oldest envelope: full field names under `input` and `plan`.
#[derive(Debug, Deserialize)]
pub struct WireLegacyFull {
    pub input: Dimensions,
    pub plan: WireLegacyPlan,
}

/// The plan half of [`WireLegacyFull`]. Same required-field set as the
/// minified record, just spelled out.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireLegacyPlan {
    pub manufacturer: String,
    pub depth: u32,
    #[serde(default)]
    pub total_height: Option<u32>,
    #[serde(default)]
    pub total_width: Option<u32>,
    #[serde(default)]
    pub utilization: Option<f64>,
    pub row_heights: Vec<u32>,
    pub col_widths: Vec<u32>,
    #[serde(default)]
    pub box_count: Option<usize>,
    #[serde(default)]
    pub box_type_count: Option<usize>,
    pub boxes: Vec<Placement>,
}

impl WireLegacyFull {
    /// Reconstruct the shared plan, discarding any embedded id in favor
    /// of a fresh one.
    pub fn into_shared(self) -> SharedPlan {
        let placements = self.plan.boxes;
        let plan = GridPlan {
            id: fresh_shared_id(),
            manufacturer: self.plan.manufacturer,
            depth: self.plan.depth,
            total_height: self
                .plan
                .total_height
                .unwrap_or_else(|| self.plan.row_heights.iter().sum()),
            total_width: self
                .plan
                .total_width
                .unwrap_or_else(|| self.plan.col_widths.iter().sum()),
            utilization: self.plan.utilization.unwrap_or(0.0),
            box_count: self.plan.box_count.unwrap_or(placements.len()),
            box_type_count: self
                .plan
                .box_type_count
                .unwrap_or_else(|| distinct_box_ids(&placements)),
            row_heights: self.plan.row_heights,
            col_widths: self.plan.col_widths,
            placements,
        };

        SharedPlan {
            space: Some(self.input),
            plan,
        }
    }
}

fn fresh_shared_id() -> String {
    format!("shared-{}", Uuid::new_v4())
}

fn distinct_box_ids(placements: &[Placement]) -> usize {
    let mut ids: Vec<&str> = Vec::new();
    for p in placements {
        if !ids.contains(&p.box_id.as_str()) {
            ids.push(&p.box_id);
        }
    }
    ids.len()
}
