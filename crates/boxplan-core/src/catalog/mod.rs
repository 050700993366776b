//! Catalog model: space dimensions, box specs, loading, and grouping.
//!
//! The catalog is an ordered, caller-supplied list of [`BoxSpec`]s. Its
//! order matters: the planner's tie-breaking depends on first-seen order
//! of distinct lengths, so loading and grouping both preserve it.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Requested storage space size, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: u32,
    pub width: u32,
    pub depth: u32,
}

/// One catalog entry: a purchasable storage container.
///
/// `name` and `fillcolor` are display-only and ignored by the planning
/// logic; they are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Unique, stable identifier (e.g. `"tenma-01"`).
    pub id: String,
    pub manufacturer: String,
    /// Human-readable product name.
    pub name: String,
    /// Height in millimeters, strictly positive.
    pub height: u32,
    /// Width in millimeters, strictly positive.
    pub width: u32,
    /// Depth in millimeters, strictly positive.
    pub depth: u32,
    /// Optional display color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
}

impl BoxSpec {
    /// Volume in cubic millimeters.
    pub fn volume(&self) -> u64 {
        u64::from(self.height) * u64::from(self.width) * u64::from(self.depth)
    }
}

/// Errors that can occur while loading or validating a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog contains no boxes")]
    Empty,

    #[error("duplicate box id: {0:?}")]
    DuplicateId(String),

    #[error("box {id:?} has a non-positive {dimension}")]
    NonPositiveDimension { id: String, dimension: &'static str },
}

/// Read and validate a catalog JSON file (a top-level array of boxes).
pub fn load_catalog(path: &Path) -> Result<Vec<BoxSpec>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let boxes: Vec<BoxSpec> = serde_json::from_str(&contents)?;
    validate_catalog(&boxes)?;
    Ok(boxes)
}

/// Validate catalog invariants: non-empty, unique ids, positive dimensions.
///
/// The planner itself assumes a valid catalog; this check belongs to the
/// loading boundary so malformed data is rejected before planning starts.
pub fn validate_catalog(boxes: &[BoxSpec]) -> Result<(), CatalogError> {
    if boxes.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for spec in boxes {
        if !seen.insert(&spec.id) {
            return Err(CatalogError::DuplicateId(spec.id.clone()));
        }
        for (dimension, value) in [
            ("height", spec.height),
            ("width", spec.width),
            ("depth", spec.depth),
        ] {
            if value == 0 {
                return Err(CatalogError::NonPositiveDimension {
                    id: spec.id.clone(),
                    dimension,
                });
            }
        }
    }
    Ok(())
}

/// Boxes of one manufacturer at one depth, in catalog order.
#[derive(Debug)]
pub struct BoxGroup<'a> {
    pub manufacturer: &'a str,
    pub depth: u32,
    pub boxes: Vec<&'a BoxSpec>,
}

impl BoxGroup<'_> {
    /// Distinct heights in first-seen order.
    pub fn distinct_heights(&self) -> Vec<u32> {
        distinct(self.boxes.iter().map(|b| b.height))
    }

    /// Distinct widths in first-seen order.
    pub fn distinct_widths(&self) -> Vec<u32> {
        distinct(self.boxes.iter().map(|b| b.width))
    }
}

fn distinct(values: impl Iterator<Item = u32>) -> Vec<u32> {
    let mut out = Vec::new();
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

/// Group catalog entries by `(manufacturer, depth)`, dropping boxes deeper
/// than the requested space.
///
/// Groups appear in the order their first member appears in the catalog.
/// The key is a real tuple, so a manufacturer name containing any
/// delimiter character cannot collide with another group.
pub fn group_catalog<'a>(space: &Dimensions, catalog: &'a [BoxSpec]) -> Vec<BoxGroup<'a>> {
    let mut groups: Vec<BoxGroup<'a>> = Vec::new();
    let mut index: HashMap<(&str, u32), usize> = HashMap::new();

    for spec in catalog {
        if spec.depth > space.depth {
            continue;
        }
        let key = (spec.manufacturer.as_str(), spec.depth);
        match index.get(&key) {
            Some(&i) => groups[i].boxes.push(spec),
            None => {
                index.insert(key, groups.len());
                groups.push(BoxGroup {
                    manufacturer: &spec.manufacturer,
                    depth: spec.depth,
                    boxes: vec![spec],
                });
            }
        }
    }
    groups
}
