//! Grid plan value types.

use serde::{Deserialize, Serialize};

/// One box placed at a 0-based grid coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub box_id: String,
    pub row: usize,
    pub col: usize,
}

/// A full row x column tiling of a space, with derived metrics.
///
/// Invariants maintained by the builder: exactly one placement per
/// `(row, col)` pair, `placements.len() == row_heights.len() *
/// col_widths.len()`, and each placed box matches its row height, column
/// width, and the plan's manufacturer and depth. Plans are immutable once
/// ranked; box substitution produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPlan {
    pub id: String,
    pub manufacturer: String,
    /// Depth of the group this plan was built from, in millimeters.
    pub depth: u32,
    /// Sum of `row_heights`.
    pub total_height: u32,
    /// Sum of `col_widths`.
    pub total_width: u32,
    /// Placed volume / requested space volume * 100, in `[0, 100]`.
    pub utilization: f64,
    pub row_heights: Vec<u32>,
    pub col_widths: Vec<u32>,
    pub placements: Vec<Placement>,
    /// Total number of placed boxes.
    pub box_count: usize,
    /// Number of distinct box ids used.
    pub box_type_count: usize,
}

impl GridPlan {
    /// The placement occupying `(row, col)`, if any.
    pub fn placement_at(&self, row: usize, col: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.row == row && p.col == col)
    }
}
