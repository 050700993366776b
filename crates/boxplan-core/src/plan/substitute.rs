//! Rebuild a plan after swapping the box at one grid cell.

use crate::catalog::{BoxSpec, Dimensions};

use super::builder::{FilledGrid, assemble_plan};
use super::types::GridPlan;

/// Swap the box at `(row, col)` for `new_box_id` and rebuild the plan.
///
/// The new box's height becomes the height of the entire row and its
/// width the width of the entire column, so every cell in that row and
/// column changes target size. The whole grid is then re-matched against
/// the catalog by the new box's manufacturer and depth; any cell with no
/// exact match keeps its previously placed box instead of invalidating
/// the plan. Metrics are recomputed against the original `space` using
/// the plan's own depth, and the plan id is kept.
///
/// Returns `None` when `new_box_id` is not in the catalog or `(row, col)`
/// is outside the grid.
pub fn substitute_box(
    space: &Dimensions,
    plan: &GridPlan,
    catalog: &[BoxSpec],
    new_box_id: &str,
    row: usize,
    col: usize,
) -> Option<GridPlan> {
    let new_box = catalog.iter().find(|b| b.id == new_box_id)?;
    if row >= plan.row_heights.len() || col >= plan.col_widths.len() {
        return None;
    }

    let mut row_heights = plan.row_heights.clone();
    let mut col_widths = plan.col_widths.clone();
    row_heights[row] = new_box.height;
    col_widths[col] = new_box.width;

    let mut placements = Vec::with_capacity(row_heights.len() * col_widths.len());
    let mut placed_volume = 0u64;
    let mut type_ids: Vec<&str> = Vec::new();

    for (r, &target_h) in row_heights.iter().enumerate() {
        for (c, &target_w) in col_widths.iter().enumerate() {
            let matched = catalog.iter().find(|b| {
                b.manufacturer == new_box.manufacturer
                    && b.depth == new_box.depth
                    && b.height == target_h
                    && b.width == target_w
            });
            // Fall back to the cell's previous occupant when the catalog
            // has no box of the new target size.
            let spec = match matched {
                Some(spec) => Some(spec),
                None => plan
                    .placement_at(r, c)
                    .and_then(|p| catalog.iter().find(|b| b.id == p.box_id)),
            };
            let Some(spec) = spec else {
                continue;
            };

            placed_volume += spec.volume();
            if !type_ids.contains(&spec.id.as_str()) {
                type_ids.push(&spec.id);
            }
            placements.push(super::types::Placement {
                box_id: spec.id.clone(),
                row: r,
                col: c,
            });
        }
    }

    let box_type_count = type_ids.len();
    Some(assemble_plan(
        plan.id.clone(),
        plan.manufacturer.clone(),
        plan.depth,
        space,
        row_heights,
        col_widths,
        FilledGrid {
            placements,
            placed_volume,
            box_type_count,
        },
    ))
}
