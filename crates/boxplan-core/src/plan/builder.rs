//! Grid plan generation.
//!
//! Turns a requested space size and a catalog into candidate tiling
//! plans, one pass per `(manufacturer, depth)` group:
//!
//! 1. Drop boxes deeper than the space and group the rest.
//! 2. Run the covering search once per axis over the group's distinct
//!    heights and widths.
//! 3. Fill every grid cell with a group member matching its row height
//!    and column width; a single unmatched cell discards the whole grid.
//! 4. Compute totals, utilization, and box counts.
//!
//! Infeasible input is not an error: it simply yields fewer plans.

use crate::catalog::{BoxSpec, Dimensions, group_catalog};
use crate::combo::find_combination;

use super::types::{GridPlan, Placement};

/// Build every candidate grid plan for `space` from `catalog`.
///
/// Output order is deterministic: groups in catalog first-seen order, one
/// plan at most per group, ids `plan-<manufacturer>-<depth>-<n>` numbered
/// in generation order.
pub fn build_plans(space: &Dimensions, catalog: &[BoxSpec]) -> Vec<GridPlan> {
    tracing::debug!(
        height = space.height,
        width = space.width,
        depth = space.depth,
        boxes = catalog.len(),
        "planning started"
    );

    let groups = group_catalog(space, catalog);
    let mut plans = Vec::new();

    for group in &groups {
        let row_heights = find_combination(space.height, &group.distinct_heights());
        let col_widths = find_combination(space.width, &group.distinct_widths());
        if row_heights.is_empty() || col_widths.is_empty() {
            continue;
        }

        let Some(filled) = fill_grid(&row_heights, &col_widths, |h, w| {
            group
                .boxes
                .iter()
                .find(|b| b.height == h && b.width == w)
                .copied()
        }) else {
            tracing::debug!(
                manufacturer = group.manufacturer,
                depth = group.depth,
                "grid has an unfillable cell, discarding group"
            );
            continue;
        };

        let id = format!("plan-{}-{}-{}", group.manufacturer, group.depth, plans.len());
        plans.push(assemble_plan(
            id,
            group.manufacturer.to_string(),
            group.depth,
            space,
            row_heights,
            col_widths,
            filled,
        ));
    }

    tracing::debug!(candidates = plans.len(), "planning finished");
    plans
}

/// Result of filling every cell of a grid.
pub(super) struct FilledGrid {
    pub placements: Vec<Placement>,
    pub placed_volume: u64,
    pub box_type_count: usize,
}

/// Fill each `(row, col)` cell via `lookup(row_height, col_width)`.
///
/// Returns `None` as soon as any cell has no matching box: partial plans
/// are never produced.
pub(super) fn fill_grid<'a>(
    row_heights: &[u32],
    col_widths: &[u32],
    lookup: impl Fn(u32, u32) -> Option<&'a BoxSpec>,
) -> Option<FilledGrid> {
    let mut placements = Vec::with_capacity(row_heights.len() * col_widths.len());
    let mut placed_volume = 0u64;
    let mut type_ids: Vec<&str> = Vec::new();

    for (row, &h) in row_heights.iter().enumerate() {
        for (col, &w) in col_widths.iter().enumerate() {
            let spec = lookup(h, w)?;
            placed_volume += spec.volume();
            if !type_ids.contains(&spec.id.as_str()) {
                type_ids.push(&spec.id);
            }
            placements.push(Placement {
                box_id: spec.id.clone(),
                row,
                col,
            });
        }
    }

    Some(FilledGrid {
        placements,
        placed_volume,
        box_type_count: type_ids.len(),
    })
}

/// Assemble a [`GridPlan`] from a filled grid and its metrics inputs.
///
/// `depth` feeds both the plan and the utilization denominator: the
/// group depth during generation, the plan's original depth when
/// rebuilding after a substitution.
pub(super) fn assemble_plan(
    id: String,
    manufacturer: String,
    depth: u32,
    space: &Dimensions,
    row_heights: Vec<u32>,
    col_widths: Vec<u32>,
    filled: FilledGrid,
) -> GridPlan {
    let total_height = row_heights.iter().sum();
    let total_width = col_widths.iter().sum();
    let space_volume = u64::from(space.height) * u64::from(space.width) * u64::from(depth);
    let utilization = if space_volume > 0 {
        filled.placed_volume as f64 / space_volume as f64 * 100.0
    } else {
        0.0
    };

    GridPlan {
        id,
        manufacturer,
        depth,
        total_height,
        total_width,
        utilization,
        box_count: filled.placements.len(),
        box_type_count: filled.box_type_count,
        row_heights,
        col_widths,
        placements: filled.placements,
    }
}
