//! Shared catalog fixtures for boxplan integration tests.
//!
//! `sample_catalog` mirrors a real two-manufacturer product range
//! (drawer cases at a handful of fixed heights/widths per depth), which
//! gives the planner realistic grouping and tie-breaking behavior.

use std::path::{Path, PathBuf};

use boxplan_core::BoxSpec;

fn spec(id: &str, manufacturer: &str, name: &str, h: u32, w: u32, d: u32) -> BoxSpec {
    BoxSpec {
        id: id.to_string(),
        manufacturer: manufacturer.to_string(),
        name: name.to_string(),
        height: h,
        width: w,
        depth: d,
        fillcolor: None,
    }
}

/// A realistic catalog: two manufacturers, three depth lines, several
/// heights and widths per line.
pub fn sample_catalog() -> Vec<BoxSpec> {
    vec![
        // tenma, 530 deep
        spec("tenma-01", "tenma", "Fits case H18 W30 D53", 180, 300, 530),
        spec("tenma-02", "tenma", "Fits case H23 W30 D53", 230, 300, 530),
        spec("tenma-03", "tenma", "Fits case H30 W30 D53", 300, 300, 530),
        spec("tenma-04", "tenma", "Fits case H18 W39 D53", 180, 390, 530),
        spec("tenma-05", "tenma", "Fits case H23 W39 D53", 230, 390, 530),
        spec("tenma-06", "tenma", "Fits case H39 W39 D53", 390, 390, 530),
        spec("tenma-07", "tenma", "Fits case H18 W44 D53", 180, 440, 530),
        spec("tenma-08", "tenma", "Fits case H23 W44 D53", 230, 440, 530),
        spec("tenma-09", "tenma", "Fits case H39 W44 D53", 390, 440, 530),
        // tenma, 740 deep
        spec("tenma-10", "tenma", "Fits case H18 W39 D74", 180, 390, 740),
        spec("tenma-11", "tenma", "Fits case H23 W39 D74", 230, 390, 740),
        spec("tenma-12", "tenma", "Fits case H30 W39 D74", 300, 390, 740),
        // muji, 445 deep
        spec("muji-01", "muji", "Storage case H18 W34 D44.5", 180, 340, 445),
        spec("muji-02", "muji", "Storage case H24 W34 D44.5", 240, 340, 445),
        spec("muji-03", "muji", "Storage case H30 W34 D44.5", 300, 340, 445),
        spec("muji-04", "muji", "Wide case H18 W55 D44.5", 180, 550, 445),
        spec("muji-05", "muji", "Wide case H24 W55 D44.5", 240, 550, 445),
        spec("muji-06", "muji", "Wide case H30 W55 D44.5", 300, 550, 445),
    ]
}

/// A minimal single-manufacturer catalog where every height/width pair
/// exists, so any reachable grid fills completely.
pub fn small_catalog() -> Vec<BoxSpec> {
    vec![
        spec("s-11", "acme", "Cube S", 100, 100, 400),
        spec("s-12", "acme", "Flat S", 100, 200, 400),
        spec("s-21", "acme", "Tall S", 200, 100, 400),
        spec("s-22", "acme", "Cube L", 200, 200, 400),
    ]
}

/// Write a catalog as JSON into `dir` and return the file path.
pub fn write_catalog_file(dir: &Path, catalog: &[BoxSpec]) -> PathBuf {
    let path = dir.join("catalog.json");
    let json = serde_json::to_string_pretty(catalog).expect("catalog fixtures serialize");
    std::fs::write(&path, json).expect("catalog fixture file writes");
    path
}
