//! Research variation catalog.
//!
//! A fixed set of named 6x6 grid/pattern presets for comparing how search
//! difficulty changes with map density and pattern size. Looking one up
//! materializes a complete [`SearchConfig`]; the CLI then persists it as the
//! active configuration file, replacing the previous one outright.

use log::info;

use crate::config::{Provider, SearchConfig, TestOracle};
use crate::error::VariationError;

struct Preset {
    name: &'static str,
    pattern_row: &'static [&'static str],
    pattern_col: &'static [&'static str],
    map_rows: &'static [&'static str],
}

const SPARSE_MAP: &[&str] = &[
    "1 1 0 0 1 0 ",
    "0 0 1 1 0 1 ",
    "1 1 0 0 1 1 ",
    "0 1 1 0 0 0 ",
    "1 0 0 1 1 0 ",
    "0 1 0 1 0 1 ",
];

const CHECKERBOARD_MAP: &[&str] = &[
    "1 0 1 0 1 0 ",
    "0 1 0 1 0 1 ",
    "1 0 1 0 1 0 ",
    "0 1 0 1 0 1 ",
    "1 0 1 0 1 0 ",
    "0 1 0 1 0 1 ",
];

const PRESETS: &[Preset] = &[
    Preset {
        name: "sparse_6x6",
        pattern_row: &["1", "1", "0", "0"],
        pattern_col: &["1", "1", "0", "0"],
        map_rows: SPARSE_MAP,
    },
    Preset {
        name: "dense_6x6",
        pattern_row: &["1", "1", "0", "0"],
        pattern_col: &["1", "1", "0", "0"],
        map_rows: &[
            "1 1 1 1 1 1 ",
            "1 1 1 1 1 1 ",
            "1 1 1 1 1 1 ",
            "1 1 1 1 1 1 ",
            "1 1 1 1 1 1 ",
            "1 1 1 1 1 1 ",
        ],
    },
    Preset {
        name: "target_6x6",
        pattern_row: &["1", "1", "0", "0"],
        pattern_col: &["1", "1", "0", "0"],
        map_rows: &[
            "0 0 0 0 0 0 ",
            "0 0 0 0 0 0 ",
            "0 0 1 1 0 0 ",
            "0 0 1 1 0 0 ",
            "0 0 0 0 0 0 ",
            "0 0 0 0 0 0 ",
        ],
    },
    Preset {
        name: "checkerboard_6x6",
        pattern_row: &["1", "0", "1"],
        pattern_col: &["1", "0", "1"],
        map_rows: CHECKERBOARD_MAP,
    },
    Preset {
        name: "small_pattern_6x6",
        pattern_row: &["1", "1"],
        pattern_col: &["1", "1"],
        map_rows: SPARSE_MAP,
    },
    Preset {
        name: "medium_pattern_6x6",
        pattern_row: &["1", "1", "0"],
        pattern_col: &["1", "1", "0"],
        map_rows: SPARSE_MAP,
    },
    Preset {
        name: "asymmetric_6x6",
        pattern_row: &["1", "0", "1"],
        pattern_col: &["1", "1", "0"],
        map_rows: SPARSE_MAP,
    },
];

/// Names of every variation in the catalog, in catalog order.
pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

/// Short one-line description of a variation for listings.
pub fn describe(name: &str) -> Option<String> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .map(|p| format!("pattern {:?}, map 6x6", p.pattern_row))
}

/// Materialize the configuration for a named variation.
///
/// An unregistered name is a [`VariationError::UnknownName`] carrying the
/// full catalog, so callers can list the alternatives. Nothing is written
/// here; persistence is the caller's single side effect.
pub fn variation(name: &str) -> Result<SearchConfig, VariationError> {
    let preset = PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| VariationError::UnknownName {
            name: name.to_string(),
            known: names(),
        })?;

    let pattern_row: Vec<String> = preset.pattern_row.iter().map(|s| s.to_string()).collect();
    let pattern_col: Vec<String> = preset.pattern_col.iter().map(|s| s.to_string()).collect();
    let reuse = pattern_row == pattern_col;

    info!("materialized variation {name}");
    Ok(SearchConfig {
        map_rows: preset.map_rows.iter().map(|s| s.to_string()).collect(),
        grid_width: 6,
        byte_size: 1,
        pattern_row,
        pattern_col,
        provider: Provider::Simulate,
        make_it_real: true,
        use_job_id: String::new(),
        reuse_row_col_qubits: reuse,
        test_oracle: TestOracle::default(),
    })
}
