//! # gridgrover-core
//!
//! **Find the cell whose neighborhood matches the sensor pattern.**
//!
//! `gridgrover-core` is the analysis library behind a Grover-search grid
//! pattern-matching demonstration. A quantum executor (out of scope here)
//! runs the amplified search and hands back a histogram of measurement keys;
//! this crate turns those keys back into grid coordinates and into something
//! a human can read.
//!
//! ## Quick Start
//!
//! ```
//! use gridgrover_core::{SearchConfig, grid_positions, resolve, search_summary};
//! use std::collections::HashMap;
//!
//! let config = SearchConfig::default_4x4();
//! let grid = config.grid().unwrap();
//! let positions = grid_positions(grid.height(), grid.width());
//!
//! let mut counts = HashMap::new();
//! counts.insert("1010".to_string(), 900u64);
//! counts.insert("0000".to_string(), 100u64);
//!
//! // "1010" reversed is "0101" = 5 -> row-major position (1, 1).
//! assert_eq!(resolve("1010", &positions).unwrap().row, 1);
//!
//! let summary = search_summary(&counts, &positions).unwrap();
//! assert_eq!(summary.total_shots, 1000);
//! ```
//!
//! ## Architecture
//!
//! Config → Position index → Aggregator → Reporter
//!
//! - Configuration (grid, patterns, provider selection) is loaded once per
//!   run and immutable afterwards; the variation switcher writes a whole new
//!   file instead of mutating shared state.
//! - The measurement-key convention (reverse, parse base 2, index the
//!   row-major positions list) lives in exactly one place,
//!   [`position::resolve`].
//! - Every statistic is computed once in [`aggregate`] and reused by every
//!   reporting surface.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod execution;
pub mod position;
pub mod report;
pub mod variations;

pub use aggregate::{
    ResolvedCount, SearchSummary, SelectedStats, argmax_position, normalized_certainty,
    optimal_iterations, probabilities, search_summary, selected_stats, shannon_entropy, top_k,
    total_shots,
};
pub use config::{DEFAULT_CONFIG_FILE, Grid, Provider, SearchConfig, TestOracle};
pub use error::{AggregateError, ConfigError, VariationError};
pub use execution::{CircuitStats, ExecutionRecord};
pub use position::{Position, grid_positions, resolve, validate_positions};
pub use report::summary_report;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
