pub mod chart;
pub mod map;
pub mod report;
pub mod variation;

use gridgrover_core::{
    ExecutionRecord, Grid, Position, SearchConfig, grid_positions, validate_positions,
};
use log::debug;

/// Load the active configuration or exit with a message.
pub fn load_config(path: &str) -> SearchConfig {
    match SearchConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration {path}: {e}");
            eprintln!("Run `gridgrover variation <name>` to generate one.");
            std::process::exit(1);
        }
    }
}

/// Parse the configured grid or exit with a message.
pub fn load_grid(config: &SearchConfig) -> Grid {
    match config.grid() {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Invalid map in configuration: {e}");
            std::process::exit(1);
        }
    }
}

/// Load an execution record or exit with a message.
pub fn load_record(path: &str) -> ExecutionRecord {
    match ExecutionRecord::load(path) {
        Ok(record) => {
            debug!(
                "record: backend {}, {} shots",
                record.backend,
                record.total_shots()
            );
            record
        }
        Err(e) => {
            eprintln!("Failed to load execution record {path}: {e}");
            std::process::exit(1);
        }
    }
}

/// The positions list for this run.
///
/// A list carried by the record is validated against the row-major convention
/// before use; a mismatch is a hard error, since every key resolution would
/// otherwise point at the wrong cell. Without one, the canonical list is
/// built from the grid dimensions.
pub fn resolve_positions(grid: &Grid, record: &ExecutionRecord) -> Vec<Position> {
    match &record.positions {
        Some(positions) => {
            if let Err(e) = validate_positions(positions, grid.height(), grid.width()) {
                eprintln!("Execution record positions list rejected: {e}");
                std::process::exit(1);
            }
            positions.clone()
        }
        None => grid_positions(grid.height(), grid.width()),
    }
}
