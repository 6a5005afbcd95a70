//! Execution artifacts handed over by the circuit executor.
//!
//! Circuit construction, oracle synthesis, transpilation, and provider job
//! submission all happen upstream and out of scope. What crosses the boundary
//! is one JSON record per run: the measurement counts, the circuit's shape
//! numbers, the iteration count, and the backend that produced them.

use std::collections::HashMap;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::aggregate;
use crate::error::ConfigError;
use crate::position::Position;

/// Shape of the executed circuit, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitStats {
    pub num_qubits: u32,
    pub depth: u32,
    pub size: u32,
}

/// One search run as produced by the executor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Backend name string as reported by the executor.
    pub backend: String,
    /// Grover iterations actually run.
    pub iterations: u32,
    pub circuit: CircuitStats,
    /// Measurement key -> shot count histogram.
    pub counts: HashMap<String, u64>,
    /// Positions list as constructed by the executor, enumerating every grid
    /// coordinate in the row-major order the key encoding assumes. When
    /// absent, consumers build the canonical list themselves; when present it
    /// must pass [`crate::position::validate_positions`].
    #[serde(default)]
    pub positions: Option<Vec<Position>>,
    /// Explicitly selected position; when unset, callers fall back to the
    /// argmax of the counts resolved through the position index.
    #[serde(default)]
    pub selected: Option<Position>,
    /// Provider job identifier, when the run was recalled from a provider.
    #[serde(default)]
    pub job_id: Option<String>,
}

impl ExecutionRecord {
    /// Load a record from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let record: ExecutionRecord = serde_json::from_str(&text)?;
        debug!(
            "loaded execution record from {}: {} unique keys, backend {}",
            path.display(),
            record.counts.len(),
            record.backend
        );
        Ok(record)
    }

    pub fn total_shots(&self) -> u64 {
        aggregate::total_shots(&self.counts)
    }

    /// The highlighted position: the explicit selection if the record carries
    /// one, otherwise the resolved argmax of the counts.
    pub fn selected_or_argmax(&self, positions: &[Position]) -> Option<Position> {
        self.selected
            .or_else(|| aggregate::argmax_position(&self.counts, positions))
    }
}
