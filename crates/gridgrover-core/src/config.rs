//! Search configuration: the grid, the sensor patterns, and backend selection.
//!
//! A configuration is loaded once per run from a JSON file (`grover.json` by
//! default) and is immutable afterwards. The variation switcher produces a
//! whole new file rather than mutating anything in place.
//!
//! The map is stored the way authors write it: one string per grid row, with
//! optional spaces between tokens and `X` accepted as an alias for `1`. All
//! length invariants are checked eagerly at load time; a misshapen map is a
//! descriptive [`ConfigError`], never a silently wrong grid.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default name of the active configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "grover.json";

// ---------------------------------------------------------------------------
// Provider selection
// ---------------------------------------------------------------------------

/// Quantum backend providers a search can be submitted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Provider {
    Ionq,
    Ibm,
    FakeIbm,
    #[default]
    Simulate,
    BlueQubit,
}

impl Provider {
    /// Every provider the configuration accepts.
    pub const ALL: [Provider; 5] = [
        Provider::Ionq,
        Provider::Ibm,
        Provider::FakeIbm,
        Provider::Simulate,
        Provider::BlueQubit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Ionq => "IONQ",
            Provider::Ibm => "IBM",
            Provider::FakeIbm => "FAKEIBM",
            Provider::Simulate => "SIMULATE",
            Provider::BlueQubit => "BLUEQUBIT",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Oracle self-check
// ---------------------------------------------------------------------------

/// Oracle validation block: when enabled, the executor checks that the oracle
/// outputs 1 for this one position before running the full search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestOracle {
    pub enable: bool,
    pub check_pos_row: usize,
    pub check_pos_col: usize,
}

impl Default for TestOracle {
    fn default() -> Self {
        TestOracle {
            enable: false,
            check_pos_row: 0,
            check_pos_col: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Search configuration
// ---------------------------------------------------------------------------

/// Full declarative configuration of one search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Map rows as written by the author; spaces and `X` are allowed.
    pub map_rows: Vec<String>,
    /// Grid width in cells.
    pub grid_width: usize,
    /// Bits per cell.
    pub byte_size: usize,
    /// Expected sensor readings along the row axis, one digit per entry.
    pub pattern_row: Vec<String>,
    /// Expected sensor readings along the column axis, one digit per entry.
    pub pattern_col: Vec<String>,
    pub provider: Provider,
    /// Submit to the selected provider instead of simulating locally.
    pub make_it_real: bool,
    /// Recall results from a previously submitted provider job.
    #[serde(default)]
    pub use_job_id: String,
    /// Row and column patterns are identical, so their qubits can be shared.
    pub reuse_row_col_qubits: bool,
    #[serde(default)]
    pub test_oracle: TestOracle,
}

impl SearchConfig {
    /// The stock 4x4 configuration with position (1,1) matching both patterns.
    pub fn default_4x4() -> Self {
        let pattern_row = vec!["1".to_string(), "0".to_string()];
        let pattern_col = vec!["0".to_string(), "1".to_string()];
        let reuse = pattern_row == pattern_col;
        SearchConfig {
            map_rows: vec![
                "0 1 0 1 ".to_string(),
                "0 1 1 1 ".to_string(),
                "1 1 0 0 ".to_string(),
                "0 1 1 0 ".to_string(),
            ],
            grid_width: 4,
            byte_size: 1,
            pattern_row,
            pattern_col,
            provider: Provider::Simulate,
            make_it_real: true,
            use_job_id: String::new(),
            reuse_row_col_qubits: reuse,
            test_oracle: TestOracle::default(),
        }
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: SearchConfig = serde_json::from_str(&text)?;
        config.validate()?;
        let height = config.grid()?.height();
        debug!(
            "loaded config from {}: {}x{} grid, provider {}",
            path.display(),
            height,
            config.grid_width,
            config.provider
        );
        Ok(config)
    }

    /// Validate and persist the configuration, replacing any previous file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        self.validate()?;
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!("wrote config to {}", path.display());
        Ok(())
    }

    /// Eagerly check every length and digit invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for digit in &self.pattern_row {
            if digit != "0" && digit != "1" {
                return Err(ConfigError::BadPatternDigit {
                    axis: "row",
                    digit: digit.clone(),
                });
            }
        }
        for digit in &self.pattern_col {
            if digit != "0" && digit != "1" {
                return Err(ConfigError::BadPatternDigit {
                    axis: "column",
                    digit: digit.clone(),
                });
            }
        }
        self.grid().map(|_| ())
    }

    /// Parse the map rows into a validated [`Grid`].
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Grid::parse(&self.map_rows, self.grid_width, self.byte_size)
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// Rectangular grid of binary cells, parsed from the flattened map string.
///
/// Height is derived from the token count, never stored in the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tokens: String,
    width: usize,
    byte_size: usize,
}

impl Grid {
    /// Parse map rows into a grid.
    ///
    /// Spaces are stripped and `X` is normalized to `1`. The total token
    /// count must be an exact multiple of `width × byte_size`.
    pub fn parse(map_rows: &[String], width: usize, byte_size: usize) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if byte_size == 0 {
            return Err(ConfigError::ZeroByteSize);
        }

        let mut tokens = String::new();
        for row in map_rows {
            for c in row.chars() {
                match c {
                    '0' | '1' => tokens.push(c),
                    'X' => tokens.push('1'),
                    c if c.is_whitespace() => {}
                    other => return Err(ConfigError::BadMapToken(other)),
                }
            }
        }

        let row_stride = width * byte_size;
        if tokens.len() % row_stride != 0 {
            return Err(ConfigError::MisalignedMap {
                tokens: tokens.len(),
                row_stride,
            });
        }

        Ok(Grid {
            tokens,
            width,
            byte_size,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Derived height: `token_count / (width × byte_size)`.
    pub fn height(&self) -> usize {
        self.tokens.len() / (self.width * self.byte_size)
    }

    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// Total number of binary tokens in the map.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// The raw `byte_size`-wide token slice of one cell.
    pub fn cell_str(&self, row: usize, col: usize) -> &str {
        let start = (row * self.width + col) * self.byte_size;
        &self.tokens[start..start + self.byte_size]
    }

    /// Cell value as an unsigned integer parsed from its binary tokens.
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        u8::from_str_radix(self.cell_str(row, col), 2).unwrap_or(0)
    }

    /// Per-cell measurement count and probability grids resolved from counts.
    ///
    /// Keys that fail to resolve are skipped, consistent with the crate-wide
    /// miss policy.
    pub fn resolved_grids(
        &self,
        counts: &HashMap<String, u64>,
        positions: &[crate::position::Position],
    ) -> (Vec<Vec<u64>>, Vec<Vec<f64>>) {
        let total: u64 = counts.values().sum();
        let mut count_grid = vec![vec![0u64; self.width()]; self.height()];
        let mut prob_grid = vec![vec![0f64; self.width()]; self.height()];
        for (key, &value) in counts {
            if let Some(pos) = crate::position::resolve(key, positions) {
                if pos.row < self.height() && pos.col < self.width() {
                    count_grid[pos.row][pos.col] = value;
                    if total > 0 {
                        prob_grid[pos.row][pos.col] = value as f64 / total as f64;
                    }
                }
            }
        }
        (count_grid, prob_grid)
    }
}
