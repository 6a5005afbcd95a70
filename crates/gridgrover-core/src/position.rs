//! Measurement-key to grid-coordinate resolution.
//!
//! The executing circuit measures a position register whose bit order is the
//! reverse of the reading order, so a measurement key maps to a position index
//! by reversing the bitstring and parsing it as an unsigned binary integer.
//! That index selects an entry from the `positions` list, which enumerates
//! every grid cell in row-major order. The convention lives here and nowhere
//! else; if the circuit encoding ever changes, this is the one place to touch.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One grid cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// Resolve a measurement key to a grid position.
///
/// Reverses the key, parses it as an unsigned binary integer, and indexes
/// into `positions`. Returns `None` when the decoded index is out of range
/// or the key is not a binary string. A miss is a soft skip, never an error;
/// all consumers in this crate follow that policy.
pub fn resolve(key: &str, positions: &[Position]) -> Option<Position> {
    let reversed: String = key.chars().rev().collect();
    let idx = usize::from_str_radix(&reversed, 2).ok()?;
    positions.get(idx).copied()
}

/// Enumerate every position of a `height × width` grid in row-major order.
///
/// This is the canonical ordering the measurement-key convention assumes.
pub fn grid_positions(height: usize, width: usize) -> Vec<Position> {
    let mut positions = Vec::with_capacity(height * width);
    for row in 0..height {
        for col in 0..width {
            positions.push(Position { row, col });
        }
    }
    positions
}

/// Validate that an externally supplied positions list matches the row-major
/// convention for a `height × width` grid.
///
/// The executing collaborator builds this list itself; rather than silently
/// trusting it, callers that accept one from outside should run it through
/// here first.
pub fn validate_positions(
    positions: &[Position],
    height: usize,
    width: usize,
) -> Result<(), ConfigError> {
    let expected = height * width;
    if positions.len() != expected {
        return Err(ConfigError::PositionsLength {
            expected,
            actual: positions.len(),
        });
    }
    if width == 0 {
        return Ok(());
    }
    for (index, &found) in positions.iter().enumerate() {
        let want = Position {
            row: index / width,
            col: index % width,
        };
        if found != want {
            return Err(ConfigError::PositionsOrder {
                index,
                found,
                expected: want,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_reverses_key() {
        // "01" reversed is "10" = 2 -> third row-major entry of a 2x2 grid.
        let positions = grid_positions(2, 2);
        assert_eq!(resolve("01", &positions), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_resolve_is_pure() {
        let positions = grid_positions(4, 4);
        let a = resolve("0110", &positions);
        let b = resolve("0110", &positions);
        assert_eq!(a, b);
        assert!(a.is_some());
    }

    #[test]
    fn test_resolve_out_of_range_is_none() {
        let positions = grid_positions(2, 2);
        // "001" reversed is "100" = 4, past the last index of a 2x2 grid.
        assert_eq!(resolve("001", &positions), None);
    }

    #[test]
    fn test_resolve_malformed_key_is_none() {
        let positions = grid_positions(2, 2);
        assert_eq!(resolve("0x", &positions), None);
        assert_eq!(resolve("", &positions), None);
    }

    #[test]
    fn test_grid_positions_row_major() {
        let positions = grid_positions(2, 3);
        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[2], Position::new(0, 2));
        assert_eq!(positions[3], Position::new(1, 0));
        assert_eq!(positions[5], Position::new(1, 2));
    }

    #[test]
    fn test_validate_positions_accepts_canonical() {
        let positions = grid_positions(3, 4);
        assert!(validate_positions(&positions, 3, 4).is_ok());
    }

    #[test]
    fn test_validate_positions_rejects_wrong_length() {
        let positions = grid_positions(2, 2);
        let err = validate_positions(&positions, 3, 3).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::PositionsLength {
                expected: 9,
                actual: 4
            }
        ));
    }

    #[test]
    fn test_validate_positions_rejects_shuffled() {
        let mut positions = grid_positions(2, 2);
        positions.swap(1, 2);
        let err = validate_positions(&positions, 2, 2).unwrap_err();
        assert!(matches!(err, ConfigError::PositionsOrder { index: 1, .. }));
    }
}
