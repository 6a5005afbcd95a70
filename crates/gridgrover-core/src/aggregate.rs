//! Pure statistics over a measurement counts mapping.
//!
//! Every reporting surface (text report, console map, chart panels) derives
//! its numbers from the functions here instead of re-deriving "resolve key,
//! sum shots, compute percentage" at each call site. All functions are
//! stateless; the counts mapping is an immutable snapshot produced upstream
//! by circuit execution.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::AggregateError;
use crate::position::{self, Position};

/// Total shots across all measurement keys.
pub fn total_shots(counts: &HashMap<String, u64>) -> u64 {
    counts.values().sum()
}

/// Per-key empirical probability, `count / total_shots`.
///
/// Errors with [`AggregateError::EmptyCounts`] when the total is zero rather
/// than dividing by zero.
pub fn probabilities(counts: &HashMap<String, u64>) -> Result<HashMap<String, f64>, AggregateError> {
    let total = total_shots(counts);
    if total == 0 {
        return Err(AggregateError::EmptyCounts);
    }
    Ok(counts
        .iter()
        .map(|(k, &v)| (k.clone(), v as f64 / total as f64))
        .collect())
}

/// Top `k` entries by count, descending.
///
/// Ties keep a deterministic order: entries are first arranged by key
/// (lexicographic), then stably sorted by count, so equal counts come out in
/// key order on every run.
pub fn top_k(counts: &HashMap<String, u64>, k: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = counts.iter().map(|(k, &v)| (k.clone(), v)).collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(k);
    entries
}

/// Shannon entropy of the empirical distribution, in bits.
///
/// Uses the `0 · log2(0) = 0` convention; an empty mapping has zero entropy.
pub fn shannon_entropy(counts: &HashMap<String, u64>) -> f64 {
    let total = total_shots(counts);
    if total == 0 {
        return 0.0;
    }
    counts
        .values()
        .map(|&v| {
            if v == 0 {
                0.0
            } else {
                let p = v as f64 / total as f64;
                -p * p.log2()
            }
        })
        .sum()
}

/// Confidence proxy: `100 × (1 − H / Hmax)` where `Hmax = log2(unique keys)`.
///
/// A single-key (zero-entropy) result scores 100; a uniform spread over all
/// unique keys scores 0. With at most one unique key the maximum entropy is
/// undefined, so the result is pinned to 100.
pub fn normalized_certainty(counts: &HashMap<String, u64>) -> f64 {
    if counts.len() <= 1 {
        return 100.0;
    }
    let max_entropy = (counts.len() as f64).log2();
    100.0 * (1.0 - shannon_entropy(counts) / max_entropy)
}

/// Measurement statistics of one distinguished grid position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectedStats {
    pub count: u64,
    /// Share of total shots, `0.0..=1.0`.
    pub probability: f64,
}

/// Count and shot share of the first key resolving to `position`.
///
/// Keys are scanned in lexicographic order so the "first match" is the same on
/// every run. Returns zeroes when nothing resolves there or the mapping is
/// empty; a missing position is not an error.
pub fn selected_stats(
    counts: &HashMap<String, u64>,
    positions: &[Position],
    selected: Position,
) -> SelectedStats {
    let total = total_shots(counts);
    let mut keys: Vec<&String> = counts.keys().collect();
    keys.sort();
    for key in keys {
        if position::resolve(key, positions) == Some(selected) {
            let count = counts[key];
            let probability = if total > 0 {
                count as f64 / total as f64
            } else {
                0.0
            };
            return SelectedStats { count, probability };
        }
    }
    SelectedStats {
        count: 0,
        probability: 0.0,
    }
}

/// Theoretical optimal amplitude-amplification iteration count for a
/// single-solution search space: `ceil((π/4) · √N)`.
///
/// Reporting-only; the actual iteration count comes from the executor.
pub fn optimal_iterations(space_size: usize) -> u32 {
    if space_size == 0 {
        return 0;
    }
    (std::f64::consts::FRAC_PI_4 * (space_size as f64).sqrt()).ceil() as u32
}

/// The position the top-count key resolves to, skipping unresolvable keys.
pub fn argmax_position(counts: &HashMap<String, u64>, positions: &[Position]) -> Option<Position> {
    top_k(counts, counts.len())
        .into_iter()
        .find_map(|(key, _)| position::resolve(&key, positions))
}

// ---------------------------------------------------------------------------
// Bundled summary
// ---------------------------------------------------------------------------

/// One top entry with its resolved coordinate.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedCount {
    pub key: String,
    /// `None` when the decoded index is outside the positions list.
    pub position: Option<Position>,
    pub count: u64,
    /// Share of total shots, `0.0..=1.0`.
    pub probability: f64,
}

/// Derived statistics for one search run, computed in one place and shared by
/// every reporting surface.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSummary {
    pub total_shots: u64,
    pub unique_keys: usize,
    /// Top 5 entries, descending by count, with resolved coordinates.
    pub top_results: Vec<ResolvedCount>,
    pub entropy_bits: f64,
    /// Entropy as a percentage of the maximum for this many unique keys.
    pub normalized_entropy_pct: f64,
    pub certainty_pct: f64,
    /// Shot share of the single top result, in percent.
    pub top_confidence_pct: f64,
    /// Combined shot share of the top 3 results, in percent.
    pub top3_confidence_pct: f64,
}

/// Compute the full summary over a counts mapping.
///
/// Errors with [`AggregateError::EmptyCounts`] on a zero-shot mapping; every
/// downstream consumer wants the same guard.
pub fn search_summary(
    counts: &HashMap<String, u64>,
    positions: &[Position],
) -> Result<SearchSummary, AggregateError> {
    let total = total_shots(counts);
    if total == 0 {
        return Err(AggregateError::EmptyCounts);
    }

    let ranked = top_k(counts, counts.len());
    let top_results: Vec<ResolvedCount> = ranked
        .iter()
        .take(5)
        .map(|(key, count)| ResolvedCount {
            key: key.clone(),
            position: position::resolve(key, positions),
            count: *count,
            probability: *count as f64 / total as f64,
        })
        .collect();

    let top_confidence_pct = ranked[0].1 as f64 / total as f64 * 100.0;
    let top3: u64 = ranked.iter().take(3).map(|(_, c)| c).sum();
    let entropy_bits = shannon_entropy(counts);
    let normalized_entropy_pct = if counts.len() > 1 {
        entropy_bits / (counts.len() as f64).log2() * 100.0
    } else {
        0.0
    };

    Ok(SearchSummary {
        total_shots: total,
        unique_keys: counts.len(),
        top_results,
        entropy_bits,
        normalized_entropy_pct,
        certainty_pct: normalized_certainty(counts),
        top_confidence_pct,
        top3_confidence_pct: top3 as f64 / total as f64 * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::grid_positions;

    fn counts_of(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let counts = counts_of(&[("00", 10), ("01", 90), ("10", 25)]);
        let probs = probabilities(&counts).unwrap();
        let sum: f64 = probs.values().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!((probs["01"] - 90.0 / 125.0).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_empty_counts_error() {
        let counts = HashMap::new();
        assert_eq!(probabilities(&counts), Err(AggregateError::EmptyCounts));
        let zeroed = counts_of(&[("00", 0)]);
        assert_eq!(probabilities(&zeroed), Err(AggregateError::EmptyCounts));
    }

    #[test]
    fn test_top_k_descending_and_truncated() {
        let counts = counts_of(&[("00", 10), ("01", 90), ("10", 25), ("11", 25)]);
        let top = top_k(&counts, 3);
        assert_eq!(top.len(), 3);
        assert!(top[0].1 >= top[1].1 && top[1].1 >= top[2].1);
        assert_eq!(top[0], ("01".to_string(), 90));
        // Tied counts come out in key order.
        assert_eq!(top[1], ("10".to_string(), 25));
        assert_eq!(top[2], ("11".to_string(), 25));
    }

    #[test]
    fn test_top_k_longer_than_input() {
        let counts = counts_of(&[("0", 1)]);
        assert_eq!(top_k(&counts, 10).len(), 1);
    }

    #[test]
    fn test_entropy_worked_example() {
        // {"00": 10, "01": 90} -> H = -(0.1 log2 0.1 + 0.9 log2 0.9) ~ 0.469
        let counts = counts_of(&[("00", 10), ("01", 90)]);
        assert!((shannon_entropy(&counts) - 0.469).abs() < 1e-3);
        assert_eq!(top_k(&counts, 1), vec![("01".to_string(), 90)]);
    }

    #[test]
    fn test_entropy_zero_iff_single_key() {
        let single = counts_of(&[("0110", 1024)]);
        assert_eq!(shannon_entropy(&single), 0.0);
        let spread = counts_of(&[("00", 1), ("01", 1)]);
        assert!(shannon_entropy(&spread) > 0.0);
        // A zero-count second key contributes nothing.
        let padded = counts_of(&[("00", 50), ("01", 0)]);
        assert_eq!(shannon_entropy(&padded), 0.0);
    }

    #[test]
    fn test_certainty_bounds() {
        let single = counts_of(&[("00", 100)]);
        assert_eq!(normalized_certainty(&single), 100.0);
        // Uniform over 4 keys: entropy equals max entropy, certainty 0.
        let uniform = counts_of(&[("00", 25), ("01", 25), ("10", 25), ("11", 25)]);
        assert!(normalized_certainty(&uniform).abs() < 1e-9);
        // Peaked beats uniform.
        let peaked = counts_of(&[("00", 97), ("01", 1), ("10", 1), ("11", 1)]);
        assert!(normalized_certainty(&peaked) > normalized_certainty(&uniform));
    }

    #[test]
    fn test_selected_stats_present() {
        let positions = grid_positions(2, 2);
        // "01" reversed is "10" = 2 -> (1, 0).
        let counts = counts_of(&[("00", 10), ("01", 90)]);
        let stats = selected_stats(&counts, &positions, Position::new(1, 0));
        assert_eq!(stats.count, 90);
        assert!((stats.probability - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_selected_stats_absent_is_zero() {
        let positions = grid_positions(2, 2);
        let counts = counts_of(&[("00", 10), ("01", 90)]);
        let stats = selected_stats(&counts, &positions, Position::new(1, 1));
        assert_eq!(
            stats,
            SelectedStats {
                count: 0,
                probability: 0.0
            }
        );
    }

    #[test]
    fn test_optimal_iterations() {
        // ceil(pi/4 * sqrt(16)) = ceil(3.14) = 4
        assert_eq!(optimal_iterations(16), 4);
        // ceil(pi/4 * sqrt(36)) = ceil(4.71) = 5
        assert_eq!(optimal_iterations(36), 5);
        assert_eq!(optimal_iterations(1), 1);
        assert_eq!(optimal_iterations(0), 0);
    }

    #[test]
    fn test_argmax_position_skips_unresolvable() {
        let positions = grid_positions(2, 2);
        // "001" decodes to index 4, out of range; next best resolves.
        let counts = counts_of(&[("001", 80), ("01", 20)]);
        assert_eq!(
            argmax_position(&counts, &positions),
            Some(Position::new(1, 0))
        );
    }

    #[test]
    fn test_search_summary_bundle() {
        let positions = grid_positions(2, 2);
        let counts = counts_of(&[("00", 10), ("01", 90)]);
        let summary = search_summary(&counts, &positions).unwrap();
        assert_eq!(summary.total_shots, 100);
        assert_eq!(summary.unique_keys, 2);
        assert_eq!(summary.top_results.len(), 2);
        assert_eq!(summary.top_results[0].key, "01");
        assert_eq!(summary.top_results[0].position, Some(Position::new(1, 0)));
        assert!((summary.top_confidence_pct - 90.0).abs() < 1e-9);
        assert!((summary.top3_confidence_pct - 100.0).abs() < 1e-9);
        assert!((summary.entropy_bits - 0.469).abs() < 1e-3);
    }

    #[test]
    fn test_search_summary_empty_error() {
        let positions = grid_positions(2, 2);
        assert!(matches!(
            search_summary(&HashMap::new(), &positions),
            Err(AggregateError::EmptyCounts)
        ));
    }
}
