//! Plain-text summary report for one search run.
//!
//! Purely presentational: every number comes from [`crate::aggregate`], and
//! aggregator output is trusted to be finite. Colorized console rendering of
//! the grid itself lives in the CLI, next to the terminal it draws on.

use crate::aggregate::{self, SearchSummary};
use crate::config::SearchConfig;
use crate::error::AggregateError;
use crate::execution::ExecutionRecord;
use crate::position::Position;

const RULE: &str = "================================================================================";
const SUBRULE: &str =
    "--------------------------------------------------------------------------------";

fn pattern_text(pattern: &[String]) -> String {
    format!("[{}]", pattern.join(", "))
}

/// Render the full summary report.
///
/// `selected` is the highlighted position, if any; callers typically pass
/// [`ExecutionRecord::selected_or_argmax`]. Errors only when the record's
/// counts mapping is empty.
pub fn summary_report(
    config: &SearchConfig,
    record: &ExecutionRecord,
    positions: &[Position],
    selected: Option<Position>,
) -> Result<String, AggregateError> {
    let summary = aggregate::search_summary(&record.counts, positions)?;

    let mut report: Vec<String> = Vec::new();
    report.push(RULE.to_string());
    report.push(format!(
        "{:^80}",
        "QUANTUM SEARCH ALGORITHM - SUMMARY REPORT"
    ));
    report.push(RULE.to_string());
    report.push(String::new());

    report.push("SEARCH CONFIGURATION".to_string());
    report.push(SUBRULE.to_string());
    report.push(format!("  Backend: {}", record.backend));
    report.push(format!(
        "  Row Pattern: {}",
        pattern_text(&config.pattern_row)
    ));
    report.push(format!(
        "  Column Pattern: {}",
        pattern_text(&config.pattern_col)
    ));
    report.push(format!("  Grover Iterations: {}", record.iterations));
    report.push(format!("  Total Shots: {}", summary.total_shots));
    report.push(String::new());

    report.push("CIRCUIT INFORMATION".to_string());
    report.push(SUBRULE.to_string());
    report.push(format!("  Total Qubits: {}", record.circuit.num_qubits));
    report.push(format!("  Circuit Depth: {}", record.circuit.depth));
    report.push(format!("  Circuit Size: {}", record.circuit.size));
    report.push(String::new());

    report.push("SEARCH SPACE ANALYSIS".to_string());
    report.push(SUBRULE.to_string());
    report.push(format!("  Total Search Positions: {}", positions.len()));
    report.push(format!("  Search Space Size (N): {}", positions.len()));
    report.push("  Expected Solutions (M): 1".to_string());
    report.push(format!(
        "  Optimal Iterations: {}",
        aggregate::optimal_iterations(positions.len())
    ));
    report.push(format!("  Actual Iterations: {}", record.iterations));
    report.push(String::new());

    report.push("RESULTS ANALYSIS".to_string());
    report.push(SUBRULE.to_string());
    results_section(&mut report, &summary);
    report.push(String::new());

    report.push("SUCCESS METRICS".to_string());
    report.push(SUBRULE.to_string());
    report.push(format!(
        "  Top Result Confidence: {:.2}%",
        summary.top_confidence_pct
    ));
    report.push(format!(
        "  Top 3 Combined: {:.2}%",
        summary.top3_confidence_pct
    ));
    report.push(format!("  Unique Results: {}", summary.unique_keys));
    report.push(format!(
        "  Result Entropy: {:.3} bits (Normalized: {:.1}%)",
        summary.entropy_bits, summary.normalized_entropy_pct
    ));
    report.push(String::new());

    if let Some(pos) = selected {
        let stats = aggregate::selected_stats(&record.counts, positions, pos);
        report.push("SELECTED POSITION".to_string());
        report.push(SUBRULE.to_string());
        report.push(format!("  Row: {}", pos.row));
        report.push(format!("  Column: {}", pos.col));
        report.push(format!(
            "  Measurement Count: {} / {}",
            stats.count, summary.total_shots
        ));
        report.push(format!("  Probability: {:.2}%", stats.probability * 100.0));
        report.push(String::new());
    }

    report.push(RULE.to_string());
    report.push(String::new());
    Ok(report.join("\n"))
}

/// Top result and top-5 table. Unresolvable keys are silently skipped, same
/// as everywhere else.
fn results_section(report: &mut Vec<String>, summary: &SearchSummary) {
    if let Some(top) = summary.top_results.first() {
        if let Some(pos) = top.position {
            report.push(format!("  Top Result: Position ({}, {})", pos.row, pos.col));
            report.push(format!(
                "    - Count: {} / {}",
                top.count, summary.total_shots
            ));
            report.push(format!(
                "    - Probability: {:.2}%",
                top.probability * 100.0
            ));
            report.push(format!("    - Binary Index: {}", top.key));
            report.push(String::new());
        }
    }

    report.push("  Top 5 Results:".to_string());
    for (rank, entry) in summary.top_results.iter().enumerate() {
        if let Some(pos) = entry.position {
            report.push(format!(
                "    {}. Position ({}, {}): {} counts ({:.2}%)",
                rank + 1,
                pos.row,
                pos.col,
                entry.count,
                entry.probability * 100.0
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::CircuitStats;
    use crate::position::grid_positions;
    use std::collections::HashMap;

    fn sample_record() -> ExecutionRecord {
        let mut counts = HashMap::new();
        counts.insert("0000".to_string(), 100);
        counts.insert("1010".to_string(), 700);
        counts.insert("0100".to_string(), 200);
        ExecutionRecord {
            backend: "SIMULATE".to_string(),
            iterations: 3,
            circuit: CircuitStats {
                num_qubits: 9,
                depth: 150,
                size: 420,
            },
            counts,
            positions: None,
            selected: None,
            job_id: None,
        }
    }

    #[test]
    fn test_report_sections_present() {
        let config = SearchConfig::default_4x4();
        let positions = grid_positions(4, 4);
        let record = sample_record();
        let selected = record.selected_or_argmax(&positions);
        let report = summary_report(&config, &record, &positions, selected).unwrap();

        for section in [
            "SEARCH CONFIGURATION",
            "CIRCUIT INFORMATION",
            "SEARCH SPACE ANALYSIS",
            "RESULTS ANALYSIS",
            "SUCCESS METRICS",
            "SELECTED POSITION",
        ] {
            assert!(report.contains(section), "missing section {section}");
        }
        assert!(report.contains("Backend: SIMULATE"));
        assert!(report.contains("Total Shots: 1000"));
        // ceil(pi/4 * sqrt(16)) = 4
        assert!(report.contains("Optimal Iterations: 4"));
        // "1010" reversed is "0101" = 5 -> (1, 1) on a 4x4 grid.
        assert!(report.contains("Top Result: Position (1, 1)"));
        assert!(report.contains("Binary Index: 1010"));
        assert!(report.contains("Probability: 70.00%"));
    }

    #[test]
    fn test_report_without_selection_omits_block() {
        let config = SearchConfig::default_4x4();
        let positions = grid_positions(4, 4);
        let record = sample_record();
        let report = summary_report(&config, &record, &positions, None).unwrap();
        assert!(!report.contains("SELECTED POSITION"));
    }

    #[test]
    fn test_report_empty_counts_errors() {
        let config = SearchConfig::default_4x4();
        let positions = grid_positions(4, 4);
        let mut record = sample_record();
        record.counts.clear();
        assert!(matches!(
            summary_report(&config, &record, &positions, None),
            Err(AggregateError::EmptyCounts)
        ));
    }
}
