//! End-to-end tests: variation catalog -> config file -> grid -> counts ->
//! report, the way the CLI wires the pieces together.

use std::collections::HashMap;

use gridgrover_core::{
    CircuitStats, ExecutionRecord, Position, SearchConfig, grid_positions, optimal_iterations,
    search_summary, selected_stats, summary_report, validate_positions, variations,
};

fn synthetic_record(counts: &[(&str, u64)]) -> ExecutionRecord {
    ExecutionRecord {
        backend: "SIMULATE".to_string(),
        iterations: 5,
        circuit: CircuitStats {
            num_qubits: 11,
            depth: 210,
            size: 612,
        },
        counts: counts.iter().map(|&(k, v)| (k.to_string(), v)).collect(),
        positions: None,
        selected: None,
        job_id: None,
    }
}

#[test]
fn test_config_roundtrip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grover.json");

    let config = variations::variation("sparse_6x6").unwrap();
    config.save(&path).unwrap();

    let loaded = SearchConfig::load(&path).unwrap();
    assert_eq!(loaded.pattern_row, config.pattern_row);
    assert_eq!(loaded.map_rows, config.map_rows);
    assert_eq!(loaded.grid().unwrap().token_count(), 36);
}

#[test]
fn test_variation_switch_replaces_previous_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grover.json");

    variations::variation("dense_6x6").unwrap().save(&path).unwrap();
    variations::variation("checkerboard_6x6")
        .unwrap()
        .save(&path)
        .unwrap();

    let loaded = SearchConfig::load(&path).unwrap();
    assert_eq!(loaded.pattern_row, vec!["1", "0", "1"]);
    let grid = loaded.grid().unwrap();
    assert_eq!(grid.cell(0, 0), 1);
    assert_eq!(grid.cell(0, 1), 0);
}

#[test]
fn test_unknown_variation_leaves_config_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grover.json");
    variations::variation("target_6x6").unwrap().save(&path).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let err = variations::variation("foo").unwrap_err();
    let gridgrover_core::VariationError::UnknownName { known, .. } = err;
    assert_eq!(known.len(), 7);

    let after = std::fs::read_to_string(&path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_full_run_from_variation_to_report() {
    let config = variations::variation("target_6x6").unwrap();
    let grid = config.grid().unwrap();
    let positions = grid_positions(grid.height(), grid.width());
    validate_positions(&positions, grid.height(), grid.width()).unwrap();
    assert_eq!(positions.len(), 36);

    // Peak on index 14 = (2, 2), the corner of the planted 2x2 block.
    // 14 = 0b001110, written as a measurement key it reads reversed: "011100".
    let record = synthetic_record(&[("011100", 820), ("000000", 90), ("100000", 90)]);
    let selected = record.selected_or_argmax(&positions);
    assert_eq!(selected, Some(Position::new(2, 2)));

    let summary = search_summary(&record.counts, &positions).unwrap();
    assert_eq!(summary.total_shots, 1000);
    assert!((summary.top_confidence_pct - 82.0).abs() < 1e-9);

    let stats = selected_stats(&record.counts, &positions, Position::new(2, 2));
    assert_eq!(stats.count, 820);

    let report = summary_report(&config, &record, &positions, selected).unwrap();
    assert!(report.contains("Top Result: Position (2, 2)"));
    assert!(report.contains(&format!(
        "Optimal Iterations: {}",
        optimal_iterations(36)
    )));
    assert!(report.contains("Actual Iterations: 5"));
}

#[test]
fn test_unmapped_keys_are_skipped_everywhere() {
    let config = SearchConfig::default_4x4();
    let grid = config.grid().unwrap();
    let positions = grid_positions(grid.height(), grid.width());

    // "10001" decodes to 17, outside the 16-cell universe; the run still
    // reports cleanly from the remaining keys.
    let record = synthetic_record(&[("10001", 500), ("1010", 400), ("0000", 100)]);
    let selected = record.selected_or_argmax(&positions);
    assert_eq!(selected, Some(Position::new(1, 1)));

    let report = summary_report(&config, &record, &positions, selected).unwrap();
    assert!(report.contains("Total Shots: 1000"));
    assert!(!report.contains("10001"));

    let counts: HashMap<String, u64> = record.counts.clone();
    let (count_grid, prob_grid) = grid.resolved_grids(&counts, &positions);
    assert_eq!(count_grid[1][1], 400);
    let mapped: u64 = count_grid.iter().flatten().sum();
    assert_eq!(mapped, 500);
    assert!((prob_grid[1][1] - 0.4).abs() < 1e-12);
}
