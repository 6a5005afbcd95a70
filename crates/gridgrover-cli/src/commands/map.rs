//! Terminal rendering of the search grid.
//!
//! The selected row and column are tinted, the selected cell is drawn in
//! reverse video, and a statistics footer summarizes how the measurement
//! counts landed on the highlighted cell.

use crossterm::style::Stylize;
use gridgrover_core::{ExecutionRecord, Grid, Position, selected_stats, total_shots};

pub fn run(results: Option<&str>, config_path: &str) {
    let config = super::load_config(config_path);
    let grid = super::load_grid(&config);

    let run_data = results.map(|path| {
        let record = super::load_record(path);
        let positions = super::resolve_positions(&grid, &record);
        let selected = record.selected_or_argmax(&positions);
        (record, positions, selected)
    });

    let selected = run_data.as_ref().and_then(|(_, _, s)| *s);
    print!("{}", render_grid(&grid, selected));

    if let Some((record, positions, Some(pos))) = &run_data {
        print_stats(record, positions, *pos);
    }
    println!("{}", "=".repeat(80));
}

fn render_grid(grid: &Grid, selected: Option<Position>) -> String {
    let byte_size = grid.byte_size();
    let mut out = String::new();

    out.push_str(&"=".repeat(80));
    out.push('\n');
    out.push_str(&format!(
        "{}\n",
        format!("{:^80}", "QUANTUM SEARCH GRID VISUALIZATION")
            .cyan()
            .bold()
    ));
    out.push_str(&"=".repeat(80));
    out.push('\n');

    // Column index header.
    let mut header = String::from("     ");
    for col in 0..grid.width() {
        let item = format!("{col:>width$}", width = byte_size + 1);
        if selected.map(|s| s.col) == Some(col) {
            header.push_str(&format!("{}", item.red().bold().underlined()));
        } else {
            header.push_str(&item);
        }
    }
    out.push_str(&header);
    out.push('\n');

    let bar = "─".repeat((byte_size + 1) * grid.width() + 1);
    out.push_str(&format!("     {bar}\n"));

    for row in 0..grid.height() {
        let mut line = String::new();
        for col in 0..grid.width() {
            let item = grid.cell_str(row, col).to_string();
            let styled = match selected {
                Some(s) if s.row == row && s.col == col => {
                    format!("{}", item.red().bold().reverse())
                }
                Some(s) if s.row == row || s.col == col => {
                    format!("{}", item.yellow().bold())
                }
                _ => item,
            };
            line.push_str(&styled);
            line.push(' ');
        }
        let label = if selected.map(|s| s.row) == Some(row) {
            format!("{}", format!("{row:3}").cyan().bold())
        } else {
            format!("{row:3}")
        };
        out.push_str(&format!("{label} │ {line}│\n"));
    }
    out.push_str(&format!("     {bar}\n"));
    out
}

fn print_stats(record: &ExecutionRecord, positions: &[Position], pos: Position) {
    let total = total_shots(&record.counts);
    let stats = selected_stats(&record.counts, positions, pos);
    println!("\n{}", "Search Statistics:".green().bold());
    println!("  • Selected Position: ({}, {})", pos.row, pos.col);
    println!("  • Measurement Count: {} / {}", stats.count, total);
    println!("  • Probability: {:.2}%", stats.probability * 100.0);
    println!("  • Total Search Positions: {}", positions.len());
}
