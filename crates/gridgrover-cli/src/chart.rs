//! Six-panel analysis figure for one search run.
//!
//! Panels: measurement histogram, top-5 probability shares, circuit
//! statistics, probability heatmap over the grid, performance metrics, and
//! the annotated grid map with the found cell marked. All numbers come from
//! `gridgrover_core::aggregate`; this module only draws them.

use std::error::Error;

use plotters::coord::Shift;
use plotters::prelude::*;

use gridgrover_core::{
    ExecutionRecord, Grid, Position, SearchConfig, aggregate, resolve, total_shots,
};

type Panel<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

const BAR_GRAY: RGBColor = RGBColor(149, 165, 166);
const HIGHLIGHT: RGBColor = RGBColor(0, 160, 220);

pub fn render_figure(
    config: &SearchConfig,
    record: &ExecutionRecord,
    grid: &Grid,
    positions: &[Position],
    selected: Option<Position>,
    out_path: &str,
) -> Result<(), Box<dyn Error>> {
    let summary = aggregate::search_summary(&record.counts, positions)?;

    let root = BitMapBackend::new(out_path, (1600, 1000)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        "Grover Algorithm: Comprehensive Search Analysis",
        ("sans-serif", 30),
    )?;
    let panels = root.split_evenly((2, 3));

    draw_histogram(&panels[0], record, positions)?;
    draw_probability_shares(&panels[1], &summary)?;
    draw_circuit_stats(&panels[2], record)?;
    draw_heatmap(&panels[3], grid, record, positions, selected)?;
    draw_metrics(&panels[4], record, &summary)?;
    draw_map(&panels[5], config, grid, selected)?;

    root.present()?;
    Ok(())
}

/// Bar chart of the top (at most 15) results that resolve to a grid cell.
fn draw_histogram(
    area: &Panel<'_>,
    record: &ExecutionRecord,
    positions: &[Position],
) -> Result<(), Box<dyn Error>> {
    let total = total_shots(&record.counts);
    let mut labels = Vec::new();
    let mut values = Vec::new();
    for (key, count) in aggregate::top_k(&record.counts, 15) {
        if let Some(pos) = resolve(&key, positions) {
            labels.push(format!("({},{})", pos.row, pos.col));
            values.push(count as f64);
        }
    }

    let y_max = values.iter().cloned().fold(1.0f64, f64::max) * 1.1;
    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("Measurement Results (total shots: {total})"),
            ("sans-serif", 18),
        )
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(0f64..values.len().max(1) as f64, 0f64..y_max)?;

    let tick_labels = labels.clone();
    chart
        .configure_mesh()
        .x_desc("Position (row, col)")
        .y_desc("Measurement count")
        .x_labels(labels.len().max(1))
        .x_label_formatter(&move |x| {
            tick_labels
                .get(x.floor() as usize)
                .cloned()
                .unwrap_or_default()
        })
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
        let color = match i {
            0 => GREEN,
            1 | 2 => BLUE,
            _ => BAR_GRAY,
        };
        Rectangle::new([(i as f64 + 0.1, 0.0), (i as f64 + 0.9, v)], color.filled())
    }))?;
    Ok(())
}

/// Top-5 probability shares plus an "others" remainder, in percent.
fn draw_probability_shares(
    area: &Panel<'_>,
    summary: &aggregate::SearchSummary,
) -> Result<(), Box<dyn Error>> {
    let mut labels = Vec::new();
    let mut shares = Vec::new();
    for entry in &summary.top_results {
        let label = match entry.position {
            Some(pos) => format!("({},{})", pos.row, pos.col),
            None => entry.key.clone(),
        };
        labels.push(label);
        shares.push(entry.probability * 100.0);
    }
    let accounted: f64 = shares.iter().sum();
    if accounted < 100.0 - 1e-9 {
        labels.push("others".to_string());
        shares.push(100.0 - accounted);
    }

    let mut chart = ChartBuilder::on(area)
        .caption("Probability Distribution (top 5)", ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(0f64..shares.len().max(1) as f64, 0f64..100f64)?;

    let tick_labels = labels.clone();
    chart
        .configure_mesh()
        .x_desc("Result")
        .y_desc("Share of shots (%)")
        .x_labels(labels.len().max(1))
        .x_label_formatter(&move |x| {
            tick_labels
                .get(x.floor() as usize)
                .cloned()
                .unwrap_or_default()
        })
        .draw()?;

    chart.draw_series(shares.iter().enumerate().map(|(i, &pct)| {
        let color = if i == 0 { RED } else { HIGHLIGHT };
        Rectangle::new(
            [(i as f64 + 0.1, 0.0), (i as f64 + 0.9, pct)],
            color.filled(),
        )
    }))?;
    Ok(())
}

/// Qubits, depth, size, and iteration count of the executed circuit.
fn draw_circuit_stats(area: &Panel<'_>, record: &ExecutionRecord) -> Result<(), Box<dyn Error>> {
    let stats = [
        ("Qubits", record.circuit.num_qubits as f64),
        ("Depth", record.circuit.depth as f64),
        ("Size", record.circuit.size as f64),
        ("Iterations", record.iterations as f64),
    ];
    let y_max = stats.iter().map(|(_, v)| *v).fold(1.0f64, f64::max) * 1.15;

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("Circuit Statistics (backend: {})", record.backend),
            ("sans-serif", 18),
        )
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(0f64..stats.len() as f64, 0f64..y_max)?;

    chart
        .configure_mesh()
        .y_desc("Value")
        .x_labels(stats.len())
        .x_label_formatter(&|x| {
            stats
                .get(x.floor() as usize)
                .map(|(name, _)| name.to_string())
                .unwrap_or_default()
        })
        .draw()?;

    let colors = [RED, BLUE, GREEN, RGBColor(243, 156, 18)];
    chart.draw_series(stats.iter().enumerate().map(|(i, &(_, v))| {
        Rectangle::new(
            [(i as f64 + 0.1, 0.0), (i as f64 + 0.9, v)],
            colors[i % colors.len()].filled(),
        )
    }))?;
    Ok(())
}

/// Shot-probability heatmap over the grid, selected cell outlined.
fn draw_heatmap(
    area: &Panel<'_>,
    grid: &Grid,
    record: &ExecutionRecord,
    positions: &[Position],
    selected: Option<Position>,
) -> Result<(), Box<dyn Error>> {
    let (_, prob_grid) = grid.resolved_grids(&record.counts, positions);
    let max_prob = prob_grid
        .iter()
        .flatten()
        .cloned()
        .fold(0.0f64, f64::max)
        .max(1e-9);
    let height = grid.height();
    let width = grid.width();

    let mut chart = ChartBuilder::on(area)
        .caption("Search Space Heatmap (probability %)", ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(0f64..width as f64, 0f64..height as f64)?;

    chart
        .configure_mesh()
        .x_desc("Column")
        .y_desc("Row")
        .x_labels(width)
        .y_labels(height)
        .x_label_formatter(&|x| format!("{}", x.floor() as usize))
        .y_label_formatter(&move |y| {
            // Row 0 is drawn at the top.
            let row = height as f64 - y.ceil();
            format!("{}", row.max(0.0) as usize)
        })
        .draw()?;

    chart.draw_series((0..height).flat_map(|row| {
        let prob_row = prob_grid[row].clone();
        (0..width).map(move |col| {
            let t = prob_row[col] / max_prob;
            let shade = RGBColor(
                255,
                (235.0 - 180.0 * t) as u8,
                (200.0 - 180.0 * t) as u8,
            );
            let y = (height - 1 - row) as f64;
            Rectangle::new(
                [(col as f64, y), (col as f64 + 1.0, y + 1.0)],
                shade.filled(),
            )
        })
    }))?;

    if let Some(pos) = selected {
        if pos.row < height && pos.col < width {
            let y = (height - 1 - pos.row) as f64;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(pos.col as f64, y), (pos.col as f64 + 1.0, y + 1.0)],
                HIGHLIGHT.stroke_width(3),
            )))?;
        }
    }
    Ok(())
}

/// Success rate, top-result share, confidence, and certainty, in percent.
fn draw_metrics(
    area: &Panel<'_>,
    record: &ExecutionRecord,
    summary: &aggregate::SearchSummary,
) -> Result<(), Box<dyn Error>> {
    let metrics = [
        ("Success Rate", summary.top_confidence_pct),
        ("Top Result", summary.top_confidence_pct),
        ("Top 3", summary.top3_confidence_pct),
        ("Certainty", summary.certainty_pct),
    ];

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("Performance Metrics (iterations: {})", record.iterations),
            ("sans-serif", 18),
        )
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(0f64..metrics.len() as f64, 0f64..105f64)?;

    chart
        .configure_mesh()
        .y_desc("Percentage (%)")
        .x_labels(metrics.len())
        .x_label_formatter(&|x| {
            metrics
                .get(x.floor() as usize)
                .map(|(name, _)| name.to_string())
                .unwrap_or_default()
        })
        .draw()?;

    let colors = [
        RGBColor(39, 174, 96),
        RGBColor(41, 128, 185),
        RGBColor(142, 68, 173),
        RGBColor(230, 126, 34),
    ];
    chart.draw_series(metrics.iter().enumerate().map(|(i, &(_, v))| {
        Rectangle::new(
            [(i as f64 + 0.1, 0.0), (i as f64 + 0.9, v.clamp(0.0, 105.0))],
            colors[i % colors.len()].filled(),
        )
    }))?;
    Ok(())
}

/// The grid itself: green cells for 1, pale cells for 0, cell values printed,
/// selected cell outlined, pattern annotation in the caption.
fn draw_map(
    area: &Panel<'_>,
    config: &SearchConfig,
    grid: &Grid,
    selected: Option<Position>,
) -> Result<(), Box<dyn Error>> {
    let height = grid.height();
    let width = grid.width();

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!(
                "Search Grid (row {:?} / col {:?})",
                config.pattern_row, config.pattern_col
            ),
            ("sans-serif", 18),
        )
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(0f64..width as f64, 0f64..height as f64)?;

    chart
        .configure_mesh()
        .x_desc("Column")
        .y_desc("Row")
        .x_labels(width)
        .y_labels(height)
        .x_label_formatter(&|x| format!("{}", x.floor() as usize))
        .y_label_formatter(&move |y| {
            let row = height as f64 - y.ceil();
            format!("{}", row.max(0.0) as usize)
        })
        .draw()?;

    for row in 0..height {
        for col in 0..width {
            let value = grid.cell(row, col);
            let fill = if value > 0 {
                RGBColor(120, 200, 120)
            } else {
                RGBColor(245, 200, 190)
            };
            let y = (height - 1 - row) as f64;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(col as f64 + 0.02, y + 0.02), (col as f64 + 0.98, y + 0.98)],
                fill.filled(),
            )))?;
            chart.draw_series(std::iter::once(Text::new(
                format!("{value}"),
                (col as f64 + 0.45, y + 0.45),
                ("sans-serif", 16),
            )))?;
        }
    }

    if let Some(pos) = selected {
        if pos.row < height && pos.col < width {
            let y = (height - 1 - pos.row) as f64;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(pos.col as f64, y), (pos.col as f64 + 1.0, y + 1.0)],
                HIGHLIGHT.stroke_width(4),
            )))?;
        }
    }
    Ok(())
}
