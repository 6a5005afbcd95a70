use gridgrover_core::summary_report;

pub fn run(results: &str, config_path: &str, output_path: Option<&str>) {
    let config = super::load_config(config_path);
    let grid = super::load_grid(&config);
    let record = super::load_record(results);
    let positions = super::resolve_positions(&grid, &record);
    let selected = record.selected_or_argmax(&positions);

    let report = match summary_report(&config, &record, &positions, selected) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Cannot build report: {e}");
            std::process::exit(1);
        }
    };

    print!("{report}");

    if let Some(path) = output_path {
        if let Err(e) = std::fs::write(path, &report) {
            eprintln!("Failed to write report to {path}: {e}");
            std::process::exit(1);
        }
        println!("Report written to {path}");
    }
}
