pub fn run(results: &str, config_path: &str, output_path: &str) {
    let config = super::load_config(config_path);
    let grid = super::load_grid(&config);
    let record = super::load_record(results);
    let positions = super::resolve_positions(&grid, &record);
    let selected = record.selected_or_argmax(&positions);

    if let Err(e) = crate::chart::render_figure(
        &config,
        &record,
        &grid,
        &positions,
        selected,
        output_path,
    ) {
        eprintln!("Failed to render chart: {e}");
        std::process::exit(1);
    }
    println!("Analysis figure written to {output_path}");
}
