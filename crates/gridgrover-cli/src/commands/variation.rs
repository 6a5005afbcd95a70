use gridgrover_core::variations;

pub fn run(name: Option<&str>, config_path: &str) {
    let Some(name) = name else {
        list_catalog();
        std::process::exit(1);
    };

    let config = match variations::variation(name) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.save(config_path) {
        eprintln!("Failed to write {config_path}: {e}");
        std::process::exit(1);
    }

    println!("✓ Successfully updated {config_path} with variation: {name}");
    println!("  Pattern row: [{}]", config.pattern_row.join(", "));
    println!("  Pattern col: [{}]", config.pattern_col.join(", "));
    if let Ok(grid) = config.grid() {
        println!("  Map size: {}x{}", grid.height(), grid.width());
    }
    println!("\nYou can now run: gridgrover report <results.json>");
}

fn list_catalog() {
    println!("Available variations:");
    for name in variations::names() {
        let detail = variations::describe(name).unwrap_or_default();
        println!("  - {name}: {detail}");
    }
}
