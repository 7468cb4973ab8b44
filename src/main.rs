//! Maze evolution CLI - run the search from an optional JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use mazevolve::{EvolutionConfig, EvolutionEngine, Pos, draw_map};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage(&args[0]);
        return;
    }

    if args.iter().any(|a| a == "--example") {
        print_example_config();
        return;
    }

    let config: EvolutionConfig = match args.get(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            let text = fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("Error reading config file: {}", e);
                std::process::exit(1);
            });
            serde_json::from_str(&text).unwrap_or_else(|e| {
                eprintln!("Error parsing config: {}", e);
                std::process::exit(1);
            })
        }
        None => EvolutionConfig::default(),
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    }

    let size = config.maze_size;
    let start: Pos = (0, size - 1, 0);
    let goal: Pos = (size - 1, size - 4, size - 1);

    println!("Maze evolution");
    println!("==============");
    println!("Volume: {size}x{size}x{size}");
    println!(
        "Population: {} per generation, {} elites",
        config.population_size, config.elite_size
    );
    println!("Start: {start:?}  Goal: {goal:?}");
    println!();

    let began = Instant::now();
    let mut engine = EvolutionEngine::new(start, goal, config);
    let best = engine.run().unwrap_or_else(|e| {
        eprintln!("Evolution failed: {}", e);
        std::process::exit(1);
    });

    println!(
        "Best distance: {} ({} generations, {:.1}s)",
        best.distance,
        engine.generation(),
        began.elapsed().as_secs_f32()
    );
    println!();
    println!("{}", draw_map(&best.maze, start, goal));
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [config.json]", program);
    eprintln!();
    eprintln!("Evolve the most complex traversable voxel maze.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  config.json  Optional path to a run configuration file");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --example    Print the default configuration as JSON and exit");
    eprintln!("  -h, --help   Show this help");
    eprintln!();
    eprintln!("Set RUST_LOG=info for per-generation progress.");
}

fn print_example_config() {
    let config = EvolutionConfig::default();
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
