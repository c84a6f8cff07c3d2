//! Map generator binary — generates a tile map and writes the flat dump.
//!
//! Usage: cargo run --release --bin mapgen -- [OPTIONS]
//!
//! Options:
//!   --width <N>         Grid width in tiles (default: 120)
//!   --height <N>        Grid height in tiles (default: 67)
//!   --seed <SEED>       Random seed (default: 12345)
//!   --scale <SCALE>     Noise scale (default: 0.01)
//!   --octaves <N>       Noise octaves (default: 6)
//!   --persistence <P>   Noise persistence (default: 0.5)
//!   --out <PATH>        Output file (default: map.txt)
//!
//! Output:
//!   <out>                flat dump, one row per line, tile codes as integers
//!   <out>.manifest.json  generation parameters + per-tile counts

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use serde_json::json;

use strata::export;
use strata::generation::{GenerationConfig, GenerationPipeline};
use strata::noise::NoiseParams;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    let args: Vec<String> = std::env::args().collect();
    let width = parse_u32_arg(&args, "--width").unwrap_or(120);
    let height = parse_u32_arg(&args, "--height").unwrap_or(67);
    let seed = parse_u64_arg(&args, "--seed").unwrap_or(12345);
    let scale = parse_f64_arg(&args, "--scale").unwrap_or(0.01);
    let octaves = parse_u32_arg(&args, "--octaves").unwrap_or(6);
    let persistence = parse_f64_arg(&args, "--persistence").unwrap_or(0.5);
    let out = PathBuf::from(parse_str_arg(&args, "--out").unwrap_or_else(|| "map.txt".to_string()));

    let config = GenerationConfig {
        seed,
        width,
        height,
        noise: NoiseParams {
            scale,
            octaves,
            persistence,
        },
    };

    println!("=== Strata Map Generator ===");
    println!("Grid:  {} x {} tiles", width, height);
    println!("Seed:  {}", seed);
    println!("Noise: scale {}, {} octaves, persistence {}", scale, octaves, persistence);
    println!("Output: {}", out.display());
    println!();

    let start = Instant::now();
    let pipeline = GenerationPipeline::new(config.clone());
    let grid = pipeline.generate();

    export::write_grid(&out, &grid).expect("Failed to write map file");

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for row in grid.rows() {
        for tile in row {
            *counts.entry(tile.name()).or_insert(0) += 1;
        }
    }

    let manifest = json!({
        "config": config,
        "tiles": counts,
    });
    let manifest_path = PathBuf::from(format!("{}.manifest.json", out.display()));
    std::fs::write(
        &manifest_path,
        serde_json::to_string_pretty(&manifest).expect("Failed to serialize manifest"),
    )
    .expect("Failed to write manifest");

    println!("Tile counts:");
    for (name, count) in &counts {
        println!("  {:8} {}", name, count);
    }
    println!();
    println!(
        "Done: {} + {} in {:.1}ms",
        out.display(),
        manifest_path.display(),
        start.elapsed().as_secs_f64() * 1000.0
    );
}

fn parse_str_arg(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_u32_arg(args: &[String], name: &str) -> Option<u32> {
    parse_str_arg(args, name).and_then(|v| v.parse().ok())
}

fn parse_u64_arg(args: &[String], name: &str) -> Option<u64> {
    parse_str_arg(args, name).and_then(|v| v.parse().ok())
}

fn parse_f64_arg(args: &[String], name: &str) -> Option<f64> {
    parse_str_arg(args, name).and_then(|v| v.parse().ok())
}
