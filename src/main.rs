// src/main.rs

use std::error::Error;

use clap::Parser;

use gps_log_animator::cli::Cli;
use gps_log_animator::{crate_version, make_animation, AnimationConfig};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- Argument Parsing ---
    let cli = Cli::parse();
    let config = AnimationConfig::from(cli);

    println!("gps-log-animator v{}", crate_version());
    println!("Input file: '{}'", config.input_path.display());

    let summary = make_animation(config)?;

    println!(
        "\noutput finished {} ('{}')",
        summary.frame_count,
        summary.output_dir.display()
    );
    Ok(())
}
