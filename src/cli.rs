// src/cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::{AnimationConfig, FrameFormat};
use crate::constants::{
    ALTITUDE_COLUMN, DEFAULT_OUTPUT_ROOT, FPS, FRAME_DPI, FRAME_HEIGHT, FRAME_WIDTH,
    GROUNDSPEED_COLUMN, JPEG_QUALITY, MAX_WINDOW_S, TIME_COLUMN, TIME_SCALE,
};
use crate::data_analysis::interpolation::InterpolationKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "gps-log-animator", version)]
#[command(about = "Render a scrolling altitude / ground-speed animation from a GPS CSV log", long_about = None)]
pub struct Cli {
    /// GPS log (CSV, one header line)
    pub input: PathBuf,

    /// Directory that receives the numbered frame directories
    #[arg(short, long, default_value = DEFAULT_OUTPUT_ROOT)]
    pub output_root: PathBuf,

    /// Frames per second of playback
    #[arg(long, default_value_t = FPS)]
    pub fps: f64,

    /// Interpolation used to resample the log onto the frame grid
    #[arg(short, long, value_enum, default_value_t = InterpolationKind::Linear)]
    pub interpolation: InterpolationKind,

    /// Seconds of data visible at once
    #[arg(long, default_value_t = MAX_WINDOW_S)]
    pub max_window: f64,

    /// Column index of the time field
    #[arg(long, default_value_t = TIME_COLUMN)]
    pub time_column: usize,

    /// Column index of the altitude field
    #[arg(long, default_value_t = ALTITUDE_COLUMN)]
    pub altitude_column: usize,

    /// Column index of the ground speed field
    #[arg(long, default_value_t = GROUNDSPEED_COLUMN)]
    pub ground_speed_column: usize,

    /// Factor applied to the raw time field
    #[arg(long, default_value_t = TIME_SCALE)]
    pub time_scale: f64,

    /// Frame image format
    #[arg(long, value_enum, default_value_t = FrameFormat::Jpg)]
    pub format: FrameFormat,

    /// JPEG quality (1-100)
    #[arg(long, default_value_t = JPEG_QUALITY)]
    pub jpeg_quality: u8,

    /// Frame width in pixels
    #[arg(long, default_value_t = FRAME_WIDTH)]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long, default_value_t = FRAME_HEIGHT)]
    pub height: u32,

    /// Pixel density written into JPEG frames
    #[arg(long, default_value_t = FRAME_DPI)]
    pub dpi: u16,

    /// Draw axes without tick labels or titles
    #[arg(long)]
    pub no_axis_labels: bool,
}

impl From<Cli> for AnimationConfig {
    fn from(cli: Cli) -> Self {
        let mut config = AnimationConfig::new(cli.input);
        config.output_root = cli.output_root;
        config.fps = cli.fps;
        config.interpolation_kind = cli.interpolation;
        config.columns.time = cli.time_column;
        config.columns.altitude = cli.altitude_column;
        config.columns.ground_speed = cli.ground_speed_column;
        config.time_scale = cli.time_scale;
        config.render.max_window_s = cli.max_window;
        config.render.format = cli.format;
        config.render.jpeg_quality = cli.jpeg_quality;
        config.render.width = cli.width;
        config.render.height = cli.height;
        config.render.dpi = cli.dpi;
        config.render.axis_labels = !cli.no_axis_labels;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let cli = Cli::try_parse_from(["gps-log-animator", "GPS 1.csv"]).unwrap();
        let config = AnimationConfig::from(cli);
        assert_eq!(config.input_path, PathBuf::from("GPS 1.csv"));
        assert_eq!(config.output_root, PathBuf::from(DEFAULT_OUTPUT_ROOT));
        assert_eq!(config.fps, FPS);
        assert_eq!(config.interpolation_kind, InterpolationKind::Linear);
        assert_eq!(config.render.format, FrameFormat::Jpg);
        assert_eq!(config.max_num_points(), 600);
        assert!(config.render.axis_labels);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "gps-log-animator",
            "flight.csv",
            "--interpolation",
            "slinear",
            "--fps",
            "25",
            "--max-window",
            "30",
            "--format",
            "png",
            "-o",
            "/tmp/frames",
        ])
        .unwrap();
        let config = AnimationConfig::from(cli);
        assert_eq!(config.interpolation_kind, InterpolationKind::SLinear);
        assert_eq!(config.fps, 25.0);
        assert_eq!(config.max_num_points(), 750);
        assert_eq!(config.render.format, FrameFormat::Png);
        assert_eq!(config.output_root, PathBuf::from("/tmp/frames"));
    }

    #[test]
    fn test_unknown_interpolation_is_rejected() {
        let result = Cli::try_parse_from(["gps-log-animator", "a.csv", "-i", "bicubic"]);
        assert!(result.is_err());
    }
}

// src/cli.rs
