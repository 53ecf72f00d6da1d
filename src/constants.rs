// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::ORANGE;
use plotters::style::colors::{BLACK, BLUE, GREEN};
use plotters::style::RGBColor;

// Frame dimensions (16:9 at 900 px wide).
pub const FRAME_WIDTH: u32 = 900;
pub const FRAME_HEIGHT: u32 = FRAME_WIDTH * 9 / 16;
pub const FRAME_DPI: u16 = 150;
pub const JPEG_QUALITY: u8 = 75;

// Playback.
pub const FPS: f64 = 10.0;
pub const MAX_WINDOW_S: f64 = 60.0; // Visible trailing duration in seconds

// Raw log layout. The time column is multiplied by TIME_SCALE on load.
pub const TIME_COLUMN: usize = 2;
pub const ALTITUDE_COLUMN: usize = 5;
pub const GROUNDSPEED_COLUMN: usize = 6;
pub const TIME_SCALE: f64 = 3.0;

pub const DEFAULT_OUTPUT_ROOT: &str = "log_animations";

// Axis ranges.
pub const X_RANGE_MARGIN_S: f64 = 5.0; // Space kept right of the newest sample
pub const VALUE_RANGE_LOW: f64 = -0.5;

// Layout.
pub const PLOT_PADDING_TOP: u32 = 300;
pub const PLOT_MARGIN: i32 = 10;
pub const X_LABEL_AREA_SIZE: i32 = 50;
pub const Y_LABEL_AREA_SIZE: i32 = 60;

// --- Plot Color Assignments ---
pub const COLOR_BACKGROUND: &RGBColor = &GREEN;
pub const COLOR_AXIS: &RGBColor = &BLACK;
pub const COLOR_ALTITUDE: &RGBColor = &ORANGE;
pub const COLOR_GROUNDSPEED: &RGBColor = &BLUE;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 6;
pub const LINE_WIDTH_AXIS: u32 = 4;

// Font sizes
pub const FONT_SIZE_AXIS_TITLE: i32 = 18;
pub const FONT_SIZE_TICK_LABEL: i32 = 14;

// Axis titles
pub const X_AXIS_TITLE: &str = "Time (s)";
pub const Y_AXIS_TITLE: &str = "Altitude (m)  Ground Speed (m/s)";

// src/constants.rs
