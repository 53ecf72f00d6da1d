// src/config.rs

use std::path::PathBuf;

use plotters::style::RGBColor;

use crate::constants::{
    ALTITUDE_COLUMN, COLOR_ALTITUDE, COLOR_AXIS, COLOR_BACKGROUND, COLOR_GROUNDSPEED,
    DEFAULT_OUTPUT_ROOT, FPS, FRAME_DPI, FRAME_HEIGHT, FRAME_WIDTH, GROUNDSPEED_COLUMN,
    JPEG_QUALITY, LINE_WIDTH_AXIS, LINE_WIDTH_PLOT, MAX_WINDOW_S, PLOT_PADDING_TOP, TIME_COLUMN,
    TIME_SCALE, VALUE_RANGE_LOW, X_RANGE_MARGIN_S,
};
use crate::data_analysis::interpolation::InterpolationKind;
use crate::data_input::log_data::ColumnLayout;
use crate::error::{AnimationError, AnimationResult};

/// Encoding used for every frame file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FrameFormat {
    #[default]
    #[value(alias = "jpeg")]
    Jpg,
    Png,
}

impl FrameFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            FrameFormat::Jpg => "jpg",
            FrameFormat::Png => "png",
        }
    }

    /// `image00042.jpg` style file name for frame `index`.
    pub fn file_name(&self, index: usize) -> String {
        format!("image{:05}.{}", index, self.extension())
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            time: TIME_COLUMN,
            altitude: ALTITUDE_COLUMN,
            ground_speed: GROUNDSPEED_COLUMN,
        }
    }
}

/// Everything the renderer needs to draw and encode a frame.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub dpi: u16,
    pub format: FrameFormat,
    pub jpeg_quality: u8,
    pub background: RGBColor,
    pub axis_color: RGBColor,
    pub altitude_color: RGBColor,
    pub ground_speed_color: RGBColor,
    pub line_width: u32,
    pub axis_line_width: u32,
    pub plot_padding_top: u32,
    pub axis_labels: bool,
    pub max_window_s: f64,
    pub x_range_margin: f64,
    pub value_range_low: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
            dpi: FRAME_DPI,
            format: FrameFormat::default(),
            jpeg_quality: JPEG_QUALITY,
            background: *COLOR_BACKGROUND,
            axis_color: *COLOR_AXIS,
            altitude_color: *COLOR_ALTITUDE,
            ground_speed_color: *COLOR_GROUNDSPEED,
            line_width: LINE_WIDTH_PLOT,
            axis_line_width: LINE_WIDTH_AXIS,
            plot_padding_top: PLOT_PADDING_TOP,
            axis_labels: true,
            max_window_s: MAX_WINDOW_S,
            x_range_margin: X_RANGE_MARGIN_S,
            value_range_low: VALUE_RANGE_LOW,
        }
    }
}

/// Configuration for one animation run, built once at startup.
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    pub input_path: PathBuf,
    pub output_root: PathBuf,
    pub fps: f64,
    pub interpolation_kind: InterpolationKind,
    pub columns: ColumnLayout,
    pub time_scale: f64,
    pub render: RenderConfig,
}

impl AnimationConfig {
    /// Defaults for everything except the input file.
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            fps: FPS,
            interpolation_kind: InterpolationKind::default(),
            columns: ColumnLayout::default(),
            time_scale: TIME_SCALE,
            render: RenderConfig::default(),
        }
    }

    pub fn max_window_s(&self) -> f64 {
        self.render.max_window_s
    }

    /// Capacity of the scrolling window: the visible duration at the frame rate.
    pub fn max_num_points(&self) -> usize {
        let n = (self.render.max_window_s * self.fps).round();
        if n.is_finite() && n >= 1.0 {
            n as usize
        } else {
            1
        }
    }

    pub fn validate(&self) -> AnimationResult<()> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(AnimationError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )))
            }
        };
        positive("fps", self.fps)?;
        positive("max window", self.render.max_window_s)?;
        positive("time scale", self.time_scale)?;
        if !self.render.x_range_margin.is_finite() || !self.render.value_range_low.is_finite() {
            return Err(AnimationError::InvalidConfig(
                "axis ranges must be finite".to_string(),
            ));
        }

        let ColumnLayout {
            time,
            altitude,
            ground_speed,
        } = self.columns;
        if time == altitude || time == ground_speed || altitude == ground_speed {
            return Err(AnimationError::InvalidConfig(format!(
                "time, altitude and ground speed columns must differ (got {time}, {altitude}, {ground_speed})"
            )));
        }

        let render = &self.render;
        if render.width == 0 || render.height == 0 {
            return Err(AnimationError::InvalidConfig(format!(
                "frame size must be non-zero, got {}x{}",
                render.width, render.height
            )));
        }
        if render.plot_padding_top >= render.height {
            return Err(AnimationError::InvalidConfig(format!(
                "plot padding {} leaves no room in a {} px tall frame",
                render.plot_padding_top, render.height
            )));
        }
        if !(1..=100).contains(&render.jpeg_quality) {
            return Err(AnimationError::InvalidConfig(format!(
                "JPEG quality must be within 1..=100, got {}",
                render.jpeg_quality
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnimationConfig::new("GPS 1.csv");
        assert!(config.validate().is_ok());
        assert_eq!(config.max_num_points(), 600);
        assert_eq!(config.max_window_s(), 60.0);
        assert_eq!(config.render.width, 900);
        assert_eq!(config.render.height, 506);
        assert_eq!(config.columns.time, 2);
        assert_eq!(config.columns.altitude, 5);
        assert_eq!(config.columns.ground_speed, 6);
        assert_eq!(config.time_scale, 3.0);
        assert_eq!(config.interpolation_kind, InterpolationKind::Linear);
    }

    #[test]
    fn test_frame_file_names() {
        assert_eq!(FrameFormat::Jpg.file_name(0), "image00000.jpg");
        assert_eq!(FrameFormat::Jpg.file_name(599), "image00599.jpg");
        assert_eq!(FrameFormat::Png.file_name(12345), "image12345.png");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = AnimationConfig::new("log.csv");
        config.fps = 0.0;
        assert!(config.validate().is_err());

        let mut config = AnimationConfig::new("log.csv");
        config.render.max_window_s = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = AnimationConfig::new("log.csv");
        config.columns.ground_speed = config.columns.altitude;
        assert!(config.validate().is_err());

        let mut config = AnimationConfig::new("log.csv");
        config.render.jpeg_quality = 0;
        assert!(config.validate().is_err());

        let mut config = AnimationConfig::new("log.csv");
        config.render.plot_padding_top = config.render.height;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_window_capacity_never_zero() {
        let mut config = AnimationConfig::new("log.csv");
        config.fps = 0.01;
        config.render.max_window_s = 1.0;
        assert_eq!(config.max_num_points(), 1);
    }
}

// src/config.rs
