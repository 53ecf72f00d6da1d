// src/plot_framework.rs

use image::codecs::jpeg::{JpegEncoder, PixelDensity};
use image::{ImageBuffer, ImageFormat, Rgb};
use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::drawing::IntoDrawingArea;
use plotters::series::LineSeries;
use plotters::style::colors::TRANSPARENT;
use plotters::style::Color;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::config::{FrameFormat, RenderConfig};
use crate::constants::{
    PLOT_MARGIN, X_AXIS_TITLE, X_LABEL_AREA_SIZE, Y_AXIS_TITLE, Y_LABEL_AREA_SIZE,
};
use crate::data_analysis::frame_window::FrameWindow;
use crate::error::{AnimationError, AnimationResult};
use crate::font_config::{FONT_TUPLE_AXIS_TITLE, FONT_TUPLE_TICK_LABEL};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// The three named data series shown by the plot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotData {
    pub time: Vec<f64>,
    pub altitude: Vec<f64>,
    pub ground_speed: Vec<f64>,
}

impl PlotData {
    pub fn clear(&mut self) {
        self.time.clear();
        self.altitude.clear();
        self.ground_speed.clear();
    }

    /// Replaces all three series with the window contents.
    pub fn replace(&mut self, window: &FrameWindow) {
        self.time = window.times();
        self.altitude = window.altitudes();
        self.ground_speed = window.ground_speeds();
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    fn value_max(&self) -> Option<f64> {
        self.altitude
            .iter()
            .chain(self.ground_speed.iter())
            .copied()
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
    }
}

/// Visible data ranges for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
}

/// Draws frames of the scrolling altitude / ground-speed plot and writes them to disk.
///
/// The renderer keeps one RGB buffer for the whole run; every frame is drawn into it
/// and then encoded.
pub struct FrameRenderer {
    config: RenderConfig,
    data: PlotData,
    index_high: f64,
    buffer: Vec<u8>,
}

impl FrameRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let buffer = vec![0u8; config.width as usize * config.height as usize * 3];
        let index_high = config.max_window_s + config.x_range_margin;
        Self {
            config,
            data: PlotData::default(),
            index_high,
            buffer,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn data(&self) -> &PlotData {
        &self.data
    }

    /// Empties the plot data and restores the initial time axis.
    pub fn reset(&mut self) {
        self.data.clear();
        self.index_high = self.config.max_window_s + self.config.x_range_margin;
    }

    /// Pushes a window into the plot. Once playback passes the visible duration the
    /// time axis follows the newest sample.
    pub fn update(&mut self, window: &FrameWindow) {
        self.data.replace(window);
        if let Some(newest) = window.newest() {
            if newest.time > self.config.max_window_s {
                self.index_high = newest.time + self.config.x_range_margin;
            }
        }
    }

    pub fn layout(&self) -> ChartLayout {
        let x_low = self.data.time.first().copied().unwrap_or(0.0);
        let x_high = if self.index_high > x_low {
            self.index_high
        } else {
            x_low + self.config.x_range_margin.max(1.0)
        };

        let y_low = self.config.value_range_low;
        let y_high = match self.data.value_max() {
            Some(max) if max > y_low => calculate_range(y_low, max).1,
            _ => y_low + 1.0,
        };

        ChartLayout {
            x_range: x_low..x_high,
            y_range: y_low..y_high,
        }
    }

    /// Draws the current plot state into the in-memory RGB buffer.
    pub fn rasterize(&mut self) -> AnimationResult<&[u8]> {
        let layout = self.layout();
        let config = &self.config;
        let data = &self.data;
        {
            let root = BitMapBackend::with_buffer(&mut self.buffer, (config.width, config.height))
                .into_drawing_area();
            root.fill(&config.background)?;
            let plot_area = root.margin(config.plot_padding_top as i32, 0, 0, 0);

            let mut chart = ChartBuilder::on(&plot_area)
                .margin(PLOT_MARGIN)
                .x_label_area_size(X_LABEL_AREA_SIZE)
                .y_label_area_size(Y_LABEL_AREA_SIZE)
                .build_cartesian_2d(layout.x_range.clone(), layout.y_range.clone())?;

            let mut mesh = chart.configure_mesh();
            mesh.disable_x_mesh()
                .bold_line_style(config.axis_color.mix(0.2))
                .light_line_style(TRANSPARENT)
                .axis_style(config.axis_color.stroke_width(config.axis_line_width));
            if config.axis_labels {
                mesh.x_desc(X_AXIS_TITLE)
                    .y_desc(Y_AXIS_TITLE)
                    .axis_desc_style(FONT_TUPLE_AXIS_TITLE)
                    .label_style(FONT_TUPLE_TICK_LABEL)
                    .x_labels(8)
                    .y_labels(4);
            } else {
                mesh.x_labels(0).y_labels(0);
            }
            mesh.draw()?;

            chart.draw_series(LineSeries::new(
                data.time.iter().copied().zip(data.altitude.iter().copied()),
                config.altitude_color.stroke_width(config.line_width),
            ))?;
            chart.draw_series(LineSeries::new(
                data.time.iter().copied().zip(data.ground_speed.iter().copied()),
                config.ground_speed_color.stroke_width(config.line_width),
            ))?;

            root.present()?;
        }
        Ok(&self.buffer)
    }

    /// Encodes the last rasterized buffer to `path`.
    pub fn save_frame(&self, path: &Path) -> AnimationResult<()> {
        let (width, height) = (self.config.width, self.config.height);
        let image = ImageBuffer::<Rgb<u8>, &[u8]>::from_raw(width, height, self.buffer.as_slice())
            .ok_or_else(|| {
                AnimationError::Render(format!("frame buffer does not hold {width}x{height} pixels"))
            })?;

        let file = File::create(path).map_err(|e| AnimationError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        match self.config.format {
            FrameFormat::Jpg => {
                let mut encoder = JpegEncoder::new_with_quality(&mut writer, self.config.jpeg_quality);
                encoder.set_pixel_density(PixelDensity::dpi(self.config.dpi));
                encoder.encode_image(&image)?;
            }
            FrameFormat::Png => image.write_to(&mut writer, ImageFormat::Png)?,
        }
        writer.flush().map_err(|e| AnimationError::io(path, e))?;
        Ok(())
    }

    /// Update, rasterize and save one window as `image%05d.<ext>` inside `output_dir`.
    pub fn render_frame(&mut self, window: &FrameWindow, output_dir: &Path) -> AnimationResult<PathBuf> {
        self.update(window);
        self.rasterize()?;
        let path = output_dir.join(self.config.format.file_name(window.index));
        self.save_frame(&path)?;
        log::debug!("Frame {} saved as '{}'", window.index, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::frame_window::WindowPoint;

    fn window(index: usize, points: &[(f64, f64, f64)]) -> FrameWindow {
        FrameWindow {
            index,
            points: points
                .iter()
                .map(|&(time, altitude, ground_speed)| WindowPoint {
                    time,
                    altitude,
                    ground_speed,
                })
                .collect(),
        }
    }

    #[test]
    fn test_calculate_range_pads() {
        assert_eq!(calculate_range(0.0, 10.0), (-1.5, 11.5));
        assert_eq!(calculate_range(3.0, 3.0), (2.5, 3.5));
        assert_eq!(calculate_range(10.0, 0.0), (-1.5, 11.5));
    }

    #[test]
    fn test_update_replaces_series() {
        let mut renderer = FrameRenderer::new(RenderConfig::default());
        renderer.update(&window(0, &[(0.0, 0.0, 5.0)]));
        renderer.update(&window(1, &[(0.0, 0.0, 5.0), (0.1, 1.0, 5.5)]));
        assert_eq!(renderer.data().time, vec![0.0, 0.1]);
        assert_eq!(renderer.data().altitude, vec![0.0, 1.0]);
        assert_eq!(renderer.data().ground_speed, vec![5.0, 5.5]);

        renderer.reset();
        assert!(renderer.data().is_empty());
    }

    #[test]
    fn test_time_axis_follows_newest_sample_after_window() {
        let mut renderer = FrameRenderer::new(RenderConfig::default());
        assert_eq!(renderer.config().max_window_s, 60.0);
        renderer.update(&window(0, &[(0.0, 0.0, 1.0), (30.0, 4.0, 2.0)]));
        assert_eq!(renderer.layout().x_range, 0.0..65.0);

        renderer.update(&window(1, &[(12.0, 0.0, 1.0), (72.0, 4.0, 2.0)]));
        assert_eq!(renderer.layout().x_range, 12.0..77.0);

        renderer.reset();
        assert_eq!(renderer.layout().x_range, 0.0..65.0);
    }

    #[test]
    fn test_value_range_starts_below_zero() {
        let mut renderer = FrameRenderer::new(RenderConfig::default());
        assert_eq!(renderer.layout().y_range, -0.5..0.5);

        renderer.update(&window(0, &[(0.0, 0.0, 5.0), (1.0, 9.5, 6.0)]));
        let y = renderer.layout().y_range;
        assert_eq!(y.start, -0.5);
        assert!((y.end - 11.0).abs() < 1e-9);
    }
}

// src/plot_framework.rs
