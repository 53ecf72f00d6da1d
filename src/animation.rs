// src/animation.rs

use std::path::{Path, PathBuf};

use crate::config::AnimationConfig;
use crate::data_analysis::frame_window::FrameWindows;
use crate::data_analysis::resample::resample;
use crate::data_input::log_data::SampleSeries;
use crate::data_input::log_parser::parse_gps_log;
use crate::error::AnimationResult;
use crate::output_dir::create_output_dir;
use crate::plot_framework::FrameRenderer;

const PROGRESS_EVERY_N_FRAMES: usize = 100;

/// Result of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSummary {
    pub output_dir: PathBuf,
    pub frame_count: usize,
}

/// Setup state of a run: configuration validated and plot built, nothing on disk yet.
///
/// A run moves `Animator` → [`FrameLoop`] → [`AnimationSummary`]; each step consumes
/// the previous one, so no state can be re-entered.
pub struct Animator {
    config: AnimationConfig,
    renderer: FrameRenderer,
}

impl Animator {
    pub fn new(config: AnimationConfig) -> AnimationResult<Self> {
        config.validate()?;
        let renderer = FrameRenderer::new(config.render.clone());
        Ok(Self { config, renderer })
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Creates the output directory, resets the plot, loads and resamples the log.
    pub fn setup(mut self) -> AnimationResult<FrameLoop> {
        let config = &self.config;

        let output_dir = create_output_dir(&config.output_root, &config.input_path)?;
        println!("Output directory: '{}'", output_dir.display());

        self.renderer.reset();

        println!("\n--- Loading GPS log ---");
        let samples = parse_gps_log(&config.input_path, &config.columns, config.time_scale)?;
        let series = SampleSeries::from_samples(&samples);
        println!(
            "  {} samples over {:.1} s",
            series.len(),
            series.total_time()
        );

        println!(
            "\n--- Resampling at {} fps ({} interpolation) ---",
            config.fps, config.interpolation_kind
        );
        let resampled = resample(&series, config.interpolation_kind, config.fps)?;
        let windows = FrameWindows::new(resampled, config.max_num_points());
        println!(
            "  total frames {}, window of {} points, altitude offset {:.2} m",
            windows.total_frames(),
            windows.capacity(),
            windows.y_offset()
        );

        Ok(FrameLoop {
            renderer: self.renderer,
            windows,
            output_dir,
        })
    }

    /// Runs setup and the frame loop.
    pub fn animate(self) -> AnimationResult<AnimationSummary> {
        self.setup()?.run()
    }
}

/// Looping state: renders one frame per window until the generator is exhausted.
pub struct FrameLoop {
    renderer: FrameRenderer,
    windows: FrameWindows,
    output_dir: PathBuf,
}

impl FrameLoop {
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn remaining_frames(&self) -> usize {
        self.windows.len()
    }

    pub fn run(mut self) -> AnimationResult<AnimationSummary> {
        println!("\n--- Rendering frames ---");
        let total = self.windows.total_frames();
        let mut frame_count = 0;

        while let Some(window) = self.windows.next() {
            self.renderer.render_frame(&window, &self.output_dir)?;
            frame_count += 1;
            if frame_count % PROGRESS_EVERY_N_FRAMES == 0 {
                log::info!("Rendered {}/{} frames", frame_count, total);
            }
        }

        Ok(AnimationSummary {
            output_dir: self.output_dir,
            frame_count,
        })
    }
}

/// Convenience wrapper: validate `config`, then set up and run the whole animation.
pub fn make_animation(config: AnimationConfig) -> AnimationResult<AnimationSummary> {
    Animator::new(config)?.animate()
}

// src/animation.rs
