// src/data_analysis/resample.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::data_analysis::interpolation::{Interp1d, InterpolationKind};
use crate::data_input::log_data::SampleSeries;
use crate::error::AnimationResult;

/// Altitude and ground speed evaluated on a uniform time grid, one point per frame.
#[derive(Debug, Clone, Default)]
pub struct ResampledSeries {
    pub time: Array1<f64>,
    pub altitude: Array1<f64>,
    pub ground_speed: Array1<f64>,
}

impl ResampledSeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Lowest resampled altitude; subtracting it puts the displayed baseline at zero.
    /// NaN entries are skipped; 0 when no altitude is a number.
    pub fn altitude_offset(&self) -> f64 {
        let min = *self.altitude.min_skipnan();
        if min.is_finite() {
            min
        } else {
            0.0
        }
    }

    /// Grid spacing in seconds, `None` with fewer than two points.
    pub fn spacing(&self) -> Option<f64> {
        match self.len() {
            0 | 1 => None,
            n => Some((self.time[n - 1] - self.time[0]) / (n - 1) as f64),
        }
    }
}

/// Number of grid points for `total_time` seconds played at `fps`.
pub fn frame_count(total_time: f64, fps: f64) -> usize {
    let n = (total_time * fps).round();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// `n` evenly spaced points from `start` to `end`, both endpoints included exactly.
pub fn uniform_grid(start: f64, end: f64, n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from(vec![start]),
        _ => {
            let mut grid = Array1::linspace(start, end, n);
            // linspace accumulates rounding error at the far end
            grid[n - 1] = end;
            grid
        }
    }
}

/// Fits altitude(time) and ground_speed(time) with `kind` and evaluates both on the
/// frame grid.
pub fn resample(
    series: &SampleSeries,
    kind: InterpolationKind,
    fps: f64,
) -> AnimationResult<ResampledSeries> {
    let times = series.time.to_vec();
    let altitude = series.altitude.to_vec();
    let ground_speed = series.ground_speed.to_vec();

    let f_altitude = Interp1d::new(&times, &altitude, kind)?;
    let f_ground_speed = Interp1d::new(&times, &ground_speed, kind)?;

    let (t_min, t_max) = f_altitude.bounds();
    let total_time = t_max - t_min;
    let n = frame_count(total_time, fps);
    log::info!(
        "total frames {}. total_time={}, fps={}",
        n,
        total_time,
        fps
    );

    let time = uniform_grid(t_min, t_max, n);
    let altitude = f_altitude.eval_array(&time)?;
    let ground_speed = f_ground_speed.eval_array(&time)?;

    Ok(ResampledSeries {
        time,
        altitude,
        ground_speed,
    })
}


// src/data_analysis/resample.rs
