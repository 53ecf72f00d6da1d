// src/data_input/log_data.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;

/// One parsed row of the GPS log.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GpsSample {
    pub time_sec: f64,     // Timestamp after time scaling.
    pub altitude_m: f64,   // Altitude (m).
    pub ground_speed: f64, // Ground speed (m/s).
}

/// Column positions of the fields read from each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub time: usize,
    pub altitude: usize,
    pub ground_speed: usize,
}

/// The log split into three equal-length arrays, in file order.
#[derive(Debug, Clone, Default)]
pub struct SampleSeries {
    pub time: Array1<f64>,
    pub altitude: Array1<f64>,
    pub ground_speed: Array1<f64>,
}

impl SampleSeries {
    pub fn from_samples(samples: &[GpsSample]) -> Self {
        Self {
            time: samples.iter().map(|s| s.time_sec).collect(),
            altitude: samples.iter().map(|s| s.altitude_m).collect(),
            ground_speed: samples.iter().map(|s| s.ground_speed).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Earliest and latest sample time, `None` for an empty log.
    pub fn time_bounds(&self) -> Option<(f64, f64)> {
        match (self.time.min(), self.time.max()) {
            (Ok(min), Ok(max)) => Some((*min, *max)),
            _ => None,
        }
    }

    pub fn total_time(&self) -> f64 {
        self.time_bounds().map(|(min, max)| max - min).unwrap_or(0.0)
    }
}

// src/data_input/log_data.rs
