// src/data_analysis/frame_window.rs

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::data_analysis::resample::ResampledSeries;

/// One resampled point as displayed: altitude is already offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowPoint {
    pub time: f64,
    pub altitude: f64,
    pub ground_speed: f64,
}

/// Visible trailing data for one output frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameWindow {
    pub index: usize,
    pub points: Vec<WindowPoint>,
}

impl FrameWindow {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn oldest(&self) -> Option<&WindowPoint> {
        self.points.first()
    }

    pub fn newest(&self) -> Option<&WindowPoint> {
        self.points.last()
    }

    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.time).collect()
    }

    pub fn altitudes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.altitude).collect()
    }

    pub fn ground_speeds(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.ground_speed).collect()
    }
}

/// Lazy, finite sequence of frame windows over a resampled series.
///
/// Each step drops the oldest points beyond capacity and appends exactly one new
/// point, so the window behaves as a fixed-capacity FIFO. The generator owns the
/// series and cannot be restarted; after the last grid point it yields `None`.
#[derive(Debug)]
pub struct FrameWindows {
    series: ResampledSeries,
    next_index: usize,
    capacity: usize,
    y_offset: f64,
    buffer: VecDeque<WindowPoint>,
}

impl FrameWindows {
    /// `max_num_points` below 1 is treated as 1.
    pub fn new(series: ResampledSeries, max_num_points: usize) -> Self {
        let capacity = max_num_points.max(1);
        let y_offset = series.altitude_offset();
        Self {
            series,
            next_index: 0,
            capacity,
            y_offset,
            buffer: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Value subtracted from every altitude.
    pub fn y_offset(&self) -> f64 {
        self.y_offset
    }

    /// Total frames this generator produces, consumed or not.
    pub fn total_frames(&self) -> usize {
        self.series.len()
    }
}

impl Iterator for FrameWindows {
    type Item = FrameWindow;

    fn next(&mut self) -> Option<FrameWindow> {
        let i = self.next_index;
        if i >= self.series.len() {
            return None;
        }
        self.next_index += 1;

        while self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(WindowPoint {
            time: self.series.time[i],
            altitude: self.series.altitude[i] - self.y_offset,
            ground_speed: self.series.ground_speed[i],
        });

        Some(FrameWindow {
            index: i,
            points: self.buffer.iter().copied().collect(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.series.len().saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameWindows {}

impl FusedIterator for FrameWindows {}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn series(n: usize) -> ResampledSeries {
        ResampledSeries {
            time: Array1::from_shape_fn(n, |i| i as f64 * 0.1),
            altitude: Array1::from_shape_fn(n, |i| 50.0 + (i % 7) as f64),
            ground_speed: Array1::from_shape_fn(n, |i| (i % 3) as f64),
        }
    }

    #[test]
    fn test_window_grows_then_slides() {
        let mut windows = FrameWindows::new(series(10), 4);
        let lens: Vec<usize> = windows.by_ref().map(|w| w.len()).collect();
        assert_eq!(lens, vec![1, 2, 3, 4, 4, 4, 4, 4, 4, 4]);
        assert!(windows.next().is_none());
        assert!(windows.next().is_none());
    }

    #[test]
    fn test_fifo_drops_one_oldest_appends_one_newest() {
        let windows: Vec<FrameWindow> = FrameWindows::new(series(12), 5).collect();
        for pair in windows.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.len() == 5 {
                assert_eq!(&next.points[..4], &prev.points[1..]);
            } else {
                assert_eq!(&next.points[..prev.len()], &prev.points[..]);
            }
            assert_eq!(next.index, prev.index + 1);
        }
    }

    #[test]
    fn test_altitude_offset_maps_minimum_to_zero() {
        let windows: Vec<FrameWindow> = FrameWindows::new(series(20), 100).collect();
        let last = windows.last().unwrap();
        let min_alt = last.altitudes().into_iter().fold(f64::INFINITY, f64::min);
        assert_eq!(min_alt, 0.0);
        assert_eq!(last.altitudes()[3], 3.0);
    }

    #[test]
    fn test_exact_size_and_zero_capacity() {
        let mut windows = FrameWindows::new(series(6), 0);
        assert_eq!(windows.capacity(), 1);
        assert_eq!(windows.len(), 6);
        windows.next();
        assert_eq!(windows.len(), 5);
        assert!(windows.all(|w| w.len() == 1));
    }

    #[test]
    fn test_empty_series_is_exhausted_immediately() {
        let mut windows = FrameWindows::new(ResampledSeries::default(), 10);
        assert_eq!(windows.y_offset(), 0.0);
        assert!(windows.next().is_none());
    }
}

// src/data_analysis/frame_window.rs
