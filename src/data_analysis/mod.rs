// src/data_analysis/mod.rs

pub mod frame_window;
pub mod interpolation;
pub mod resample;
pub mod spline;

// src/data_analysis/mod.rs
