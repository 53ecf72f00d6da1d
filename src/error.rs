// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

use crate::data_analysis::interpolation::InterpolationKind;

#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("line {line}: missing column {column} ({field})")]
    MissingField {
        line: u64,
        column: usize,
        field: &'static str,
    },
    #[error("line {line}: column {column} ({field}) is not a finite number: '{value}'")]
    InvalidNumber {
        line: u64,
        column: usize,
        field: &'static str,
        value: String,
    },
    #[error("GPS log '{0}' contains no data rows")]
    EmptyLog(PathBuf),
    #[error("{kind} interpolation needs at least {required} samples, found {found}")]
    InsufficientPoints {
        kind: InterpolationKind,
        required: usize,
        found: usize,
    },
    #[error("{kind} interpolation needs strictly increasing times; {time} appears more than once")]
    DuplicateTime { kind: InterpolationKind, time: f64 },
    #[error("spline collocation system is singular at row {row}")]
    SingularSystem { row: usize },
    #[error("{x} is outside the interpolation range [{min}, {max}]")]
    OutOfBounds { x: f64, min: f64, max: f64 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to render frame: {0}")]
    Render(String),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

impl AnimationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnimationError::Io {
            path: path.into(),
            source,
        }
    }
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for AnimationError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        AnimationError::Render(format!("{value:?}"))
    }
}

pub type AnimationResult<T> = Result<T, AnimationError>;
