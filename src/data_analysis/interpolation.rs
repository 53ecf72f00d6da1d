// src/data_analysis/interpolation.rs

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;

use crate::data_analysis::spline::BSpline;
use crate::error::{AnimationError, AnimationResult};

/// Method used to estimate values between logged samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum InterpolationKind {
    /// Value of the closest sample
    Nearest,
    /// Straight line between neighbouring samples
    #[default]
    Linear,
    /// Zero-order hold of the previous sample
    Zero,
    /// First-order spline (slope-continuous piecewise linear)
    #[value(name = "slinear")]
    SLinear,
    /// Second-order spline
    Quadratic,
    /// Third-order spline with not-a-knot ends
    Cubic,
}

impl InterpolationKind {
    pub const ALL: [InterpolationKind; 6] = [
        InterpolationKind::Nearest,
        InterpolationKind::Linear,
        InterpolationKind::Zero,
        InterpolationKind::SLinear,
        InterpolationKind::Quadratic,
        InterpolationKind::Cubic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationKind::Nearest => "nearest",
            InterpolationKind::Linear => "linear",
            InterpolationKind::Zero => "zero",
            InterpolationKind::SLinear => "slinear",
            InterpolationKind::Quadratic => "quadratic",
            InterpolationKind::Cubic => "cubic",
        }
    }

    /// Spline degree for the spline-backed kinds.
    pub fn spline_degree(&self) -> Option<usize> {
        match self {
            InterpolationKind::Nearest | InterpolationKind::Linear => None,
            InterpolationKind::Zero => Some(0),
            InterpolationKind::SLinear => Some(1),
            InterpolationKind::Quadratic => Some(2),
            InterpolationKind::Cubic => Some(3),
        }
    }

    pub fn min_points(&self) -> usize {
        match self {
            InterpolationKind::Nearest => 1,
            InterpolationKind::Linear => 2,
            _ => self.spline_degree().unwrap_or(0) + 1,
        }
    }
}

impl fmt::Display for InterpolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterpolationKind {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        InterpolationKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| AnimationError::InvalidConfig(format!("unknown interpolation kind '{s}'")))
    }
}

#[derive(Debug, Clone)]
enum Method {
    Nearest { midpoints: Vec<f64> },
    Linear,
    Spline(BSpline),
}

/// One-dimensional interpolating function over the sample time range.
#[derive(Debug, Clone)]
pub struct Interp1d {
    kind: InterpolationKind,
    xs: Vec<f64>,
    ys: Vec<f64>,
    method: Method,
}

impl Interp1d {
    /// Fits `ys` over `xs`. Samples are sorted by `xs` first.
    pub fn new(xs: &[f64], ys: &[f64], kind: InterpolationKind) -> AnimationResult<Self> {
        debug_assert_eq!(xs.len(), ys.len());
        let found = xs.len().min(ys.len());
        let required = kind.min_points();
        if found < required {
            return Err(AnimationError::InsufficientPoints {
                kind,
                required,
                found,
            });
        }

        let mut order: Vec<usize> = (0..found).collect();
        order.sort_by(|&a, &b| xs[a].total_cmp(&xs[b]));
        let xs: Vec<f64> = order.iter().map(|&i| xs[i]).collect();
        let ys: Vec<f64> = order.iter().map(|&i| ys[i]).collect();

        let method = match kind.spline_degree() {
            Some(degree) => {
                if let Some(w) = xs.windows(2).find(|w| w[1] <= w[0]) {
                    return Err(AnimationError::DuplicateTime { kind, time: w[0] });
                }
                Method::Spline(BSpline::interpolate(&xs, &ys, degree)?)
            }
            None if kind == InterpolationKind::Nearest => Method::Nearest {
                midpoints: xs.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect(),
            },
            None => Method::Linear,
        };

        Ok(Self {
            kind,
            xs,
            ys,
            method,
        })
    }

    pub fn kind(&self) -> InterpolationKind {
        self.kind
    }

    /// Lowest and highest sample time.
    pub fn bounds(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Evaluates at `x`. There is no extrapolation outside [`Self::bounds`].
    pub fn eval(&self, x: f64) -> AnimationResult<f64> {
        let (min, max) = self.bounds();
        if !(min..=max).contains(&x) {
            return Err(AnimationError::OutOfBounds { x, min, max });
        }

        let value = match &self.method {
            Method::Nearest { midpoints } => {
                // Exact midpoints resolve to the lower sample
                self.ys[midpoints.partition_point(|&m| m < x)]
            }
            Method::Linear => {
                let hi = self.xs.partition_point(|&t| t < x).clamp(1, self.xs.len() - 1);
                let lo = hi - 1;
                let (x_lo, x_hi) = (self.xs[lo], self.xs[hi]);
                if x_hi == x_lo {
                    // Repeated leading time
                    return Ok(self.ys[hi]);
                }
                let slope = (self.ys[hi] - self.ys[lo]) / (x_hi - x_lo);
                slope * (x - x_lo) + self.ys[lo]
            }
            Method::Spline(spline) => spline.eval(x),
        };
        Ok(value)
    }

    pub fn eval_array(&self, xs: &Array1<f64>) -> AnimationResult<Array1<f64>> {
        let values = xs
            .iter()
            .map(|&x| self.eval(x))
            .collect::<AnimationResult<Vec<f64>>>()?;
        Ok(Array1::from(values))
    }
}


// src/data_analysis/interpolation.rs
