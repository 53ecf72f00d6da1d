// src/data_analysis/spline.rs

use crate::error::{AnimationError, AnimationResult};

/// Interpolating B-spline of a fixed degree.
///
/// Knot placement follows the usual rules for interpolation through every sample:
/// - degree 0: knots at the samples plus a repeated right end
/// - degree 2: clamped ends, interior knots at the midpoints between samples,
///   dropping the first and last midpoint
/// - odd degrees: clamped ends with not-a-knot interior (samples `m+1 .. n-m-1`,
///   `m = (degree - 1) / 2`)
#[derive(Debug, Clone)]
pub struct BSpline {
    knots: Vec<f64>,
    coeffs: Vec<f64>,
    degree: usize,
}

impl BSpline {
    /// Fits the spline through `(xs[i], ys[i])`.
    ///
    /// `xs` must be strictly increasing with at least `degree + 1` entries; callers
    /// check both before getting here.
    pub fn interpolate(xs: &[f64], ys: &[f64], degree: usize) -> AnimationResult<Self> {
        debug_assert_eq!(xs.len(), ys.len());
        debug_assert!(xs.len() > degree);

        let knots = interpolation_knots(xs, degree);
        if degree == 0 {
            return Ok(Self {
                knots,
                coeffs: ys.to_vec(),
                degree,
            });
        }

        let n = xs.len();
        let spans: Vec<usize> = xs.iter().map(|&x| find_span(&knots, degree, n, x)).collect();
        let lower = spans
            .iter()
            .enumerate()
            .map(|(row, &span)| row.saturating_sub(span - degree))
            .max()
            .unwrap_or(0);
        let upper = spans
            .iter()
            .enumerate()
            .map(|(row, &span)| span.saturating_sub(row))
            .max()
            .unwrap_or(0);

        let mut system = BandedSystem::new(n, lower, upper);
        for (row, (&x, &span)) in xs.iter().zip(spans.iter()).enumerate() {
            let basis = basis_functions(&knots, degree, span, x);
            for (offset, value) in basis.into_iter().enumerate() {
                system.set(row, span - degree + offset, value);
            }
        }
        let coeffs = system.solve(ys.to_vec())?;

        Ok(Self {
            knots,
            coeffs,
            degree,
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Evaluates the spline at `x`. Values outside the knot range are clamped to the
    /// end intervals.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.coeffs.len();
        let span = find_span(&self.knots, self.degree, n, x);
        if self.degree == 0 {
            return self.coeffs[span];
        }
        basis_functions(&self.knots, self.degree, span, x)
            .iter()
            .enumerate()
            .map(|(offset, b)| b * self.coeffs[span - self.degree + offset])
            .sum()
    }
}

fn interpolation_knots(xs: &[f64], degree: usize) -> Vec<f64> {
    let n = xs.len();
    let first = xs[0];
    let last = xs[n - 1];

    if degree == 0 {
        let mut knots = xs.to_vec();
        knots.push(last);
        return knots;
    }

    let interior: Vec<f64> = if degree % 2 == 0 {
        // Midpoints, without the first and last one
        xs.windows(2)
            .map(|w| 0.5 * (w[0] + w[1]))
            .skip(1)
            .take(n.saturating_sub(degree + 1))
            .collect()
    } else {
        let m = (degree - 1) / 2;
        xs[m + 1..n - m - 1].to_vec()
    };

    let mut knots = Vec::with_capacity(n + degree + 1);
    knots.extend(std::iter::repeat(first).take(degree + 1));
    knots.extend(interior);
    knots.extend(std::iter::repeat(last).take(degree + 1));
    debug_assert_eq!(knots.len(), n + degree + 1);
    knots
}

/// Index `l` in `degree..n` with `knots[l] <= x < knots[l + 1]`; the right end of the
/// base interval maps to the last span.
fn find_span(knots: &[f64], degree: usize, n: usize, x: f64) -> usize {
    let at_or_below = knots[degree..=n].partition_point(|&t| t <= x);
    (degree + at_or_below.max(1) - 1).min(n - 1)
}

/// Values of the `degree + 1` basis functions that are non-zero on `span`.
fn basis_functions(knots: &[f64], degree: usize, span: usize, x: f64) -> Vec<f64> {
    let mut values = vec![0.0; degree + 1];
    let mut left = vec![0.0; degree + 1];
    let mut right = vec![0.0; degree + 1];
    values[0] = 1.0;

    for j in 1..=degree {
        left[j] = x - knots[span + 1 - j];
        right[j] = knots[span + j] - x;
        let mut saved = 0.0;
        for r in 0..j {
            let temp = values[r] / (right[r + 1] + left[j - r]);
            values[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        values[j] = saved;
    }
    values
}

/// Square banded matrix with its right-hand side, solved by elimination without
/// pivoting. B-spline collocation matrices are totally positive, so no pivoting is
/// needed as long as every sample sits inside the support of its diagonal basis.
struct BandedSystem {
    n: usize,
    lower: usize,
    upper: usize,
    data: Vec<f64>,
}

impl BandedSystem {
    fn new(n: usize, lower: usize, upper: usize) -> Self {
        Self {
            n,
            lower,
            upper,
            data: vec![0.0; n * (lower + upper + 1)],
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(col + self.lower >= row && col <= row + self.upper);
        row * (self.lower + self.upper + 1) + (col + self.lower - row)
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.index(row, col)]
    }

    fn set(&mut self, row: usize, col: usize, value: f64) {
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    fn solve(mut self, mut rhs: Vec<f64>) -> AnimationResult<Vec<f64>> {
        let n = self.n;
        for col in 0..n {
            let pivot = self.get(col, col);
            if pivot == 0.0 || !pivot.is_finite() {
                return Err(AnimationError::SingularSystem { row: col });
            }
            let last_row = (col + self.lower).min(n - 1);
            let last_col = (col + self.upper).min(n - 1);
            for row in col + 1..=last_row {
                let factor = self.get(row, col) / pivot;
                if factor == 0.0 {
                    continue;
                }
                for j in col..=last_col {
                    let value = self.get(row, j) - factor * self.get(col, j);
                    self.set(row, j, value);
                }
                rhs[row] -= factor * rhs[col];
            }
        }

        let mut solution = vec![0.0; n];
        for row in (0..n).rev() {
            let last_col = (row + self.upper).min(n - 1);
            let tail: f64 = (row + 1..=last_col)
                .map(|j| self.get(row, j) * solution[j])
                .sum();
            solution[row] = (rhs[row] - tail) / self.get(row, row);
        }
        Ok(solution)
    }
}


// src/data_analysis/spline.rs
