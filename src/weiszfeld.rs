//! Geometric median solver.
//!
//! Finds the point minimizing the sum of weighted Euclidean distances to a
//! set of anchors, using the modified Weiszfeld iteration of Vardi and
//! Zhang.
//!
//! # The Objective
//!
//! ```text
//! F(x) = Σₐ w(a) × ‖x − a‖
//! ```
//!
//! F is convex but not differentiable at the anchors, and the classical
//! Weiszfeld operator divides by zero there. The modified method keeps the
//! classical operator away from anchors and switches to the Vardi–Zhang
//! update when the iterate lands on one, so every iterate has a
//! well-defined successor.
//!
//! # Iteration
//!
//! 1. Merge exact-duplicate input points into anchors, weights summed.
//! 2. Seed at the anchor with minimal F. Starting from the best input
//!    point (rather than the centroid) keeps the first steps inside
//!    well-behaved territory and makes iteration counts reproducible.
//! 3. Apply one step per pass. Stop when the step certifies the iterate
//!    optimal, when consecutive iterates are within the permissible error,
//!    or at the iteration cap.
//!
//! The iteration cap guarantees termination even if numerical convergence
//! never occurs; reaching it is not an error, and the reported last error
//! tells the caller how unconverged the run was.
//!
//! # Example
//!
//! ```rust
//! use fermat::{WeightedPoint, Weiszfeld};
//!
//! let points = vec![
//!     WeightedPoint::new(vec![0.0, 0.0], 1.0),
//!     WeightedPoint::new(vec![4.0, 0.0], 1.0),
//!     WeightedPoint::new(vec![2.0, 3.0], 1.0),
//! ];
//!
//! let median = Weiszfeld::new(2)
//!     .with_permissible_error(1e-9)
//!     .with_max_iterations(10_000)
//!     .solve(&points)
//!     .unwrap();
//!
//! assert!(median.last_error <= 1e-9);
//! ```

use ndarray::Array1;

use crate::anchors::{AnchorSet, WeightedPoint};
use crate::error::{Error, Result};
use crate::objective;
use crate::operators::{self, StepOutcome};
use crate::vector;

/// Geometric median of a solve, with convergence diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct MedianResult {
    /// The computed median.
    pub point: Vec<f64>,
    /// Euclidean distance between the last two iterates. Zero when the
    /// result was certified optimal rather than stopped by tolerance.
    pub last_error: f64,
    /// Number of steps that moved the iterate.
    pub iterations: usize,
}

/// Modified Weiszfeld solver for the weighted geometric median.
#[derive(Debug, Clone)]
pub struct Weiszfeld {
    /// Dimension every input point must have.
    dimension: usize,
    /// Convergence threshold on consecutive-iterate distance.
    permissible_error: f64,
    /// Iteration cap.
    max_iterations: usize,
}

impl Weiszfeld {
    /// Create a solver for points of the given dimension.
    ///
    /// Defaults: permissible error `0.0` (stop only on an exact fixed
    /// point, or at the iteration cap) and an unbounded iteration cap.
    /// Callers wanting bounded latency should set both explicitly.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            permissible_error: 0.0,
            max_iterations: usize::MAX,
        }
    }

    /// Set the convergence threshold: iteration stops once the distance
    /// between consecutive iterates is at most this value.
    pub fn with_permissible_error(mut self, permissible_error: f64) -> Self {
        self.permissible_error = permissible_error;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Compute the weighted geometric median of `points`.
    ///
    /// Duplicate points are merged (weights summed) before iteration. The
    /// returned diagnostics report the distance between the final two
    /// iterates and the number of moving steps taken.
    ///
    /// Errors: [`Error::EmptyInput`] for an empty slice,
    /// [`Error::DimensionMismatch`] when a point's coordinate count
    /// disagrees with the solver's dimension, [`Error::InvalidParameter`]
    /// for malformed weights, coordinates, or configuration.
    pub fn solve(&self, points: &[WeightedPoint]) -> Result<MedianResult> {
        if !self.permissible_error.is_finite() || self.permissible_error < 0.0 {
            return Err(Error::InvalidParameter {
                name: "permissible_error",
                message: "must be finite and non-negative",
            });
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iterations",
                message: "must be at least 1",
            });
        }

        let anchors = AnchorSet::build(points, self.dimension)?;

        // With a single distinct anchor the median is that anchor, and the
        // R/L sums of the degenerate branch would be empty. Return before
        // entering the loop.
        if anchors.len() == 1 {
            return Ok(MedianResult {
                point: anchors.point(0).to_vec(),
                last_error: 0.0,
                iterations: 0,
            });
        }

        let seed = objective::best_anchor(&anchors);
        let mut x: Array1<f64> = anchors.point(seed).to_owned();
        let mut iterations = 0usize;
        let last_error;

        loop {
            match operators::step(&x, &anchors) {
                StepOutcome::AlreadyOptimal => {
                    last_error = 0.0;
                    break;
                }
                StepOutcome::Moved(next) => {
                    let error = vector::distance(next.view(), x.view());
                    x = next;
                    iterations += 1;
                    if error <= self.permissible_error || iterations >= self.max_iterations {
                        last_error = error;
                        break;
                    }
                }
            }
        }

        Ok(MedianResult {
            point: x.to_vec(),
            last_error,
            iterations,
        })
    }
}
