//! Weighted input points and the deduplicated anchor set.
//!
//! The solver never iterates over raw input. Points that are **exactly**
//! equal (component-wise) are merged first, summing their weights, and the
//! distinct survivors (the *anchors*) are what every operator sums over.
//! The merge is mandatory, not cosmetic: the degenerate-iterate test asks
//! whether the iterate *is* an anchor, and the R/L pull sums skip exactly
//! one anchor. Unmerged duplicates would show up as distinct zero-distance
//! anchors and corrupt both.
//!
//! Anchors keep **first-insertion order**. A hash map keyed on float
//! coordinates would dedup just as well, but its iteration order is
//! arbitrary, and seed selection plus iteration counts must reproduce
//! across runs and platforms.

use ndarray::{Array1, Array2, ArrayView1};

use crate::error::{Error, Result};
use crate::vector;

/// A point with an attached weight.
///
/// The weight is additive mass, not a probability: two copies of the same
/// point with weights 1 and 2 are interchangeable with one copy of weight 3.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPoint {
    /// Coordinates of the point.
    pub point: Vec<f64>,
    /// Non-negative mass attached to the point.
    pub weight: f64,
}

impl WeightedPoint {
    /// Create a weighted point.
    pub fn new(point: Vec<f64>, weight: f64) -> Self {
        Self { point, weight }
    }
}

/// Distinct input points with aggregated weights, in first-insertion order.
#[derive(Debug, Clone)]
pub(crate) struct AnchorSet {
    /// One row per distinct anchor.
    points: Array2<f64>,
    /// Aggregated weight per anchor, same order as the rows.
    weights: Array1<f64>,
}

impl AnchorSet {
    /// Validate raw input and merge exact-duplicate points.
    ///
    /// Errors: [`Error::EmptyInput`] when `points` is empty,
    /// [`Error::DimensionMismatch`] when any point's coordinate count
    /// disagrees with `dimension`, [`Error::InvalidParameter`] for a zero
    /// dimension or a non-finite / negative coordinate or weight.
    pub(crate) fn build(points: &[WeightedPoint], dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::InvalidParameter {
                name: "dimension",
                message: "must be at least 1",
            });
        }
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut flat: Vec<f64> = Vec::with_capacity(points.len() * dimension);
        let mut weights: Vec<f64> = Vec::with_capacity(points.len());

        for wp in points {
            if wp.point.len() != dimension {
                return Err(Error::DimensionMismatch {
                    expected: dimension,
                    found: wp.point.len(),
                });
            }
            if !wp.weight.is_finite() || wp.weight < 0.0 {
                return Err(Error::InvalidParameter {
                    name: "weight",
                    message: "must be finite and non-negative",
                });
            }
            if wp.point.iter().any(|c| !c.is_finite()) {
                return Err(Error::InvalidParameter {
                    name: "point",
                    message: "coordinates must be finite",
                });
            }

            // Linear scan keeps first-insertion order; anchor counts are
            // small compared to iteration counts.
            match flat
                .chunks_exact(dimension)
                .position(|row| row == wp.point.as_slice())
            {
                Some(j) => weights[j] += wp.weight,
                None => {
                    flat.extend_from_slice(&wp.point);
                    weights.push(wp.weight);
                }
            }
        }

        let n = weights.len();
        let points = Array2::from_shape_vec((n, dimension), flat)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self {
            points,
            weights: Array1::from_vec(weights),
        })
    }

    /// Number of distinct anchors.
    pub(crate) fn len(&self) -> usize {
        self.weights.len()
    }

    /// Coordinates of anchor `j`.
    pub(crate) fn point(&self, j: usize) -> ArrayView1<'_, f64> {
        self.points.row(j)
    }

    /// Aggregated weight of anchor `j`.
    pub(crate) fn weight(&self, j: usize) -> f64 {
        self.weights[j]
    }

    /// Anchors in insertion order, paired with their weights.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (ArrayView1<'_, f64>, f64)> {
        self.points
            .outer_iter()
            .zip(self.weights.iter().copied())
    }

    /// Index of the anchor exactly equal to `x`, if any.
    pub(crate) fn position_of(&self, x: ArrayView1<'_, f64>) -> Option<usize> {
        (0..self.len()).find(|&j| vector::exact_eq(self.point(j), x))
    }
}
