//! Elementwise helpers for n-dimensional vectors.
//!
//! Anchors and iterates are `ndarray` rows; arithmetic comes from `ndarray`
//! itself. What lives here is the handful of scalar reductions the solver
//! needs (Euclidean norms and distances) plus the **lexicographic** order
//! used for exact anchor identity. The lexicographic compare is an exact
//! component-wise order, never a tolerance, because anchor identity
//! decides which update operator applies.

use core::cmp::Ordering;
use ndarray::ArrayView1;

/// Squared Euclidean norm ‖v‖².
pub(crate) fn squared_norm(v: ArrayView1<'_, f64>) -> f64 {
    v.iter().map(|c| c * c).sum()
}

/// Euclidean norm ‖v‖.
pub(crate) fn norm(v: ArrayView1<'_, f64>) -> f64 {
    squared_norm(v).sqrt()
}

/// Euclidean distance ‖a − b‖.
pub(crate) fn distance(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Lexicographic order on components.
///
/// Total over finite values (inputs are validated finite before they reach
/// the solver). `-0.0` and `0.0` compare equal.
pub(crate) fn lex_cmp(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        if x < y {
            return Ordering::Less;
        }
        if x > y {
            return Ordering::Greater;
        }
    }
    Ordering::Equal
}

/// Exact component-wise equality: `lex_cmp == Equal`.
pub(crate) fn exact_eq(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> bool {
    lex_cmp(a, b) == Ordering::Equal
}
