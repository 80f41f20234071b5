//! The weighted-distance objective and seed selection.
//!
//! ```text
//! F(x) = Σₐ w(a) × ‖x − a‖
//! ```
//!
//! The iteration starts at the anchor with minimal F rather than, say, the
//! centroid: F at that anchor is finite and already at most the best input
//! point's cost, which keeps the modified method robust from the first step.

use ndarray::ArrayView1;

use crate::anchors::AnchorSet;
use crate::vector;

/// Evaluate F(x) = Σ w(a)·‖x − a‖ over the anchor set.
pub(crate) fn evaluate(x: ArrayView1<'_, f64>, anchors: &AnchorSet) -> f64 {
    anchors
        .iter()
        .map(|(a, w)| w * vector::distance(x, a))
        .sum()
}

/// Index of the anchor minimizing F, ties broken by anchor order.
pub(crate) fn best_anchor(anchors: &AnchorSet) -> usize {
    let mut best = 0;
    let mut best_cost = f64::INFINITY;
    for j in 0..anchors.len() {
        let cost = evaluate(anchors.point(j), anchors);
        if cost < best_cost {
            best_cost = cost;
            best = j;
        }
    }
    best
}
