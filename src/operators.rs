//! The modified Weiszfeld step.
//!
//! One call advances the iterate by one fixed-point step against the anchor
//! set, choosing between two operators.
//!
//! # Non-degenerate iterates
//!
//! When the iterate coincides with no anchor, the classical Weiszfeld
//! operator applies:
//!
//! ```text
//! T(x) = ( Σₐ w(a)·a / ‖x−a‖ ) / ( Σₐ w(a) / ‖x−a‖ )
//! ```
//!
//! A weighted average of all anchors, each weighted inversely by its current
//! distance. The iterate is pulled toward anchors that are heavy and close.
//!
//! # Degenerate iterates
//!
//! When the iterate **is** an anchor aⱼ (exact component-wise equality),
//! the aⱼ term of T divides by zero. Vardi and Zhang's extension instead
//! sums over the remaining anchors:
//!
//! ```text
//! R(aⱼ) = Σ_{i≠j} w(aᵢ) × (aᵢ − aⱼ) / ‖aᵢ − aⱼ‖     (net pull, a vector)
//! L(aⱼ) = Σ_{i≠j} w(aᵢ) / ‖aᵢ − aⱼ‖                  (a scalar)
//! ```
//!
//! If `‖R(aⱼ)‖ ≤ wⱼ`, the pull of every other anchor combined cannot
//! overcome aⱼ's own mass: aⱼ minimizes F and the iteration is finished.
//! Otherwise the line-search step
//!
//! ```text
//! tⱼ = (‖R(aⱼ)‖ − wⱼ) / L(aⱼ)
//! x′ = aⱼ − tⱼ × R(aⱼ)/‖R(aⱼ)‖
//! ```
//!
//! leaves aⱼ with a magnitude that exactly cancels the excess pull over
//! aⱼ's own weight.
//!
//! Deduplication upstream guarantees `i ≠ j` implies `aᵢ ≠ aⱼ`, so no
//! denominator in R or L can vanish. The empty-sum case (a single anchor)
//! yields R = 0 and the optimality certificate fires, so the step is total;
//! the solver short-circuits that case before the loop anyway.

use ndarray::{Array1, ArrayView1};

use crate::anchors::AnchorSet;
use crate::vector;

/// Outcome of one fixed-point step.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StepOutcome {
    /// The operator produced a new iterate.
    Moved(Array1<f64>),
    /// The iterate is an anchor that is already a minimizer of F.
    AlreadyOptimal,
}

/// Advance the iterate by one modified Weiszfeld step.
pub(crate) fn step(x: &Array1<f64>, anchors: &AnchorSet) -> StepOutcome {
    match anchors.position_of(x.view()) {
        None => StepOutcome::Moved(operator_t(x.view(), anchors)),
        Some(j) => {
            let r = operator_r(j, anchors);
            let r_norm = vector::norm(r.view());
            if r_norm <= anchors.weight(j) {
                StepOutcome::AlreadyOptimal
            } else {
                StepOutcome::Moved(operator_s(j, &r, r_norm, anchors))
            }
        }
    }
}

/// Classical Weiszfeld operator T. Caller guarantees x is not an anchor.
fn operator_t(x: ArrayView1<'_, f64>, anchors: &AnchorSet) -> Array1<f64> {
    let mut numer = Array1::<f64>::zeros(x.len());
    let mut denom = 0.0;

    for (a, w) in anchors.iter() {
        let pull = w / vector::distance(x, a);
        numer.scaled_add(pull, &a);
        denom += pull;
    }

    numer / denom
}

/// Net pull R(aⱼ): weighted unit vectors from aⱼ toward every other anchor.
fn operator_r(j: usize, anchors: &AnchorSet) -> Array1<f64> {
    let aj = anchors.point(j);
    let mut r = Array1::<f64>::zeros(aj.len());

    for (i, (a, w)) in anchors.iter().enumerate() {
        if i == j {
            continue;
        }
        let toward = &a - &aj;
        let dist = vector::norm(toward.view());
        r.scaled_add(w / dist, &toward);
    }

    r
}

/// Scalar companion L(aⱼ): total inverse-distance weight of the other anchors.
fn operator_l(j: usize, anchors: &AnchorSet) -> f64 {
    let aj = anchors.point(j);
    let mut l = 0.0;

    for (i, (a, w)) in anchors.iter().enumerate() {
        if i == j {
            continue;
        }
        l += w / vector::distance(aj, a);
    }

    l
}

/// Vardi–Zhang line-search step away from a non-optimal anchor.
fn operator_s(j: usize, r: &Array1<f64>, r_norm: f64, anchors: &AnchorSet) -> Array1<f64> {
    let step_size = (r_norm - anchors.weight(j)) / operator_l(j, anchors);
    let mut next = anchors.point(j).to_owned();
    next.scaled_add(-(step_size / r_norm), r);
    next
}
