//! # fermat
//!
//! Weighted **geometric median** (the Fermat–Weber point): the location in
//! n-dimensional space minimizing the sum of weighted Euclidean distances
//! to a given set of points.
//!
//! The solver is the modified Weiszfeld iteration of Vardi and Zhang. The
//! classical Weiszfeld operator is a fixed-point map that breaks down when
//! the iterate coincides exactly with an input point; the modified method
//! detects that case, certifies the point optimal when its own weight
//! dominates the pull of the others, and otherwise takes a well-defined
//! line-search step. Duplicate input points are merged (weights summed)
//! before iteration so the coincidence test is meaningful.
//!
//! The core is a deterministic, single-threaded numerical solver: no I/O,
//! no global state, no randomness. Independent solves are safe to run in
//! parallel from separate threads.
//!
//! ```rust
//! use fermat::{WeightedPoint, Weiszfeld};
//!
//! let points = vec![
//!     WeightedPoint::new(vec![0.0, 0.0], 1.0),
//!     WeightedPoint::new(vec![10.0, 0.0], 1.0),
//!     WeightedPoint::new(vec![5.0, 8.0], 1.5),
//! ];
//!
//! let median = Weiszfeld::new(2)
//!     .with_permissible_error(1e-9)
//!     .with_max_iterations(10_000)
//!     .solve(&points)
//!     .unwrap();
//!
//! assert_eq!(median.point.len(), 2);
//! assert!(median.last_error <= 1e-9);
//! ```

mod anchors;
/// Error types used across `fermat`.
pub mod error;
mod objective;
mod operators;
mod vector;
mod weiszfeld;

pub use anchors::WeightedPoint;
pub use error::{Error, Result};
pub use weiszfeld::{MedianResult, Weiszfeld};
