//! Member loads - loads applied along an element's span

use serde::{Deserialize, Serialize};

use crate::math;

/// A load applied to a member between its end nodes
///
/// Both shapes act transverse to the member axis; axial member loading is
/// unsupported. Any other shape token in an input file is a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MemberLoad {
    /// Trapezoidal distributed load over the full span, with intensity `w1`
    /// at node i and `w2` at node j
    Distributed { w1: f64, w2: f64 },
    /// Concentrated load `p` at distance `a` from node i
    Point { p: f64, a: f64 },
}

impl MemberLoad {
    /// Create a uniform distributed load
    pub fn uniform(w: f64) -> Self {
        Self::Distributed { w1: w, w2: w }
    }

    /// Fixed-end forces [F1, M1, F2, M2] for a member of the given length
    pub fn fixed_end_forces(&self, length: f64) -> [f64; 4] {
        let fef = match *self {
            MemberLoad::Distributed { w1, w2 } => math::fef_distributed(w1, w2, length),
            MemberLoad::Point { p, a } => math::fef_point(p, a, length),
        };
        [fef[0], fef[1], fef[2], fef[3]]
    }

    /// Total transverse force applied by this load
    pub fn total_force(&self, length: f64) -> f64 {
        match *self {
            MemberLoad::Distributed { w1, w2 } => (w1 + w2) / 2.0 * length,
            MemberLoad::Point { p, .. } => p,
        }
    }
}
