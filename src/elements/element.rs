//! Frame element - 2D beam-column between two nodes

use serde::{Deserialize, Serialize};

/// A 2D frame element (beam or column)
///
/// End nodes are referenced by their identity index into the owning
/// structure's node list. Length and orientation are derived once when the
/// element is inserted, since nodes are immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Index of the i-node (start)
    pub i_node: usize,
    /// Index of the j-node (end)
    pub j_node: usize,
    /// Modulus of elasticity
    pub e: f64,
    /// Moment of inertia (in-plane bending)
    pub i: f64,
    /// Cross-sectional area
    pub a: f64,

    /// Length, derived from the end-node coordinates
    pub(crate) length: f64,
    /// Orientation angle from node i to node j (radians)
    pub(crate) theta: f64,

    /// Accumulated local fixed-end force vector from member loads.
    /// Only the transverse and rotation slots are populated; axial member
    /// loading is unsupported.
    pub(crate) fixed_end: [f64; 6],

    /// Gathered end displacements after the solve (global-axis orientation)
    #[serde(skip)]
    pub(crate) local_displacements: Option<[f64; 6]>,

    /// Recovered local end forces (axial-1, shear-1, moment-1, axial-2, shear-2, moment-2)
    #[serde(skip)]
    pub(crate) local_forces: Option<[f64; 6]>,
}

impl Element {
    /// Create a new element; `length` and `theta` come from the owning structure
    pub(crate) fn new(
        i_node: usize,
        j_node: usize,
        e: f64,
        i: f64,
        a: f64,
        length: f64,
        theta: f64,
    ) -> Self {
        Self {
            i_node,
            j_node,
            e,
            i,
            a,
            length,
            theta,
            fixed_end: [0.0; 6],
            local_displacements: None,
            local_forces: None,
        }
    }

    /// Get the element length
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Get the orientation angle from node i to node j (radians)
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Global DOF indices for the six element DOFs
    pub fn dofs(&self) -> [usize; 6] {
        [
            self.i_node * 3,
            self.i_node * 3 + 1,
            self.i_node * 3 + 2,
            self.j_node * 3,
            self.j_node * 3 + 1,
            self.j_node * 3 + 2,
        ]
    }

    /// Accumulate a [F1, M1, F2, M2] fixed-end force set into the local
    /// fixed-end vector (transverse and rotation slots)
    pub(crate) fn add_fixed_end_forces(&mut self, fef: &[f64; 4]) {
        self.fixed_end[1] += fef[0];
        self.fixed_end[2] += fef[1];
        self.fixed_end[4] += fef[2];
        self.fixed_end[5] += fef[3];
    }

    /// Get the accumulated local fixed-end force vector
    pub fn fixed_end_forces(&self) -> [f64; 6] {
        self.fixed_end
    }

    /// Recovered local end forces, if the structure has been analyzed
    pub fn local_forces(&self) -> Option<[f64; 6]> {
        self.local_forces
    }

    /// Gathered end displacements, if the structure has been analyzed
    pub fn local_displacements(&self) -> Option<[f64; 6]> {
        self.local_displacements
    }
}
