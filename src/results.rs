//! Result types for frame analysis

use serde::{Deserialize, Serialize};

/// Displacement results at a node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Displacement in X direction
    pub dx: f64,
    /// Displacement in Y direction
    pub dy: f64,
    /// In-plane rotation
    pub rz: f64,
}

impl NodeDisplacement {
    /// Create from a [DX, DY, RZ] triple
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            dx: arr[0],
            dy: arr[1],
            rz: arr[2],
        }
    }

    /// Get translation magnitude
    pub fn translation_magnitude(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2)).sqrt()
    }
}

/// Reaction forces at a node
///
/// Derived from the unconstrained stiffness matrix as `R = K * U`; only
/// meaningful at restrained DOFs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeReaction {
    /// Reaction force in X direction
    pub fx: f64,
    /// Reaction force in Y direction
    pub fy: f64,
    /// Reaction moment about the in-plane rotation axis
    pub mz: f64,
}

impl NodeReaction {
    /// Create from a [FX, FY, MZ] triple
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            fx: arr[0],
            fy: arr[1],
            mz: arr[2],
        }
    }
}

/// Local end forces at one end of a member
///
/// Components follow the element's recovered local force vector ordering:
/// axial, shear, moment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MemberEndForces {
    /// Axial force
    pub axial: f64,
    /// Transverse shear force
    pub shear: f64,
    /// Bending moment
    pub moment: f64,
}

impl MemberEndForces {
    /// Create from a recovered local force vector, i-end entries
    pub fn from_i_end(forces: &[f64; 6]) -> Self {
        Self {
            axial: forces[0],
            shear: forces[1],
            moment: forces[2],
        }
    }

    /// Create from a recovered local force vector, j-end entries
    pub fn from_j_end(forces: &[f64; 6]) -> Self {
        Self {
            axial: forces[3],
            shear: forces[4],
            moment: forces[5],
        }
    }
}

/// Summary of an analysis run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Total number of nodes
    pub num_nodes: usize,
    /// Total number of elements
    pub num_elements: usize,
    /// Total DOFs
    pub total_dofs: usize,
    /// Number of DOFs with a prescribed displacement
    pub restrained_dofs: usize,
    /// Maximum nodal translation magnitude
    pub max_displacement: f64,
    /// Node with the maximum translation
    pub max_disp_node: usize,
}
