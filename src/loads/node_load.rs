//! Nodal loads - forces and moments applied directly to nodes

use serde::{Deserialize, Serialize};

use crate::elements::Direction;

/// A load applied directly to a nodal DOF, in global axes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodalLoad {
    /// Index of the loaded node
    pub node: usize,
    /// DOF direction the load acts in
    pub direction: Direction,
    /// Load value (force for X/Y, moment for R)
    pub value: f64,
}

impl NodalLoad {
    /// Create a new nodal load
    pub fn new(node: usize, direction: Direction, value: f64) -> Self {
        Self {
            node,
            direction,
            value,
        }
    }

    /// Global DOF index the load is applied at
    pub fn dof(&self) -> usize {
        self.node * 3 + self.direction.offset()
    }
}
