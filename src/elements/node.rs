//! Node entity - a point in the structural plane

use serde::{Deserialize, Serialize};

/// A 2D node in the structural model
///
/// Nodes are owned by the [`Structure`](crate::model::Structure) and referenced
/// by elements through their identity index `n`, never by pointer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Node {
    /// Identity index (position in the owning node list)
    pub n: usize,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Node {
    /// Create a new node at the given coordinates
    pub(crate) fn new(n: usize, x: f64, y: f64) -> Self {
        Self { n, x, y }
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Global index of this node's first DOF
    pub fn base_dof(&self) -> usize {
        self.n * 3
    }
}
