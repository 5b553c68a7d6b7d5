//! Boundary conditions - prescribed displacements at nodal DOFs

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FrameError;

/// One of the three DOF directions at a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Translation along global X
    X,
    /// Translation along global Y
    Y,
    /// In-plane rotation
    R,
}

impl Direction {
    /// Offset of this direction within a node's 3-DOF block
    pub fn offset(&self) -> usize {
        match self {
            Direction::X => 0,
            Direction::Y => 1,
            Direction::R => 2,
        }
    }
}

impl FromStr for Direction {
    type Err = FrameError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "X" => Ok(Direction::X),
            "Y" => Ok(Direction::Y),
            "R" => Ok(Direction::R),
            other => Err(FrameError::UnknownDirection(other.to_string())),
        }
    }
}

/// A prescribed displacement at a single global DOF
///
/// The prescribed value is commonly zero (a rigid support) but may be nonzero
/// to model support settlement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundaryCondition {
    /// Global DOF index
    pub dof: usize,
    /// Prescribed displacement value
    pub value: f64,
}

impl BoundaryCondition {
    /// Create a boundary condition at a global DOF
    pub fn new(dof: usize, value: f64) -> Self {
        Self { dof, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::X.offset(), 0);
        assert_eq!(Direction::Y.offset(), 1);
        assert_eq!(Direction::R.offset(), 2);
    }

    #[test]
    fn test_direction_tokens() {
        assert_eq!("X".parse::<Direction>().unwrap(), Direction::X);
        assert_eq!("R".parse::<Direction>().unwrap(), Direction::R);
        assert!(matches!(
            "Z".parse::<Direction>(),
            Err(FrameError::UnknownDirection(t)) if t == "Z"
        ));
    }
}
