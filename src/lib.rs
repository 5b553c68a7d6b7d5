//! frame2d - 2D frame static analysis in Rust
//!
//! Linear static analysis of plane frame structures with the direct
//! stiffness method, supporting:
//! - Euler-Bernoulli beam-column elements (axial + bending, three DOFs per node)
//! - Prescribed-displacement boundary conditions, including nonzero support settlement
//! - Direct nodal loads, trapezoidal distributed member loads, and interior point member loads
//! - Member end-force recovery in local coordinates
//!
//! ## Example
//! ```rust
//! use frame2d::prelude::*;
//!
//! let mut structure = Structure::new();
//!
//! // A 2 m cantilever: fixed at the first node, loaded at the tip
//! let n1 = structure.add_node(0.0, 0.0);
//! let n2 = structure.add_node(2.0, 0.0);
//! structure.add_element(n1, n2, 200e9, 8.0e-6, 3.0e-3).unwrap();
//!
//! structure.add_bound(n1, Direction::X, 0.0).unwrap();
//! structure.add_bound(n1, Direction::Y, 0.0).unwrap();
//! structure.add_bound(n1, Direction::R, 0.0).unwrap();
//! structure.add_nodal_load(n2, Direction::Y, -10e3).unwrap();
//!
//! structure.analyze().unwrap();
//!
//! let tip = structure.node_displacement(n2).unwrap();
//! assert!(tip.dy < 0.0);
//! ```

pub mod elements;
pub mod error;
pub mod input;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::elements::{BoundaryCondition, Direction, Element, Node};
    pub use crate::error::{FrameError, FrameResult};
    pub use crate::loads::{MemberLoad, NodalLoad};
    pub use crate::model::Structure;
    pub use crate::results::{AnalysisSummary, MemberEndForces, NodeDisplacement, NodeReaction};
}
