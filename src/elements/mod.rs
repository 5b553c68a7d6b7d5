//! Structural entities module

mod element;
mod node;
mod support;

pub use element::Element;
pub use node::Node;
pub use support::{BoundaryCondition, Direction};
