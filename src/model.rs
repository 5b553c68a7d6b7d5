//! Structure - the structural model aggregate

use log::{debug, info};

use crate::elements::{BoundaryCondition, Direction, Element, Node};
use crate::error::{FrameError, FrameResult};
use crate::loads::{MemberLoad, NodalLoad};
use crate::math::{self, DVec, Mat, Vec6};
use crate::results::{AnalysisSummary, MemberEndForces, NodeDisplacement, NodeReaction};

/// The 2D frame structural model
///
/// Owns the nodes, elements, boundary conditions, and load records, plus the
/// assembled system state. The analysis is one deterministic pass:
/// assemble, constrain, solve, recover. `K` and `F` are rebuilt from zero on
/// every [`analyze`](Structure::analyze) call, so re-running an unmodified
/// structure produces identical results.
#[derive(Debug, Clone)]
pub struct Structure {
    nodes: Vec<Node>,
    elements: Vec<Element>,
    bounds: Vec<BoundaryCondition>,
    nodal_loads: Vec<NodalLoad>,

    /// Global stiffness matrix, symmetric until constraints are imposed
    k: Mat,
    /// Constrained copy of `K`, used only for the solve
    k_bounded: Mat,
    /// Global load vector
    f: DVec,
    /// Global displacement vector, produced by the solve
    u: DVec,
    /// Global nodal force vector `K * U`; support reactions at restrained DOFs
    reactions: DVec,

    solved: bool,
}

impl Default for Structure {
    fn default() -> Self {
        Self::new()
    }
}

impl Structure {
    /// Create a new empty structure
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            elements: Vec::new(),
            bounds: Vec::new(),
            nodal_loads: Vec::new(),
            k: Mat::zeros(0, 0),
            k_bounded: Mat::zeros(0, 0),
            f: DVec::zeros(0),
            u: DVec::zeros(0),
            reactions: DVec::zeros(0),
            solved: false,
        }
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a node at the given coordinates, returning its identity index
    pub fn add_node(&mut self, x: f64, y: f64) -> usize {
        let n = self.nodes.len();
        self.nodes.push(Node::new(n, x, y));
        self.solved = false;
        n
    }

    /// Add an element between two existing nodes
    ///
    /// # Arguments
    /// * `i_node`, `j_node` - End node indices
    /// * `e` - Modulus of elasticity
    /// * `i` - Moment of inertia (in-plane bending)
    /// * `a` - Cross-sectional area
    pub fn add_element(
        &mut self,
        i_node: usize,
        j_node: usize,
        e: f64,
        i: f64,
        a: f64,
    ) -> FrameResult<usize> {
        let ni = *self
            .nodes
            .get(i_node)
            .ok_or(FrameError::NodeNotFound(i_node))?;
        let nj = *self
            .nodes
            .get(j_node)
            .ok_or(FrameError::NodeNotFound(j_node))?;

        let length = ni.distance_to(&nj);
        if length < 1e-10 {
            return Err(FrameError::InvalidGeometry(format!(
                "element has zero length: i={}, j={}",
                i_node, j_node
            )));
        }
        let theta = (nj.y - ni.y).atan2(nj.x - ni.x);

        let index = self.elements.len();
        self.elements
            .push(Element::new(i_node, j_node, e, i, a, length, theta));
        self.solved = false;
        Ok(index)
    }

    /// Prescribe a displacement at a node's DOF
    pub fn add_bound(&mut self, node: usize, direction: Direction, value: f64) -> FrameResult<()> {
        let node = self
            .nodes
            .get(node)
            .ok_or(FrameError::NodeNotFound(node))?;
        self.bounds
            .push(BoundaryCondition::new(node.base_dof() + direction.offset(), value));
        self.solved = false;
        Ok(())
    }

    /// Apply a load directly to a node's DOF, in global axes
    pub fn add_nodal_load(
        &mut self,
        node: usize,
        direction: Direction,
        value: f64,
    ) -> FrameResult<()> {
        if node >= self.nodes.len() {
            return Err(FrameError::NodeNotFound(node));
        }
        self.nodal_loads.push(NodalLoad::new(node, direction, value));
        self.solved = false;
        Ok(())
    }

    /// Apply a member load to an element
    ///
    /// The fixed-end forces accumulate into the element's local fixed-end
    /// vector; they are scattered into the global load vector at assembly.
    pub fn add_member_load(&mut self, element: usize, load: MemberLoad) -> FrameResult<()> {
        let elem = self
            .elements
            .get_mut(element)
            .ok_or(FrameError::ElementNotFound(element))?;

        if let MemberLoad::Point { a, .. } = load {
            if !(0.0..=elem.length()).contains(&a) {
                return Err(FrameError::InvalidInput(format!(
                    "point load position {} outside element 0..{}",
                    a,
                    elem.length()
                )));
            }
        }

        let fef = load.fixed_end_forces(elem.length());
        elem.add_fixed_end_forces(&fef);
        self.solved = false;
        Ok(())
    }

    /// Nodes in the structure
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Elements in the structure
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Boundary conditions, in application order
    pub fn bounds(&self) -> &[BoundaryCondition] {
        &self.bounds
    }

    /// Total number of DOFs (three per node)
    pub fn num_dofs(&self) -> usize {
        self.nodes.len() * 3
    }

    // ========================
    // Analysis Methods
    // ========================

    /// Run the linear static analysis
    ///
    /// Assembles `K` and `F` from scratch, imposes the boundary conditions on
    /// a working copy of `K`, solves for the global displacements, and
    /// recovers each element's local end forces.
    pub fn analyze(&mut self) -> FrameResult<()> {
        if self.nodes.is_empty() {
            return Err(FrameError::InvalidInput(
                "structure has no nodes".to_string(),
            ));
        }

        info!(
            "analyzing structure: {} nodes, {} elements, {} DOFs",
            self.nodes.len(),
            self.elements.len(),
            self.num_dofs()
        );

        self.assemble();
        self.constrain();

        self.u = math::solve_linear_system(&self.k_bounded, &self.f)
            .ok_or(FrameError::SingularMatrix)?;

        self.recover_forces();
        self.reactions = &self.k * &self.u;
        self.solved = true;

        Ok(())
    }

    /// Assemble the global stiffness matrix and load vector from scratch
    fn assemble(&mut self) {
        let n_dofs = self.num_dofs();
        self.k = Mat::zeros(n_dofs, n_dofs);
        self.f = DVec::zeros(n_dofs);

        for element in &self.elements {
            let k_local = math::local_stiffness(element.e, element.i, element.a, element.length());
            let rot = math::rotation_matrix(element.theta());
            let k_global = math::global_stiffness(&k_local, &rot);

            let dofs = element.dofs();
            for (li, &gi) in dofs.iter().enumerate() {
                for (lj, &gj) in dofs.iter().enumerate() {
                    self.k[(gi, gj)] += k_global[(li, lj)];
                }
            }

            // Equivalent nodal loads from member loads: transverse components
            // map through (-sin, cos) at each end, moments pass through.
            let (s, c) = (element.theta().sin(), element.theta().cos());
            let fe = element.fixed_end_forces();
            self.f[dofs[0]] += fe[1] * -s;
            self.f[dofs[1]] += fe[1] * c;
            self.f[dofs[2]] += fe[2];
            self.f[dofs[3]] += fe[4] * -s;
            self.f[dofs[4]] += fe[4] * c;
            self.f[dofs[5]] += fe[5];
        }

        for load in &self.nodal_loads {
            self.f[load.dof()] += load.value;
        }
    }

    /// Impose the boundary conditions on a working copy of `K`
    ///
    /// Row/column replacement, one condition at a time in supplied order:
    /// the prescribed displacement's coupling is first moved to the load
    /// vector, then the row and column are zeroed and the diagonal set to
    /// one so the equation reads `U(d) = v`.
    fn constrain(&mut self) {
        self.k_bounded = self.k.clone();
        let n_dofs = self.num_dofs();

        for bound in &self.bounds {
            debug!("prescribing DOF {} = {}", bound.dof, bound.value);
            let d = bound.dof;
            for row in 0..n_dofs {
                self.f[row] -= self.k_bounded[(d, row)] * bound.value;
                self.k_bounded[(row, d)] = 0.0;
                self.k_bounded[(d, row)] = 0.0;
            }
            self.k_bounded[(d, d)] = 1.0;
            self.f[d] = bound.value;
        }
    }

    /// Recover each element's local end forces from the global solution
    ///
    /// `Fe = K_local * (ROT * Ue) - Fext`: the gathered displacements are
    /// re-expressed in the element's own axes before applying the local
    /// stiffness, and the fixed-end vector superimposes the applied member
    /// loads back onto the elastic forces.
    fn recover_forces(&mut self) {
        for element in self.elements.iter_mut() {
            let dofs = element.dofs();
            let mut ue = Vec6::zeros();
            for (slot, &dof) in dofs.iter().enumerate() {
                ue[slot] = self.u[dof];
            }

            let k_local = math::local_stiffness(element.e, element.i, element.a, element.length);
            let rot = math::rotation_matrix(element.theta);
            let fext = Vec6::from_column_slice(&element.fixed_end);

            let fe = k_local * (rot * ue) - fext;

            let mut displacements = [0.0; 6];
            let mut forces = [0.0; 6];
            for slot in 0..6 {
                displacements[slot] = ue[slot];
                forces[slot] = fe[slot];
            }
            element.local_displacements = Some(displacements);
            element.local_forces = Some(forces);
        }
    }

    // ========================
    // Result Access Methods
    // ========================

    /// Check if the structure has been analyzed
    pub fn is_analyzed(&self) -> bool {
        self.solved
    }

    /// The assembled global stiffness matrix (before constraints)
    pub fn stiffness_matrix(&self) -> &Mat {
        &self.k
    }

    /// The global load vector as used by the solve
    pub fn load_vector(&self) -> &DVec {
        &self.f
    }

    /// The solved global displacement vector
    pub fn displacements(&self) -> FrameResult<&DVec> {
        if !self.solved {
            return Err(FrameError::NotAnalyzed);
        }
        Ok(&self.u)
    }

    /// Get the displacement triple at a node
    pub fn node_displacement(&self, node: usize) -> FrameResult<NodeDisplacement> {
        let node = self
            .nodes
            .get(node)
            .ok_or(FrameError::NodeNotFound(node))?;
        if !self.solved {
            return Err(FrameError::NotAnalyzed);
        }

        let base = node.base_dof();
        Ok(NodeDisplacement::from_array([
            self.u[base],
            self.u[base + 1],
            self.u[base + 2],
        ]))
    }

    /// Get the nodal force triple `K * U` at a node
    ///
    /// At restrained DOFs this is the support reaction.
    pub fn node_reaction(&self, node: usize) -> FrameResult<NodeReaction> {
        let node = self
            .nodes
            .get(node)
            .ok_or(FrameError::NodeNotFound(node))?;
        if !self.solved {
            return Err(FrameError::NotAnalyzed);
        }

        let base = node.base_dof();
        Ok(NodeReaction::from_array([
            self.reactions[base],
            self.reactions[base + 1],
            self.reactions[base + 2],
        ]))
    }

    /// Get the recovered local end forces of an element, i-end and j-end
    pub fn member_end_forces(
        &self,
        element: usize,
    ) -> FrameResult<(MemberEndForces, MemberEndForces)> {
        let element = self
            .elements
            .get(element)
            .ok_or(FrameError::ElementNotFound(element))?;
        let forces = element.local_forces().ok_or(FrameError::NotAnalyzed)?;

        Ok((
            MemberEndForces::from_i_end(&forces),
            MemberEndForces::from_j_end(&forces),
        ))
    }

    /// Get a summary of the analysis results
    pub fn summary(&self) -> FrameResult<AnalysisSummary> {
        if !self.solved {
            return Err(FrameError::NotAnalyzed);
        }

        let mut restrained: Vec<usize> = self.bounds.iter().map(|b| b.dof).collect();
        restrained.sort_unstable();
        restrained.dedup();

        let mut summary = AnalysisSummary {
            num_nodes: self.nodes.len(),
            num_elements: self.elements.len(),
            total_dofs: self.num_dofs(),
            restrained_dofs: restrained.len(),
            ..Default::default()
        };

        for node in &self.nodes {
            let disp = self.node_displacement(node.n)?;
            let mag = disp.translation_magnitude();
            if mag > summary.max_displacement {
                summary.max_displacement = mag;
                summary.max_disp_node = node.n;
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const E: f64 = 200e9;
    const I: f64 = 8.0e-6;
    const A: f64 = 3.0e-3;

    /// One horizontal element, node 0 fully fixed.
    fn cantilever(length: f64) -> Structure {
        let mut structure = Structure::new();
        let n1 = structure.add_node(0.0, 0.0);
        let n2 = structure.add_node(length, 0.0);
        structure.add_element(n1, n2, E, I, A).unwrap();
        structure.add_bound(n1, Direction::X, 0.0).unwrap();
        structure.add_bound(n1, Direction::Y, 0.0).unwrap();
        structure.add_bound(n1, Direction::R, 0.0).unwrap();
        structure
    }

    #[test]
    fn test_cantilever_tip_point_load() {
        let (l, p) = (2.0, -10000.0);
        let mut structure = cantilever(l);
        structure
            .add_member_load(0, MemberLoad::Point { p, a: l })
            .unwrap();
        structure.analyze().unwrap();

        let tip = structure.node_displacement(1).unwrap();
        assert_relative_eq!(tip.dy, p * l.powi(3) / (3.0 * E * I), epsilon = 1e-9);
        assert_relative_eq!(tip.rz, p * l.powi(2) / (2.0 * E * I), epsilon = 1e-9);

        // Fixed end carries the whole load back as a reaction
        let reaction = structure.node_reaction(0).unwrap();
        assert_relative_eq!(reaction.fy, -p, epsilon = 1e-6);
        assert_relative_eq!(reaction.mz, -p * l, epsilon = 1e-6);
    }

    #[test]
    fn test_cantilever_direct_nodal_load() {
        let (l, p) = (3.0, -1000.0);
        let mut structure = cantilever(l);
        structure.add_nodal_load(1, Direction::Y, p).unwrap();
        structure.analyze().unwrap();

        let tip = structure.node_displacement(1).unwrap();
        assert_relative_eq!(tip.dy, p * l.powi(3) / (3.0 * E * I), epsilon = 1e-9);
    }

    #[test]
    fn test_prescribed_displacements_are_enforced() {
        let mut structure = cantilever(2.0);
        structure
            .add_member_load(0, MemberLoad::Point { p: -5000.0, a: 2.0 })
            .unwrap();
        structure.analyze().unwrap();

        let u = structure.displacements().unwrap();
        for bound in structure.bounds() {
            assert_relative_eq!(u[bound.dof], bound.value, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_support_settlement_translates_rigidly() {
        let settlement = -0.01;
        let mut structure = Structure::new();
        let n1 = structure.add_node(0.0, 0.0);
        let n2 = structure.add_node(2.0, 0.0);
        structure.add_element(n1, n2, E, I, A).unwrap();
        structure.add_bound(n1, Direction::X, 0.0).unwrap();
        structure.add_bound(n1, Direction::Y, settlement).unwrap();
        structure.add_bound(n1, Direction::R, 0.0).unwrap();
        structure.analyze().unwrap();

        let u = structure.displacements().unwrap();
        assert_relative_eq!(u[1], settlement, epsilon = 1e-12);

        // With no other loads the free end follows the settlement
        let tip = structure.node_displacement(n2).unwrap();
        assert_relative_eq!(tip.dy, settlement, epsilon = 1e-9);
        assert_relative_eq!(tip.rz, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_assembled_stiffness_is_symmetric() {
        let mut structure = Structure::new();
        let n1 = structure.add_node(0.0, 0.0);
        let n2 = structure.add_node(4.0, 0.0);
        let n3 = structure.add_node(4.0, 3.0);
        structure.add_element(n1, n2, E, I, A).unwrap();
        structure.add_element(n2, n3, E, I, A).unwrap();
        structure.add_bound(n1, Direction::X, 0.0).unwrap();
        structure.add_bound(n1, Direction::Y, 0.0).unwrap();
        structure.add_bound(n1, Direction::R, 0.0).unwrap();
        structure.add_nodal_load(n3, Direction::X, 2000.0).unwrap();
        structure.analyze().unwrap();

        let k = structure.stiffness_matrix();
        for i in 0..structure.num_dofs() {
            for j in 0..structure.num_dofs() {
                assert_relative_eq!(k[(i, j)], k[(j, i)], epsilon = 1e-10, max_relative = 1e-10);
            }
        }
    }

    #[test]
    fn test_reanalysis_is_idempotent() {
        let mut structure = cantilever(2.0);
        structure
            .add_member_load(0, MemberLoad::uniform(-4000.0))
            .unwrap();

        structure.analyze().unwrap();
        let k_first = structure.stiffness_matrix().clone();
        let f_first = structure.load_vector().clone();
        let u_first = structure.displacements().unwrap().clone();

        structure.analyze().unwrap();
        assert_eq!(&k_first, structure.stiffness_matrix());
        assert_eq!(&f_first, structure.load_vector());
        assert_eq!(&u_first, structure.displacements().unwrap());
    }

    #[test]
    fn test_fixed_fixed_member_load_equilibrium() {
        let (l, w) = (4.0, -2000.0);
        let mut structure = Structure::new();
        let n1 = structure.add_node(0.0, 0.0);
        let n2 = structure.add_node(l, 0.0);
        structure.add_element(n1, n2, E, I, A).unwrap();
        for direction in [Direction::X, Direction::Y, Direction::R] {
            structure.add_bound(n1, direction, 0.0).unwrap();
            structure.add_bound(n2, direction, 0.0).unwrap();
        }
        let load = MemberLoad::uniform(w);
        structure.add_member_load(0, load).unwrap();
        structure.analyze().unwrap();

        let (fi, fj) = structure.member_end_forces(0).unwrap();

        // Recovered end shears balance the total applied member load
        assert_relative_eq!(fi.shear + fj.shear + load.total_force(l), 0.0, epsilon = 1e-6);

        // Closed-form fixed-end values for the uniform case
        assert_relative_eq!(fi.shear, -w * l / 2.0, epsilon = 1e-6);
        assert_relative_eq!(fi.moment, -w * l * l / 12.0, epsilon = 1e-6);
        assert_relative_eq!(fj.moment, w * l * l / 12.0, epsilon = 1e-6);
    }

    #[test]
    fn test_unconnected_node_is_singular() {
        let mut structure = cantilever(2.0);
        // A node no element reaches leaves zero rows in the stiffness matrix
        structure.add_node(5.0, 5.0);
        structure.add_nodal_load(1, Direction::Y, -100.0).unwrap();

        assert!(matches!(
            structure.analyze(),
            Err(FrameError::SingularMatrix)
        ));
    }

    #[test]
    fn test_building_validation() {
        let mut structure = Structure::new();
        let n1 = structure.add_node(0.0, 0.0);
        structure.add_node(1.0, 0.0);

        assert!(matches!(
            structure.add_element(n1, 7, E, I, A),
            Err(FrameError::NodeNotFound(7))
        ));
        assert!(matches!(
            structure.add_element(n1, n1, E, I, A),
            Err(FrameError::InvalidGeometry(_))
        ));
        assert!(matches!(
            structure.add_bound(9, Direction::X, 0.0),
            Err(FrameError::NodeNotFound(9))
        ));
        assert!(matches!(
            structure.add_member_load(0, MemberLoad::uniform(1.0)),
            Err(FrameError::ElementNotFound(0))
        ));
        assert!(matches!(
            structure.node_displacement(0),
            Err(FrameError::NotAnalyzed)
        ));
    }
}
