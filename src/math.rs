//! Mathematical utilities for the direct stiffness method

use nalgebra::{DMatrix, DVector, Matrix3, Matrix6, SMatrix, Vector4, Vector6};

pub type Mat = DMatrix<f64>;
pub type DVec = DVector<f64>;
pub type Mat3 = Matrix3<f64>;
pub type Mat6 = Matrix6<f64>;
pub type Vec6 = Vector6<f64>;

/// 3x6 matrix mapping end DOFs onto the reduced local DOFs
pub type Mat3x6 = SMatrix<f64, 3, 6>;
/// 4-element fixed-end force vector [F1, M1, F2, M2]
pub type Vec4 = Vector4<f64>;

/// Compute the reduced local stiffness matrix for a 2D frame element
///
/// The three reduced DOFs are axial elongation and the end rotations, so the
/// block couples axial and bending behavior only.
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `i` - Moment of inertia (in-plane bending)
/// * `a` - Cross-sectional area
/// * `length` - Element length
pub fn reduced_local_stiffness(e: f64, i: f64, a: f64, length: f64) -> Mat3 {
    let ea_l = e * a / length;
    let ei_l = e * i / length;

    #[rustfmt::skip]
    let data = [
        ea_l, 0.0,        0.0,
        0.0,  4.0 * ei_l, 2.0 * ei_l,
        0.0,  2.0 * ei_l, 4.0 * ei_l,
    ];

    Mat3::from_row_slice(&data)
}

/// Compute the rigid-body expansion matrix for a 2D frame element
///
/// Maps the six end DOFs (axial-1, transverse-1, rotation-1, axial-2,
/// transverse-2, rotation-2) onto the three reduced local DOFs.
pub fn rigid_body_expansion(length: f64) -> Mat3x6 {
    let inv_l = 1.0 / length;

    #[rustfmt::skip]
    let data = [
        -1.0, 0.0,   0.0, 1.0, 0.0,    0.0,
         0.0, inv_l, 1.0, 0.0, -inv_l, 0.0,
         0.0, inv_l, 0.0, 0.0, -inv_l, 1.0,
    ];

    Mat3x6::from_row_slice(&data)
}

/// Compute the 6x6 local stiffness matrix for a 2D frame element
///
/// Expands the reduced axial-bending block through the rigid-body matrix:
/// `K_local = RB^T * K_reduced * RB`.
pub fn local_stiffness(e: f64, i: f64, a: f64, length: f64) -> Mat6 {
    let k_reduced = reduced_local_stiffness(e, i, a, length);
    let rb = rigid_body_expansion(length);
    rb.transpose() * k_reduced * rb
}

/// Compute the local-to-global rotation matrix for a 2D frame element
///
/// Two repeated in-plane rotation blocks on the translational DOF pairs;
/// the rotational DOFs pass through unchanged.
///
/// # Arguments
/// * `theta` - Orientation angle from node i to node j (radians)
pub fn rotation_matrix(theta: f64) -> Mat6 {
    let c = theta.cos();
    let s = theta.sin();

    #[rustfmt::skip]
    let data = [
         c,   s,   0.0, 0.0, 0.0, 0.0,
        -s,   c,   0.0, 0.0, 0.0, 0.0,
         0.0, 0.0, 1.0, 0.0, 0.0, 0.0,
         0.0, 0.0, 0.0, c,   s,   0.0,
         0.0, 0.0, 0.0, -s,  c,   0.0,
         0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ];

    Mat6::from_row_slice(&data)
}

/// Transform a local stiffness matrix to global axes: `K = ROT^T * K_local * ROT`
pub fn global_stiffness(k_local: &Mat6, rot: &Mat6) -> Mat6 {
    rot.transpose() * k_local * rot
}

/// Compute fixed-end forces for a trapezoidal distributed load
///
/// The load acts transverse to the member over its full span, with intensity
/// `w1` at node i and `w2` at node j. Moments follow the right-hand rule.
///
/// # Returns
/// [F1, M1, F2, M2] in local coordinates
pub fn fef_distributed(w1: f64, w2: f64, length: f64) -> Vec4 {
    let l = length;
    let l2 = l * l;

    Vec4::new(
        (7.0 * w1 + 3.0 * w2) * l / 20.0,
        (w1 / 2.0 + w2 / 3.0) * l2 / 10.0,
        (3.0 * w1 + 7.0 * w2) * l / 20.0,
        -(w1 / 3.0 + w2 / 2.0) * l2 / 10.0,
    )
}

/// Compute fixed-end forces for a transverse point load
///
/// # Arguments
/// * `p` - Load magnitude
/// * `a` - Distance from node i to the load
/// * `length` - Element length
///
/// # Returns
/// [F1, M1, F2, M2] in local coordinates
pub fn fef_point(p: f64, a: f64, length: f64) -> Vec4 {
    let l = length;
    let b = l - a;
    let l2 = l * l;
    let l3 = l2 * l;

    Vec4::new(
        p * b * b * (3.0 * a + b) / l3,
        p * a * b * b / l2,
        p * a * a * (3.0 * b + a) / l3,
        -p * b * a * a / l2,
    )
}

/// Solve a linear system using LU decomposition
pub fn solve_linear_system(a: &Mat, b: &DVec) -> Option<DVec> {
    a.clone().lu().solve(b)
}
