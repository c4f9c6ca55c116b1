//! Mathematical routines for the direct stiffness method

use nalgebra::{DMatrix, DVector, SMatrix, SVector};

use crate::error::LoadSpanError;

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// 4x4 matrix for truss element stiffness/transformation
pub type Mat4 = SMatrix<f64, 4, 4>;
/// 6x6 matrix for frame element stiffness/transformation
pub type Mat6 = SMatrix<f64, 6, 6>;
/// 6-element vector for frame fixed-end forces
pub type Vec6 = SVector<f64, 6>;

/// Absolute tolerance used by the load-span edge-case checks
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

pub(crate) fn gt(a: f64, b: f64) -> bool {
    a > b + DEFAULT_TOLERANCE
}

pub(crate) fn ge(a: f64, b: f64) -> bool {
    a >= b - DEFAULT_TOLERANCE
}

pub(crate) fn eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= DEFAULT_TOLERANCE
}

/// Compute the local stiffness matrix for a 2D truss element
///
/// Local DOF order is [u1, v1, u2, v2]; only the two axial translations
/// carry stiffness.
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `a` - Cross-sectional area
/// * `length` - Member length
pub fn truss_local_stiffness(e: f64, a: f64, length: f64) -> Mat4 {
    let ea_l = e * a / length;

    #[rustfmt::skip]
    let data = [
        ea_l,  0.0, -ea_l,  0.0,
        0.0,   0.0,  0.0,   0.0,
       -ea_l,  0.0,  ea_l,  0.0,
        0.0,   0.0,  0.0,   0.0,
    ];

    Mat4::from_row_slice(&data)
}

/// Compute the local-to-global transformation matrix for a truss element
///
/// Two stacked 2x2 rotation blocks by the direction cosines `(c, s)`.
pub fn truss_transformation(c: f64, s: f64) -> Mat4 {
    #[rustfmt::skip]
    let data = [
        c,    s,   0.0,  0.0,
       -s,    c,   0.0,  0.0,
        0.0,  0.0,  c,    s,
        0.0,  0.0, -s,    c,
    ];

    Mat4::from_row_slice(&data)
}

/// Compute the local stiffness matrix for a 2D frame element
///
/// Local DOF order is [u1, v1, r1, u2, v2, r2]: an axial EA/L block on
/// (u1, u2) plus the classical fixed-fixed beam bending block on
/// (v1, r1, v2, r2).
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `a` - Cross-sectional area
/// * `i` - Second moment of area
/// * `length` - Member length
pub fn frame_local_stiffness(e: f64, a: f64, i: f64, length: f64) -> Mat6 {
    let l = length;
    let l2 = l * l;
    let l3 = l2 * l;

    let ea_l = e * a / l;
    let ei12_l3 = 12.0 * e * i / l3;
    let ei6_l2 = 6.0 * e * i / l2;
    let ei4_l = 4.0 * e * i / l;
    let ei2_l = 2.0 * e * i / l;

    #[rustfmt::skip]
    let data = [
        ea_l,  0.0,       0.0,     -ea_l,  0.0,       0.0,
        0.0,   ei12_l3,   ei6_l2,   0.0,  -ei12_l3,   ei6_l2,
        0.0,   ei6_l2,    ei4_l,    0.0,  -ei6_l2,    ei2_l,
       -ea_l,  0.0,       0.0,      ea_l,  0.0,       0.0,
        0.0,  -ei12_l3,  -ei6_l2,   0.0,   ei12_l3,  -ei6_l2,
        0.0,   ei6_l2,    ei2_l,    0.0,  -ei6_l2,    ei4_l,
    ];

    Mat6::from_row_slice(&data)
}

/// Compute the local-to-global transformation matrix for a frame element
///
/// Block-diagonal: a 2x2 rotation for each end's translation pair and
/// identity for each end's rotation, which is frame-invariant.
pub fn frame_transformation(c: f64, s: f64) -> Mat6 {
    #[rustfmt::skip]
    let data = [
        c,    s,   0.0,  0.0,  0.0,  0.0,
       -s,    c,   0.0,  0.0,  0.0,  0.0,
        0.0,  0.0, 1.0,  0.0,  0.0,  0.0,
        0.0,  0.0, 0.0,  c,    s,    0.0,
        0.0,  0.0, 0.0, -s,    c,    0.0,
        0.0,  0.0, 0.0,  0.0,  0.0,  1.0,
    ];

    Mat6::from_row_slice(&data)
}

/// Compute the fixed-end forces of a frame member under a trapezoidal load
///
/// The load runs from intensity `wa` at local position `a` to `wb` at `b`
/// along a member of length `l`. Intensities are positive acting in the
/// local -y direction. The end moments come from a 5-point Boole's-rule
/// quadrature of the fixed-fixed beam influence integrals; the end shears
/// follow from static equilibrium of the load resultant about the far end.
///
/// The result order is `[0, VA, MA, 0, VB, MB]` (axial components zero).
///
/// A span of `(0, 0)` is shorthand for the entire member length. A span
/// with `a >= b` or `b > l` is rejected so the caller can skip the load.
pub fn frame_fixed_end_forces(
    l: f64,
    a: f64,
    wa: f64,
    b: f64,
    wb: f64,
) -> Result<Vec6, LoadSpanError> {
    let (a, b) = if eq(a, 0.0) && eq(b, 0.0) {
        (0.0, l)
    } else if ge(a, b) {
        return Err(LoadSpanError::Reversed { start: a, end: b });
    } else if gt(b, l) {
        return Err(LoadSpanError::BeyondMember { end: b, length: l });
    } else {
        (a, b)
    };

    // Boole's rule over [a, b]: weights 7, 32, 12, 32, 7, divisor 90.
    // The integrands are quartic in x, which the rule integrates exactly.
    let wt = [7.0, 32.0, 12.0, 32.0, 7.0];
    let m = (wb - wa) / (b - a);
    let mut ma = 0.0;
    let mut mb = 0.0;

    for (i, w) in wt.iter().enumerate() {
        let x = a + i as f64 * (b - a) / 4.0;
        let fa = x * (l - x).powi(2) * (m * (x - a) + wa);
        let fb = x.powi(2) * (l - x) * (m * (x - a) + wa);
        ma += w * fa;
        mb += w * fb;
    }

    let ma = (b - a) * ma / 90.0 / l.powi(2);
    let mb = -(b - a) * mb / 90.0 / l.powi(2);

    // End shears from statics: resultant of the rectangular and triangular
    // parts, moments about the far end, then force balance.
    let r1 = wa * (b - a);
    let d1 = a + (b - a) / 2.0;
    let r2 = (wb - wa) * (b - a) / 2.0;
    let d2 = a + 2.0 * (b - a) / 3.0;
    let vb = (r1 * d1 + r2 * d2 - ma - mb) / l;
    let va = r1 + r2 - vb;

    let mut qf = Vec6::zeros();
    qf[1] = va;
    qf[2] = ma;
    qf[4] = vb;
    qf[5] = mb;

    Ok(qf)
}

/// Solve a linear system using LU decomposition
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    a.clone().lu().solve(b)
}
