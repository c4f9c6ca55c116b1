//! Frame scenarios with distributed loads checked against beam theory

use approx::assert_relative_eq;
use frame2d::prelude::*;

const E: f64 = 200e9;
const I: f64 = 8.36e-5;
const A: f64 = 5.38e-3;

fn beam_model(spans: &[(u32, f64, f64)], members: &[(u32, u32, u32)]) -> Model {
    let mut model = Model::new();
    model.add_material(Material::new(1, "Steel", E, 0.3, 7850.0)).unwrap();
    model.add_section(Section::new(1, "IPE300", A, I)).unwrap();
    for &(id, x, y) in spans {
        model.add_node(Node::new(id, x, y)).unwrap();
    }
    for &(id, i, j) in members {
        model.add_member(Member::frame(id, i, j, 1, 1)).unwrap();
    }
    model
}

#[test]
fn two_element_beam_with_fixed_and_roller_support() {
    // Continuous beam over 8 m: fixed at the left end, roller at the right,
    // uniform downward load q on both elements.
    let q = 5_000.0;
    let mut model = beam_model(
        &[(1, 0.0, 0.0), (2, 4.0, 0.0), (3, 8.0, 0.0)],
        &[(1, 1, 2), (2, 2, 3)],
    );
    model.add_support(Support::fixed(1)).unwrap();
    model.add_support(Support::roller_y(3)).unwrap();
    model.add_member_load(DistributedLoad::uniform_downward(1, q)).unwrap();
    model.add_member_load(DistributedLoad::uniform_downward(2, q)).unwrap();

    // K11 must be invertible for this restraint layout
    model.analyze_linear().unwrap();

    // Frame members carry six global DOF indices
    for member in &model.members {
        assert_eq!(member.element().unwrap().dofs.len(), 6);
    }

    // Propped cantilever closed form: R_roller = 3qL/8, R_fixed = 5qL/8,
    // M_fixed = qL^2/8
    let length = 8.0;
    let r1 = model.node_reactions(1).unwrap();
    let r3 = model.node_reactions(3).unwrap();
    assert_relative_eq!(r3.fy, 3.0 * q * length / 8.0, max_relative = 1e-9);
    assert_relative_eq!(r1.fy, 5.0 * q * length / 8.0, max_relative = 1e-9);
    assert_relative_eq!(r1.mz, q * length * length / 8.0, max_relative = 1e-9);
    assert_relative_eq!(r3.mz, 0.0, epsilon = 1e-6);

    // Global equilibrium
    assert_relative_eq!(r1.fy + r3.fy, q * length, max_relative = 1e-12);
    assert_relative_eq!(r1.fx, 0.0, epsilon = 1e-9);

    // Per-member equilibrium of the recovered end forces, fixed-end
    // contributions included: shears balance the span load, moments about
    // the start end close to zero.
    for member in &model.members {
        let qe = member.local_forces().unwrap();
        let l = member.length().unwrap();
        assert_relative_eq!(qe[1] + qe[4], q * l, max_relative = 1e-9);
        assert_relative_eq!(
            qe[2] + qe[5] + qe[4] * l,
            q * l * l / 2.0,
            max_relative = 1e-9
        );
        // No axial force develops under transverse load
        assert_relative_eq!(qe[0], 0.0, epsilon = 1e-6);
    }
}

#[test]
fn clamped_beam_matches_closed_form() {
    // Both ends fixed, uniform downward load, midspan node.
    let q = 2_000.0;
    let length = 6.0;
    let mut model = beam_model(
        &[(1, 0.0, 0.0), (2, 3.0, 0.0), (3, 6.0, 0.0)],
        &[(1, 1, 2), (2, 2, 3)],
    );
    model.add_support(Support::fixed(1)).unwrap();
    model.add_support(Support::fixed(3)).unwrap();
    model.add_member_load(DistributedLoad::uniform_downward(1, q)).unwrap();
    model.add_member_load(DistributedLoad::uniform_downward(2, q)).unwrap();
    model.analyze_linear().unwrap();

    // Fixed-end reactions: qL/2 shears, +/- qL^2/12 moments
    let r1 = model.node_reactions(1).unwrap();
    let r3 = model.node_reactions(3).unwrap();
    assert_relative_eq!(r1.fy, q * length / 2.0, max_relative = 1e-9);
    assert_relative_eq!(r3.fy, q * length / 2.0, max_relative = 1e-9);
    assert_relative_eq!(r1.mz, q * length * length / 12.0, max_relative = 1e-9);
    assert_relative_eq!(r3.mz, -q * length * length / 12.0, max_relative = 1e-9);

    // Midspan deflection -qL^4/384EI, zero slope by symmetry
    let mid = model.node_displacement(2).unwrap();
    assert_relative_eq!(
        mid.dy,
        -q * length.powi(4) / (384.0 * E * I),
        max_relative = 1e-9
    );
    assert_relative_eq!(mid.rz, 0.0, epsilon = 1e-12);
}

#[test]
fn portal_frame_under_sway_load() {
    let mut model = beam_model(
        &[(1, 0.0, 0.0), (2, 6.0, 0.0), (3, 0.0, 4.0), (4, 6.0, 4.0)],
        &[(1, 1, 3), (2, 2, 4), (3, 3, 4)],
    );
    model.add_support(Support::fixed(1)).unwrap();
    model.add_support(Support::fixed(2)).unwrap();
    let h = 10_000.0;
    model.add_node_load(NodeLoad::fx(3, h)).unwrap();
    model.analyze_linear().unwrap();

    // Base shears carry the lateral load
    let r1 = model.node_reactions(1).unwrap();
    let r2 = model.node_reactions(2).unwrap();
    assert_relative_eq!(r1.fx + r2.fx, -h, max_relative = 1e-9);
    // Vertical reactions form a couple, no net uplift
    assert_relative_eq!(r1.fy + r2.fy, 0.0, epsilon = 1e-6);

    // The frame sways toward the load; the roof nodes track within the
    // beam's axial shortening
    let d3 = model.node_displacement(3).unwrap();
    let d4 = model.node_displacement(4).unwrap();
    assert!(d3.dx > 0.0);
    assert!(d4.dx > 0.0);
    assert_relative_eq!(d3.dx, d4.dx, max_relative = 0.05);

    // Unloaded members still satisfy self-equilibrium
    for member in &model.members {
        let qe = member.local_forces().unwrap();
        assert_relative_eq!(qe[0] + qe[3], 0.0, epsilon = 1e-6);
        assert_relative_eq!(qe[1] + qe[4], 0.0, epsilon = 1e-6);
    }
}

#[test]
fn unloaded_structure_stays_at_rest() {
    let mut model = beam_model(&[(1, 0.0, 0.0), (2, 4.0, 0.0)], &[(1, 1, 2)]);
    model.add_support(Support::fixed(1)).unwrap();
    model.analyze_linear().unwrap();

    let d2 = model.node_displacement(2).unwrap();
    assert_eq!(d2.dx, 0.0);
    assert_eq!(d2.dy, 0.0);
    let r1 = model.node_reactions(1).unwrap();
    assert_eq!(r1.fy, 0.0);
    assert_eq!(r1.mz, 0.0);
}
