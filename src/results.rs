//! Result types for the linear static analysis

use serde::{Deserialize, Serialize};

use crate::dof::DofTable;
use crate::elements::MemberKind;
use crate::error::ModelWarning;
use crate::math::Vec as FeVec;

/// Displacement components at a node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Translation in global X
    pub dx: f64,
    /// Translation in global Y
    pub dy: f64,
    /// Rotation about global Z
    pub rz: f64,
}

impl NodeDisplacement {
    /// Create from components in DOF order [TX, TY, RZ]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            dx: arr[0],
            dy: arr[1],
            rz: arr[2],
        }
    }

    /// Get the translation magnitude
    pub fn translation_magnitude(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2)).sqrt()
    }
}

/// Reaction components at a supported node
///
/// Components at free DOFs are zero; reactions are defined only at
/// restrained DOFs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction force in global X
    pub fx: f64,
    /// Reaction force in global Y
    pub fy: f64,
    /// Reaction moment about global Z
    pub mz: f64,
}

impl Reactions {
    /// Create from components in DOF order [FX, FY, MZ]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            fx: arr[0],
            fy: arr[1],
            mz: arr[2],
        }
    }

    /// Get the reaction force magnitude
    pub fn force_magnitude(&self) -> f64 {
        (self.fx.powi(2) + self.fy.powi(2)).sqrt()
    }
}

/// Internal forces at one member end, in local coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EndForces {
    /// Axial force, tension positive
    pub axial: f64,
    /// Shear force in local y
    pub shear: f64,
    /// Bending moment about local z
    pub moment: f64,
}

/// Internal end forces of a member
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MemberEndForces {
    /// Forces at the start (i) end
    pub start: EndForces,
    /// Forces at the end (j) end
    pub end: EndForces,
}

impl MemberEndForces {
    /// Build from the raw local end-force vector of an element
    ///
    /// Axial sign convention: the start-end component is negated and the
    /// end-end component taken as-is so tension reads positive at both
    /// ends. Truss vectors carry no shear or moment.
    pub fn from_local_forces(kind: MemberKind, qe: &FeVec) -> Self {
        match kind {
            MemberKind::Truss => Self {
                start: EndForces {
                    axial: -qe[0],
                    shear: 0.0,
                    moment: 0.0,
                },
                end: EndForces {
                    axial: qe[2],
                    shear: 0.0,
                    moment: 0.0,
                },
            },
            MemberKind::Frame => Self {
                start: EndForces {
                    axial: -qe[0],
                    shear: qe[1],
                    moment: qe[2],
                },
                end: EndForces {
                    axial: qe[3],
                    shear: -qe[4],
                    moment: qe[5],
                },
            },
        }
    }
}

/// The completed solution of a linear static run
#[derive(Debug, Clone)]
pub struct Solution {
    /// The DOF numbering the solution is expressed in
    pub(crate) dof: DofTable,
    /// Full displacement vector, unknown block then known block
    pub(crate) displacements: FeVec,
    /// Reaction vector over the restrained block
    pub(crate) reactions: FeVec,
    /// Recoverable modeling problems encountered during the run
    pub warnings: Vec<ModelWarning>,
}

impl Solution {
    /// The DOF table used by this solution
    pub fn dof_table(&self) -> &DofTable {
        &self.dof
    }

    /// Displacement value at a global DOF index
    pub fn displacement_at(&self, dof: usize) -> f64 {
        self.displacements[dof]
    }

    /// Reaction value at a global DOF index, zero for free DOFs
    pub fn reaction_at(&self, dof: usize) -> f64 {
        if self.dof.is_restrained(dof) {
            self.reactions[dof - self.dof.unknown()]
        } else {
            0.0
        }
    }
}
