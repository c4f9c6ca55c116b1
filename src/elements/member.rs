//! Member element - a 2D truss bar or frame beam/column

use serde::{Deserialize, Serialize};

use crate::math::{Mat, Vec as FeVec};

/// Element variant of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberKind {
    /// Pin-jointed axial-only element, two translations per end
    Truss,
    /// Rigid-jointed beam element, two translations plus a rotation per end
    Frame,
}

impl MemberKind {
    /// Number of DOF components per member end
    pub fn dofs_per_end(&self) -> usize {
        match self {
            MemberKind::Truss => 2,
            MemberKind::Frame => 3,
        }
    }

    /// Total number of DOFs in the element's local vector
    pub fn dof_count(&self) -> usize {
        2 * self.dofs_per_end()
    }
}

/// Data derived for a member during analysis
///
/// The model records themselves stay read-only; everything the engine
/// computes per member lives here.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Global DOF indices in endpoint order (4 for truss, 6 for frame)
    pub dofs: Vec<usize>,
    /// Member length
    pub length: f64,
    /// Direction cosine (cos of the member angle)
    pub c: f64,
    /// Direction sine
    pub s: f64,
    /// Local stiffness matrix
    pub k_local: Mat,
    /// Local-to-global transformation matrix
    pub transform: Mat,
    /// Accumulated fixed-end forces from distributed loads, local coords
    pub fixed_end: Option<FeVec>,
    /// Internal end forces after solution, local coords
    pub end_forces: Option<FeVec>,
}

/// A 2D structural member connecting two nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique member identifier
    pub id: u32,
    /// Identifier of the start node
    pub i_node: u32,
    /// Identifier of the end node
    pub j_node: u32,
    /// Element variant
    pub kind: MemberKind,
    /// Identifier of the material
    pub material: u32,
    /// Identifier of the section
    pub section: u32,

    /// Derived element data, populated during analysis
    #[serde(skip)]
    pub(crate) element: Option<ElementData>,
}

impl Member {
    /// Create a new member
    pub fn new(id: u32, i_node: u32, j_node: u32, kind: MemberKind, material: u32, section: u32) -> Self {
        Self {
            id,
            i_node,
            j_node,
            kind,
            material,
            section,
            element: None,
        }
    }

    /// Create a truss member
    pub fn truss(id: u32, i_node: u32, j_node: u32, material: u32, section: u32) -> Self {
        Self::new(id, i_node, j_node, MemberKind::Truss, material, section)
    }

    /// Create a frame member
    pub fn frame(id: u32, i_node: u32, j_node: u32, material: u32, section: u32) -> Self {
        Self::new(id, i_node, j_node, MemberKind::Frame, material, section)
    }

    /// Get the member length, available after analysis
    pub fn length(&self) -> Option<f64> {
        self.element.as_ref().map(|e| e.length)
    }

    /// Get the derived element data, available after analysis
    pub fn element(&self) -> Option<&ElementData> {
        self.element.as_ref()
    }

    /// Get the raw local end-force vector, available after solution
    pub fn local_forces(&self) -> Option<&FeVec> {
        self.element.as_ref().and_then(|e| e.end_forces.as_ref())
    }
}
