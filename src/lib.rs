//! frame2d - A native Rust direct stiffness solver for 2D skeletal structures
//!
//! This library performs linear static analysis of pin-jointed trusses and
//! rigid-jointed frames in the plane:
//! - Two-pass DOF numbering (unknowns first, restrained last)
//! - Truss and frame element stiffness and transformation matrices
//! - Equivalent nodal loads from trapezoidal distributed member loads
//! - Partitioned global assembly and direct solution
//! - Recovery of support reactions and member end forces
//!
//! ## Example
//! ```rust
//! use frame2d::prelude::*;
//!
//! let mut model = Model::new();
//!
//! // Material and section
//! model.add_material(Material::steel(1)).unwrap();
//! model.add_section(Section::rectangular(1, "300x500", 0.3, 0.5)).unwrap();
//!
//! // A 4 m cantilever
//! model.add_node(Node::new(1, 0.0, 0.0)).unwrap();
//! model.add_node(Node::new(2, 4.0, 0.0)).unwrap();
//! model.add_member(Member::frame(1, 1, 2, 1, 1)).unwrap();
//! model.add_support(Support::fixed(1)).unwrap();
//!
//! // 10 kN downward at the tip
//! model.add_node_load(NodeLoad::fy(2, -10_000.0)).unwrap();
//!
//! model.analyze_linear().unwrap();
//!
//! let tip = model.node_displacement(2).unwrap();
//! assert!(tip.dy < 0.0);
//! ```

mod assembly;

pub mod dof;
pub mod elements;
pub mod error;
pub mod io;
pub mod loads;
pub mod math;
pub mod model;
pub mod report;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::dof::DofTable;
    pub use crate::elements::{Material, Member, MemberKind, Node, Section, Support};
    pub use crate::error::{AnalysisError, AnalysisResult, ModelWarning};
    pub use crate::loads::{DistributedLoad, NodeLoad};
    pub use crate::model::Model;
    pub use crate::results::{MemberEndForces, NodeDisplacement, Reactions, Solution};
}
