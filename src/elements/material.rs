//! Material properties

use serde::{Deserialize, Serialize};

/// Material properties for structural members
///
/// Only the elastic modulus enters the stiffness formulation; Poisson's
/// ratio and density are carried through from the model description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Unique material identifier
    pub id: u32,
    /// Material name for reporting
    pub name: String,
    /// Modulus of elasticity (Young's modulus)
    pub e: f64,
    /// Poisson's ratio
    pub nu: f64,
    /// Density
    pub rho: f64,
}

impl Material {
    /// Create a new material with given properties
    pub fn new(id: u32, name: &str, e: f64, nu: f64, rho: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            e,
            nu,
            rho,
        }
    }

    /// Create a standard structural steel material (SI base units)
    pub fn steel(id: u32) -> Self {
        Self::new(id, "Steel", 200e9, 0.3, 7850.0)
    }
}
