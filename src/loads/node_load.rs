//! Node loads - forces and a moment applied directly at a node

use serde::{Deserialize, Serialize};

/// A load applied directly to a node, in global coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeLoad {
    /// Node the load acts on
    pub node: u32,
    /// Force in global X
    pub fx: f64,
    /// Force in global Y
    pub fy: f64,
    /// Moment about global Z
    pub mz: f64,
}

impl NodeLoad {
    /// Create a new node load with all components
    pub fn new(node: u32, fx: f64, fy: f64, mz: f64) -> Self {
        Self { node, fx, fy, mz }
    }

    /// Create a force-only node load
    pub fn force(node: u32, fx: f64, fy: f64) -> Self {
        Self::new(node, fx, fy, 0.0)
    }

    /// Create a moment-only node load
    pub fn moment(node: u32, mz: f64) -> Self {
        Self::new(node, 0.0, 0.0, mz)
    }

    /// Create a load in global X
    pub fn fx(node: u32, value: f64) -> Self {
        Self::force(node, value, 0.0)
    }

    /// Create a load in global Y
    pub fn fy(node: u32, value: f64) -> Self {
        Self::force(node, 0.0, value)
    }

    /// Get the load components in DOF order [FX, FY, MZ]
    pub fn as_array(&self) -> [f64; 3] {
        [self.fx, self.fy, self.mz]
    }
}
