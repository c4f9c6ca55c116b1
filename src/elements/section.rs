//! Cross-section properties for members

use serde::{Deserialize, Serialize};

/// Cross-section properties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Unique section identifier
    pub id: u32,
    /// Section name for reporting
    pub name: String,
    /// Cross-sectional area
    pub a: f64,
    /// Second moment of area about the bending axis
    pub i: f64,
}

impl Section {
    /// Create a new section with basic properties
    pub fn new(id: u32, name: &str, a: f64, i: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            a,
            i,
        }
    }

    /// Create a rectangular section from width and depth
    pub fn rectangular(id: u32, name: &str, width: f64, depth: f64) -> Self {
        let a = width * depth;
        let i = width * depth.powi(3) / 12.0;
        Self::new(id, name, a, i)
    }

    /// Get the radius of gyration
    pub fn radius_of_gyration(&self) -> f64 {
        (self.i / self.a).sqrt()
    }
}
