//! Support conditions

use serde::{Deserialize, Serialize};

/// Support conditions at a node
///
/// Restrained components are prescribed to zero displacement; the solver's
/// partitioned equations accept a general prescribed-displacement vector,
/// but model input only produces zeros.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Support {
    /// Node the support acts on
    pub node: u32,
    /// Restrained in X translation
    pub tx: bool,
    /// Restrained in Y translation
    pub ty: bool,
    /// Restrained in Z rotation
    pub rz: bool,
}

impl Support {
    /// Create a support with specific restraints
    pub fn new(node: u32, tx: bool, ty: bool, rz: bool) -> Self {
        Self { node, tx, ty, rz }
    }

    /// Create a fully fixed support (all three components restrained)
    pub fn fixed(node: u32) -> Self {
        Self::new(node, true, true, true)
    }

    /// Create a pinned support (translations restrained, rotation free)
    pub fn pinned(node: u32) -> Self {
        Self::new(node, true, true, false)
    }

    /// Create a roller restraining Y translation only
    pub fn roller_y(node: u32) -> Self {
        Self::new(node, false, true, false)
    }

    /// Create a roller restraining X translation only
    pub fn roller_x(node: u32) -> Self {
        Self::new(node, true, false, false)
    }

    /// Get the restraint flags in component order [TX, TY, RZ]
    pub fn restrained(&self) -> [bool; 3] {
        [self.tx, self.ty, self.rz]
    }

    /// Check if any component is restrained
    pub fn is_supported(&self) -> bool {
        self.tx || self.ty || self.rz
    }

    /// Count restrained components
    pub fn num_restrained(&self) -> usize {
        self.restrained().iter().filter(|&&r| r).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_support() {
        let support = Support::fixed(1);
        assert_eq!(support.restrained(), [true, true, true]);
        assert_eq!(support.num_restrained(), 3);
    }

    #[test]
    fn test_pinned_support() {
        let support = Support::pinned(2);
        assert!(support.tx && support.ty);
        assert!(!support.rz);
        assert_eq!(support.num_restrained(), 2);
    }

    #[test]
    fn test_roller_support() {
        let support = Support::roller_y(3);
        assert_eq!(support.restrained(), [false, true, false]);
        assert!(support.is_supported());
    }
}
