//! Distributed loads on members

use serde::{Deserialize, Serialize};

/// A trapezoidal distributed load on a frame member
///
/// The load acts over the sub-span `[start, end]` measured along the
/// member's local axis from the start node, with intensity `w_start` at
/// `start` varying linearly to `w_end` at `end`. Intensities are positive
/// in the member's local +y direction, so gravity loads on a horizontal
/// beam are negative. A span of `(0, 0)` is shorthand for the entire
/// member length.
///
/// Distributed loads are only valid on frame members; one applied to a
/// truss member is skipped with a warning during analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Member the load acts on
    pub member: u32,
    /// Start position along the local axis
    pub start: f64,
    /// End position along the local axis
    pub end: f64,
    /// Intensity at the start position
    pub w_start: f64,
    /// Intensity at the end position
    pub w_end: f64,
}

impl DistributedLoad {
    /// Create a new trapezoidal load over `[start, end]`
    pub fn new(member: u32, start: f64, end: f64, w_start: f64, w_end: f64) -> Self {
        Self {
            member,
            start,
            end,
            w_start,
            w_end,
        }
    }

    /// Create a uniform load over the full member length
    pub fn uniform(member: u32, w: f64) -> Self {
        Self::new(member, 0.0, 0.0, w, w)
    }

    /// Create a uniform downward load (negative local y) over the full length
    pub fn uniform_downward(member: u32, w: f64) -> Self {
        Self::uniform(member, -w.abs())
    }

    /// Check if the load covers the whole member via the `(0, 0)` shorthand
    pub fn is_full_span(&self) -> bool {
        self.start == 0.0 && self.end == 0.0
    }

    /// Check if the load is uniform (constant intensity)
    pub fn is_uniform(&self) -> bool {
        (self.w_start - self.w_end).abs() < 1e-10
    }
}
