//! Global DOF numbering
//!
//! Every node owns three displacement components (X translation, Y
//! translation, Z rotation). Numbering is two-pass: unknown components get
//! the indices `[0, U)` first, restrained components get `[U, N)` after,
//! both in node traversal order. All downstream partitioning relies on
//! this layout.

use std::collections::HashMap;

use crate::elements::{Node, Support};
use crate::error::{AnalysisError, AnalysisResult};

/// Per-component numbering state during the marking pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Unassigned,
    Restrained,
}

/// Global equation indices for every nodal displacement component
#[derive(Debug, Clone)]
pub struct DofTable {
    /// Per node, indices in component order [TX, TY, RZ]
    dofs: Vec<[usize; 3]>,
    /// Node id to row position
    node_index: HashMap<u32, usize>,
    /// Number of unknown (free) DOFs, occupying `[0, unknown)`
    unknown: usize,
    /// Total DOF count
    total: usize,
}

impl DofTable {
    /// Number all DOFs for the given nodes and supports
    ///
    /// A support referencing a node id that does not exist is a fatal
    /// input error.
    pub fn number(nodes: &[Node], supports: &[Support]) -> AnalysisResult<Self> {
        let mut node_index = HashMap::with_capacity(nodes.len());
        for (row, node) in nodes.iter().enumerate() {
            node_index.insert(node.id, row);
        }

        // Phase 1: mark restrained components
        let mut slots = vec![[Slot::Unassigned; 3]; nodes.len()];
        for support in supports {
            let &row = node_index
                .get(&support.node)
                .ok_or(AnalysisError::NodeNotFound(support.node))?;
            for (col, restrained) in support.restrained().iter().enumerate() {
                if *restrained {
                    slots[row][col] = Slot::Restrained;
                }
            }
        }

        // Phase 2: number unknowns into the low block, then restrained
        // components into the high block, both in node order.
        let mut dofs = vec![[0usize; 3]; nodes.len()];
        let mut next = 0;
        for (row, node_slots) in slots.iter().enumerate() {
            for (col, slot) in node_slots.iter().enumerate() {
                if *slot == Slot::Unassigned {
                    dofs[row][col] = next;
                    next += 1;
                }
            }
        }
        let unknown = next;
        for (row, node_slots) in slots.iter().enumerate() {
            for (col, slot) in node_slots.iter().enumerate() {
                if *slot == Slot::Restrained {
                    dofs[row][col] = next;
                    next += 1;
                }
            }
        }

        Ok(Self {
            dofs,
            node_index,
            unknown,
            total: next,
        })
    }

    /// Total number of DOFs
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of unknown (free) DOFs
    pub fn unknown(&self) -> usize {
        self.unknown
    }

    /// Number of known (restrained) DOFs
    pub fn known(&self) -> usize {
        self.total - self.unknown
    }

    /// Global indices of a node's components, in order [TX, TY, RZ]
    pub fn node_dofs(&self, node: u32) -> Option<[usize; 3]> {
        self.node_index.get(&node).map(|&row| self.dofs[row])
    }

    /// Check whether a global index belongs to the restrained block
    pub fn is_restrained(&self, dof: usize) -> bool {
        dof >= self.unknown
    }
}
