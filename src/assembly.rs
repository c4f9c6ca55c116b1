//! Global stiffness and load assembly
//!
//! Element contributions are scattered into a dense global system
//! partitioned at the unknown-DOF count U:
//!
//! ```text
//! | K11 K12 | * | Du |  + | QF1 | = | Q1     |
//! | K21 K22 |   | Dk |    | QF2 |   | Q2 + R |
//! ```
//!
//! The partition blocks are index ranges into one matrix, not copies.

use crate::dof::DofTable;
use crate::error::{AnalysisError, AnalysisResult};
use crate::math::{self, Mat, Vec as FeVec};
use crate::model::Model;

/// The assembled partitioned global system
#[derive(Debug, Clone)]
pub(crate) struct GlobalSystem {
    /// Full global stiffness matrix, N x N
    k: Mat,
    /// Equivalent nodal loads from member fixed-end forces
    qf: FeVec,
    /// Direct nodal loads
    q: FeVec,
    /// Partition boundary: unknown DOFs occupy `[0, unknown)`
    unknown: usize,
}

impl GlobalSystem {
    /// Assemble the global stiffness matrix and load vectors
    ///
    /// Requires every member's element data to be prepared. Entries from
    /// different members sharing a DOF sum, never overwrite.
    pub fn assemble(model: &Model, dof: &DofTable) -> Self {
        let n = dof.total();
        let mut k = Mat::zeros(n, n);
        let mut qf = FeVec::zeros(n);
        let mut q = FeVec::zeros(n);

        for member in &model.members {
            let data = member.element().unwrap();
            let ke = data.transform.transpose() * &data.k_local * &data.transform;

            for (i, &ii) in data.dofs.iter().enumerate() {
                for (j, &jj) in data.dofs.iter().enumerate() {
                    k[(ii, jj)] += ke[(i, j)];
                }
            }

            if let Some(fe) = &data.fixed_end {
                let qfe = data.transform.transpose() * fe;
                for (i, &ii) in data.dofs.iter().enumerate() {
                    qf[ii] += qfe[i];
                }
            }
        }

        for load in &model.node_loads {
            let node_dofs = dof.node_dofs(load.node).unwrap();
            for (i, value) in load.as_array().iter().enumerate() {
                q[node_dofs[i]] += value;
            }
        }

        Self {
            k,
            qf,
            q,
            unknown: dof.unknown(),
        }
    }

    /// Solve the first partition row for the unknown displacements:
    /// `Du = K11^-1 (Q1 - QF1 - K12 Dk)`
    ///
    /// A singular K11 means the structure is kinematically unstable or
    /// insufficiently supported and is a fatal modeling error.
    pub fn solve_displacements(&self, dk: &FeVec) -> AnalysisResult<FeVec> {
        let n = self.k.nrows();
        let u = self.unknown;

        let k11 = self.k.view((0, 0), (u, u)).clone_owned();
        let k12 = self.k.view((0, u), (u, n - u));
        let rhs = self.q.rows(0, u) - self.qf.rows(0, u) - &k12 * dk;

        math::solve_linear_system(&k11, &rhs).ok_or(AnalysisError::SingularMatrix)
    }

    /// Recover the reactions from the second partition row:
    /// `R = K21 Du + K22 Dk + QF2 - Q2`
    pub fn reactions(&self, du: &FeVec, dk: &FeVec) -> FeVec {
        let n = self.k.nrows();
        let u = self.unknown;

        let k21 = self.k.view((u, 0), (n - u, u));
        let k22 = self.k.view((u, u), (n - u, n - u));

        &k21 * du + &k22 * dk + self.qf.rows(u, n - u) - self.q.rows(u, n - u)
    }

    /// Full assembled stiffness matrix
    #[cfg(test)]
    pub fn stiffness(&self) -> &Mat {
        &self.k
    }
}
