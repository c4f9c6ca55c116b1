//! Structural model - main container and analysis driver

use std::collections::HashMap;

use log::{debug, warn};

use crate::assembly::GlobalSystem;
use crate::dof::DofTable;
use crate::elements::{ElementData, Material, Member, MemberKind, Node, Section, Support};
use crate::error::{AnalysisError, AnalysisResult, ModelWarning};
use crate::loads::{DistributedLoad, NodeLoad};
use crate::math::{self, Mat, Vec as FeVec};
use crate::results::{MemberEndForces, NodeDisplacement, Reactions, Solution};

/// The 2D structural model
///
/// Records are stored in insertion order; node and member order drives DOF
/// numbering and reporting. Identifier lookups go through indexes built as
/// records are added, so assembly loops never scan.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Nodes in the model
    pub nodes: Vec<Node>,
    /// Materials in the model
    pub materials: Vec<Material>,
    /// Sections in the model
    pub sections: Vec<Section>,
    /// Members in the model
    pub members: Vec<Member>,
    /// Support conditions
    pub supports: Vec<Support>,
    /// Loads applied directly at nodes
    pub node_loads: Vec<NodeLoad>,
    /// Distributed loads on members
    pub member_loads: Vec<DistributedLoad>,

    node_index: HashMap<u32, usize>,
    material_index: HashMap<u32, usize>,
    section_index: HashMap<u32, usize>,
    member_index: HashMap<u32, usize>,

    solution: Option<Solution>,
}

impl Model {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a node to the model
    pub fn add_node(&mut self, node: Node) -> AnalysisResult<()> {
        if self.node_index.contains_key(&node.id) {
            return Err(AnalysisError::DuplicateId(node.id));
        }
        self.node_index.insert(node.id, self.nodes.len());
        self.nodes.push(node);
        self.solution = None;
        Ok(())
    }

    /// Add a material to the model
    pub fn add_material(&mut self, material: Material) -> AnalysisResult<()> {
        if self.material_index.contains_key(&material.id) {
            return Err(AnalysisError::DuplicateId(material.id));
        }
        self.material_index.insert(material.id, self.materials.len());
        self.materials.push(material);
        Ok(())
    }

    /// Add a section to the model
    pub fn add_section(&mut self, section: Section) -> AnalysisResult<()> {
        if self.section_index.contains_key(&section.id) {
            return Err(AnalysisError::DuplicateId(section.id));
        }
        self.section_index.insert(section.id, self.sections.len());
        self.sections.push(section);
        Ok(())
    }

    /// Add a member to the model
    ///
    /// Every reference must resolve: unknown node, material or section ids
    /// are fatal input errors.
    pub fn add_member(&mut self, member: Member) -> AnalysisResult<()> {
        if !self.node_index.contains_key(&member.i_node) {
            return Err(AnalysisError::NodeNotFound(member.i_node));
        }
        if !self.node_index.contains_key(&member.j_node) {
            return Err(AnalysisError::NodeNotFound(member.j_node));
        }
        if !self.material_index.contains_key(&member.material) {
            return Err(AnalysisError::MaterialNotFound(member.material));
        }
        if !self.section_index.contains_key(&member.section) {
            return Err(AnalysisError::SectionNotFound(member.section));
        }
        if self.member_index.contains_key(&member.id) {
            return Err(AnalysisError::DuplicateId(member.id));
        }

        self.member_index.insert(member.id, self.members.len());
        self.members.push(member);
        self.solution = None;
        Ok(())
    }

    /// Add a support condition
    ///
    /// Several supports on the same node combine their restraints.
    pub fn add_support(&mut self, support: Support) -> AnalysisResult<()> {
        if !self.node_index.contains_key(&support.node) {
            return Err(AnalysisError::NodeNotFound(support.node));
        }
        self.supports.push(support);
        self.solution = None;
        Ok(())
    }

    /// Add a load applied directly at a node
    pub fn add_node_load(&mut self, load: NodeLoad) -> AnalysisResult<()> {
        if !self.node_index.contains_key(&load.node) {
            return Err(AnalysisError::NodeNotFound(load.node));
        }
        self.node_loads.push(load);
        self.solution = None;
        Ok(())
    }

    /// Add a distributed load to a member
    pub fn add_member_load(&mut self, load: DistributedLoad) -> AnalysisResult<()> {
        if !self.member_index.contains_key(&load.member) {
            return Err(AnalysisError::MemberNotFound(load.member));
        }
        self.member_loads.push(load);
        self.solution = None;
        Ok(())
    }

    // ========================
    // Analysis
    // ========================

    /// Run the linear static analysis
    ///
    /// Numbers the DOFs, formulates every element, assembles and solves the
    /// partitioned system, then recovers reactions and member end forces.
    /// The completed solution is stored on the model for the result
    /// accessors.
    pub fn analyze_linear(&mut self) -> AnalysisResult<()> {
        self.solution = None;

        let dof = DofTable::number(&self.nodes, &self.supports)?;
        debug!("numbered {} dofs, {} unknown", dof.total(), dof.unknown());

        self.prepare_elements(&dof)?;
        let warnings = self.accumulate_fixed_end_forces();
        for warning in &warnings {
            warn!("{warning}");
        }

        let system = GlobalSystem::assemble(self, &dof);
        debug!("assembled {0}x{0} global system", dof.total());

        // Prescribed displacements are zero for all model input; the
        // partitioned equations accept a general vector.
        let dk = FeVec::zeros(dof.known());
        let du = system.solve_displacements(&dk)?;
        let reactions = system.reactions(&du, &dk);

        let mut displacements = FeVec::zeros(dof.total());
        displacements.rows_mut(0, dof.unknown()).copy_from(&du);
        displacements.rows_mut(dof.unknown(), dof.known()).copy_from(&dk);

        self.recover_element_forces(&displacements);

        self.solution = Some(Solution {
            dof,
            displacements,
            reactions,
            warnings,
        });
        Ok(())
    }

    /// Compute geometry, DOF lists and elemental matrices for every member
    pub(crate) fn prepare_elements(&mut self, dof: &DofTable) -> AnalysisResult<()> {
        for idx in 0..self.members.len() {
            let (id, i_id, j_id, kind, mat_id, sec_id) = {
                let m = &self.members[idx];
                (m.id, m.i_node, m.j_node, m.kind, m.material, m.section)
            };

            let i = &self.nodes[self.node_index[&i_id]];
            let j = &self.nodes[self.node_index[&j_id]];
            let dx = j.x - i.x;
            let dy = j.y - i.y;
            let length = i.distance_to(j);

            if length < 1e-10 {
                return Err(AnalysisError::ZeroLengthMember {
                    member: id,
                    i_node: i_id,
                    j_node: j_id,
                });
            }

            let c = dx / length;
            let s = dy / length;

            let e = self.materials[self.material_index[&mat_id]].e;
            let section = &self.sections[self.section_index[&sec_id]];
            let (area, inertia) = (section.a, section.i);

            let per_end = kind.dofs_per_end();
            let mut dofs = Vec::with_capacity(kind.dof_count());
            for node_id in [i_id, j_id] {
                let node_dofs = dof.node_dofs(node_id).unwrap();
                dofs.extend_from_slice(&node_dofs[..per_end]);
            }

            let (k_local, transform) = match kind {
                MemberKind::Truss => {
                    let k = math::truss_local_stiffness(e, area, length);
                    let t = math::truss_transformation(c, s);
                    (
                        Mat::from_column_slice(4, 4, k.as_slice()),
                        Mat::from_column_slice(4, 4, t.as_slice()),
                    )
                }
                MemberKind::Frame => {
                    let k = math::frame_local_stiffness(e, area, inertia, length);
                    let t = math::frame_transformation(c, s);
                    (
                        Mat::from_column_slice(6, 6, k.as_slice()),
                        Mat::from_column_slice(6, 6, t.as_slice()),
                    )
                }
            };

            self.members[idx].element = Some(ElementData {
                dofs,
                length,
                c,
                s,
                k_local,
                transform,
                fixed_end: None,
                end_forces: None,
            });
        }
        Ok(())
    }

    /// Accumulate fixed-end forces from distributed loads into their members
    ///
    /// Loads on truss members and loads with malformed spans are skipped
    /// with a warning; every other load adds into the member's single
    /// fixed-end vector. Requires prepared elements.
    pub(crate) fn accumulate_fixed_end_forces(&mut self) -> Vec<ModelWarning> {
        let mut warnings = Vec::new();

        for load in &self.member_loads {
            let idx = self.member_index[&load.member];
            let member_id = self.members[idx].id;

            if self.members[idx].kind != MemberKind::Frame {
                warnings.push(ModelWarning::DistributedLoadOnTruss { member: member_id });
                continue;
            }

            let data = self.members[idx].element.as_mut().unwrap();
            // Load intensities are positive in local +y; the quadrature
            // routine treats -y as positive.
            let result = math::frame_fixed_end_forces(
                data.length,
                load.start,
                -load.w_start,
                load.end,
                -load.w_end,
            );

            match result {
                Ok(qf) => {
                    let qf = FeVec::from_column_slice(qf.as_slice());
                    *data.fixed_end.get_or_insert_with(|| FeVec::zeros(6)) += qf;
                }
                Err(source) => warnings.push(ModelWarning::InvalidLoadSpan {
                    member: member_id,
                    source,
                }),
            }
        }

        warnings
    }

    /// Back-substitute nodal displacements into each element:
    /// `qe = k T De (+ qF)`
    fn recover_element_forces(&mut self, displacements: &FeVec) {
        for member in &mut self.members {
            let data = member.element.as_mut().unwrap();

            let mut de = FeVec::zeros(data.dofs.len());
            for (i, &dof) in data.dofs.iter().enumerate() {
                de[i] = displacements[dof];
            }

            let mut qe = &data.k_local * &data.transform * de;
            if let Some(fe) = &data.fixed_end {
                qe += fe;
            }
            data.end_forces = Some(qe);
        }
    }

    // ========================
    // Result Access Methods
    // ========================

    /// Get the stored solution, if the model has been analyzed
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Check if the model has been analyzed
    pub fn is_analyzed(&self) -> bool {
        self.solution.is_some()
    }

    /// Get the displacement components of a node
    pub fn node_displacement(&self, node: u32) -> AnalysisResult<NodeDisplacement> {
        let solution = self.solution.as_ref().ok_or(AnalysisError::NotAnalyzed)?;
        let dofs = solution
            .dof_table()
            .node_dofs(node)
            .ok_or(AnalysisError::NodeNotFound(node))?;
        Ok(NodeDisplacement::from_array(
            dofs.map(|d| solution.displacement_at(d)),
        ))
    }

    /// Get the reaction components of a node (zero at free components)
    pub fn node_reactions(&self, node: u32) -> AnalysisResult<Reactions> {
        let solution = self.solution.as_ref().ok_or(AnalysisError::NotAnalyzed)?;
        let dofs = solution
            .dof_table()
            .node_dofs(node)
            .ok_or(AnalysisError::NodeNotFound(node))?;
        Ok(Reactions::from_array(dofs.map(|d| solution.reaction_at(d))))
    }

    /// Get the internal end forces of a member
    pub fn member_end_forces(&self, member: u32) -> AnalysisResult<MemberEndForces> {
        let &idx = self
            .member_index
            .get(&member)
            .ok_or(AnalysisError::MemberNotFound(member))?;
        let m = &self.members[idx];
        let qe = m.local_forces().ok_or(AnalysisError::NotAnalyzed)?;
        Ok(MemberEndForces::from_local_forces(m.kind, qe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_truss_model(force: f64) -> Model {
        let mut model = Model::new();
        model.add_material(Material::new(1, "Unit", 1.0, 0.3, 1.0)).unwrap();
        model.add_section(Section::new(1, "Unit", 1.0, 1.0)).unwrap();
        model.add_node(Node::new(1, 0.0, 0.0)).unwrap();
        model.add_node(Node::new(2, 1.0, 0.0)).unwrap();
        model.add_member(Member::truss(1, 1, 2, 1, 1)).unwrap();
        model.add_support(Support::fixed(1)).unwrap();
        // Only the axial translation at node 2 is left unknown
        model.add_support(Support::new(2, false, true, true)).unwrap();
        model.add_node_load(NodeLoad::fx(2, force)).unwrap();
        model
    }

    #[test]
    fn test_single_truss_member_axial() {
        let force = 2.5;
        let mut model = unit_truss_model(force);
        model.analyze_linear().unwrap();

        // Stiffness EA/L = 1, so the axial displacement equals the force
        let disp = model.node_displacement(2).unwrap();
        assert_relative_eq!(disp.dx, force, epsilon = 1e-12);
        assert_relative_eq!(disp.dy, 0.0);

        let rxn = model.node_reactions(1).unwrap();
        assert_relative_eq!(rxn.fx, -force, epsilon = 1e-12);
        assert_relative_eq!(rxn.fy, 0.0);

        // Tension reads positive at both ends
        let forces = model.member_end_forces(1).unwrap();
        assert_relative_eq!(forces.start.axial, force, epsilon = 1e-12);
        assert_relative_eq!(forces.end.axial, force, epsilon = 1e-12);
    }

    #[test]
    fn test_cantilever_tip_deflection() {
        let (length, p) = (2.0, 1.0);
        let mut model = Model::new();
        model.add_material(Material::new(1, "Unit", 1.0, 0.3, 1.0)).unwrap();
        model.add_section(Section::new(1, "Unit", 1.0, 1.0)).unwrap();
        model.add_node(Node::new(1, 0.0, 0.0)).unwrap();
        model.add_node(Node::new(2, length, 0.0)).unwrap();
        model.add_member(Member::frame(1, 1, 2, 1, 1)).unwrap();
        model.add_support(Support::fixed(1)).unwrap();
        model.add_node_load(NodeLoad::fy(2, -p)).unwrap();
        model.analyze_linear().unwrap();

        // Closed form: dy = -PL^3/3EI, rz = -PL^2/2EI
        let disp = model.node_displacement(2).unwrap();
        assert_relative_eq!(disp.dy, -p * length.powi(3) / 3.0, epsilon = 1e-9);
        assert_relative_eq!(disp.rz, -p * length.powi(2) / 2.0, epsilon = 1e-9);

        let rxn = model.node_reactions(1).unwrap();
        assert_relative_eq!(rxn.fy, p, epsilon = 1e-9);
        assert_relative_eq!(rxn.mz, p * length, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_length_member_is_fatal() {
        let mut model = Model::new();
        model.add_material(Material::new(1, "Unit", 1.0, 0.3, 1.0)).unwrap();
        model.add_section(Section::new(1, "Unit", 1.0, 1.0)).unwrap();
        model.add_node(Node::new(1, 1.0, 1.0)).unwrap();
        model.add_node(Node::new(2, 1.0, 1.0)).unwrap();
        model.add_member(Member::frame(1, 1, 2, 1, 1)).unwrap();
        model.add_support(Support::fixed(1)).unwrap();

        let result = model.analyze_linear();
        assert!(matches!(
            result,
            Err(AnalysisError::ZeroLengthMember { member: 1, .. })
        ));
        assert!(!model.is_analyzed());
    }

    #[test]
    fn test_unstable_structure_is_fatal() {
        let mut model = Model::new();
        model.add_material(Material::new(1, "Unit", 1.0, 0.3, 1.0)).unwrap();
        model.add_section(Section::new(1, "Unit", 1.0, 1.0)).unwrap();
        model.add_node(Node::new(1, 0.0, 0.0)).unwrap();
        model.add_node(Node::new(2, 1.0, 0.0)).unwrap();
        model.add_member(Member::truss(1, 1, 2, 1, 1)).unwrap();
        // Node 2 keeps a transverse rigid-body mode
        model.add_support(Support::fixed(1)).unwrap();
        model.add_node_load(NodeLoad::fx(2, 1.0)).unwrap();

        let result = model.analyze_linear();
        assert!(matches!(result, Err(AnalysisError::SingularMatrix)));
    }

    #[test]
    fn test_distributed_load_on_truss_warns() {
        let mut model = unit_truss_model(1.0);
        model.add_member_load(DistributedLoad::uniform(1, -4.0)).unwrap();
        model.analyze_linear().unwrap();

        let warnings = &model.solution().unwrap().warnings;
        assert_eq!(
            warnings.as_slice(),
            [ModelWarning::DistributedLoadOnTruss { member: 1 }]
        );

        // The load contributed nothing
        let disp = model.node_displacement(2).unwrap();
        assert_relative_eq!(disp.dx, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_span_warns_and_skips() {
        let mut model = Model::new();
        model.add_material(Material::new(1, "Unit", 1.0, 0.3, 1.0)).unwrap();
        model.add_section(Section::new(1, "Unit", 1.0, 1.0)).unwrap();
        model.add_node(Node::new(1, 0.0, 0.0)).unwrap();
        model.add_node(Node::new(2, 2.0, 0.0)).unwrap();
        model.add_member(Member::frame(1, 1, 2, 1, 1)).unwrap();
        model.add_support(Support::fixed(1)).unwrap();
        // Reversed span
        model.add_member_load(DistributedLoad::new(1, 1.5, 0.5, -3.0, -3.0)).unwrap();
        model.analyze_linear().unwrap();

        let solution = model.solution().unwrap();
        assert_eq!(solution.warnings.len(), 1);
        assert!(matches!(
            solution.warnings[0],
            ModelWarning::InvalidLoadSpan { member: 1, .. }
        ));

        let disp = model.node_displacement(2).unwrap();
        assert_relative_eq!(disp.dy, 0.0);
    }

    #[test]
    fn test_multiple_loads_accumulate() {
        let (length, w) = (4.0, 3.0);
        let build = |loads: &[DistributedLoad]| {
            let mut model = Model::new();
            model.add_material(Material::new(1, "Unit", 1.0, 0.3, 1.0)).unwrap();
            model.add_section(Section::new(1, "Unit", 1.0, 1.0)).unwrap();
            model.add_node(Node::new(1, 0.0, 0.0)).unwrap();
            model.add_node(Node::new(2, length, 0.0)).unwrap();
            model.add_member(Member::frame(1, 1, 2, 1, 1)).unwrap();
            model.add_support(Support::fixed(1)).unwrap();
            for load in loads {
                model.add_member_load(load.clone()).unwrap();
            }
            model.analyze_linear().unwrap();
            model
        };

        let split = build(&[
            DistributedLoad::uniform(1, -w / 2.0),
            DistributedLoad::uniform(1, -w / 2.0),
        ]);
        let whole = build(&[DistributedLoad::uniform(1, -w)]);

        let ds = split.node_displacement(2).unwrap();
        let dw = whole.node_displacement(2).unwrap();
        assert_relative_eq!(ds.dy, dw.dy, epsilon = 1e-12);
        assert_relative_eq!(ds.rz, dw.rz, epsilon = 1e-12);
    }

    #[test]
    fn test_not_analyzed_error() {
        let model = unit_truss_model(1.0);
        assert!(matches!(
            model.node_displacement(1),
            Err(AnalysisError::NotAnalyzed)
        ));
    }

    #[test]
    fn test_duplicate_and_missing_references() {
        let mut model = Model::new();
        model.add_material(Material::new(1, "Unit", 1.0, 0.3, 1.0)).unwrap();
        model.add_section(Section::new(1, "Unit", 1.0, 1.0)).unwrap();
        model.add_node(Node::new(1, 0.0, 0.0)).unwrap();

        assert!(matches!(
            model.add_node(Node::new(1, 1.0, 0.0)),
            Err(AnalysisError::DuplicateId(1))
        ));
        assert!(matches!(
            model.add_member(Member::frame(1, 1, 9, 1, 1)),
            Err(AnalysisError::NodeNotFound(9))
        ));
        assert!(matches!(
            model.add_support(Support::fixed(5)),
            Err(AnalysisError::NodeNotFound(5))
        ));
    }
}
