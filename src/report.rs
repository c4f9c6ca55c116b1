//! Result reporting
//!
//! Renders a solved model's displacements, reactions and member end forces
//! to any writer, as a human-readable text report or as JSON. The core
//! exposes results as plain records; everything about presentation lives
//! here.

use std::io::Write;

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};
use crate::model::Model;
use crate::results::{MemberEndForces, NodeDisplacement, Reactions};

/// Write a text report of the analysis results
pub fn write_text<W: Write>(model: &Model, out: &mut W) -> AnalysisResult<()> {
    let solution = model.solution().ok_or(AnalysisError::NotAnalyzed)?;
    let dof = solution.dof_table();

    writeln!(out, "LINEAR STATIC ANALYSIS RESULTS")?;
    writeln!(out, "==============================")?;
    writeln!(
        out,
        "{} nodes, {} members, {} dofs ({} unknown)",
        model.nodes.len(),
        model.members.len(),
        dof.total(),
        dof.unknown()
    )?;

    writeln!(out)?;
    writeln!(out, "Node displacements")?;
    writeln!(
        out,
        "{:>6} {:>14} {:>14} {:>14}",
        "node", "dx", "dy", "rz"
    )?;
    for node in &model.nodes {
        let d = model.node_displacement(node.id)?;
        writeln!(
            out,
            "{:>6} {:>14.6e} {:>14.6e} {:>14.6e}",
            node.id, d.dx, d.dy, d.rz
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Support reactions")?;
    writeln!(
        out,
        "{:>6} {:>14} {:>14} {:>14}",
        "node", "FX", "FY", "MZ"
    )?;
    for node in &model.nodes {
        if !model.supports.iter().any(|s| s.node == node.id && s.is_supported()) {
            continue;
        }
        let r = model.node_reactions(node.id)?;
        writeln!(
            out,
            "{:>6} {:>14.6e} {:>14.6e} {:>14.6e}",
            node.id, r.fx, r.fy, r.mz
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Member end forces (local, tension positive)")?;
    writeln!(
        out,
        "{:>6} {:>4} {:>14} {:>14} {:>14}",
        "member", "end", "axial", "shear", "moment"
    )?;
    for member in &model.members {
        let f = model.member_end_forces(member.id)?;
        for (end, forces) in [("i", f.start), ("j", f.end)] {
            writeln!(
                out,
                "{:>6} {:>4} {:>14.6e} {:>14.6e} {:>14.6e}",
                member.id, end, forces.axial, forces.shear, forces.moment
            )?;
        }
    }

    if !solution.warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "Warnings")?;
        for warning in &solution.warnings {
            writeln!(out, "  - {warning}")?;
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct NodeResult {
    id: u32,
    displacement: NodeDisplacement,
    #[serde(skip_serializing_if = "Option::is_none")]
    reaction: Option<Reactions>,
}

#[derive(Serialize)]
struct MemberResult {
    id: u32,
    forces: MemberEndForces,
}

#[derive(Serialize)]
struct JsonReport {
    nodes: Vec<NodeResult>,
    members: Vec<MemberResult>,
    warnings: Vec<String>,
}

/// Write the analysis results as JSON
pub fn write_json<W: Write>(model: &Model, out: &mut W) -> AnalysisResult<()> {
    let solution = model.solution().ok_or(AnalysisError::NotAnalyzed)?;

    let mut nodes = Vec::with_capacity(model.nodes.len());
    for node in &model.nodes {
        let supported = model
            .supports
            .iter()
            .any(|s| s.node == node.id && s.is_supported());
        nodes.push(NodeResult {
            id: node.id,
            displacement: model.node_displacement(node.id)?,
            reaction: if supported {
                Some(model.node_reactions(node.id)?)
            } else {
                None
            },
        });
    }

    let mut members = Vec::with_capacity(model.members.len());
    for member in &model.members {
        members.push(MemberResult {
            id: member.id,
            forces: model.member_end_forces(member.id)?,
        });
    }

    let report = JsonReport {
        nodes,
        members,
        warnings: solution.warnings.iter().map(|w| w.to_string()).collect(),
    };

    serde_json::to_writer_pretty(out, &report)?;
    Ok(())
}
