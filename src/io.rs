//! Model file loader
//!
//! Reads the sectioned plain-text model format: seven sections in fixed
//! order (nodes, bars, materials, properties, restraints, nodal forces,
//! bar forces), each preceded by three description lines and a count line.
//! The loader is a thin wrapper that populates a [`Model`] through its
//! validating builder methods.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::elements::{Material, Member, MemberKind, Node, Section, Support};
use crate::error::{AnalysisError, AnalysisResult};
use crate::loads::{DistributedLoad, NodeLoad};
use crate::model::Model;

/// Read a model from a file on disk
pub fn read_model<P: AsRef<Path>>(path: P) -> AnalysisResult<Model> {
    let file = File::open(path)?;
    parse_model(BufReader::new(file))
}

/// Parse a model from any buffered reader
pub fn parse_model<R: BufRead>(reader: R) -> AnalysisResult<Model> {
    let mut lines = LineReader::new(reader);

    // Nodes
    lines.skip_description()?;
    let node_count = lines.count()?;
    let mut nodes = Vec::with_capacity(node_count);
    for _ in 0..node_count {
        let (line, tokens) = lines.record(3)?;
        nodes.push(Node::new(
            parse(&tokens[0], line, "node id")?,
            parse(&tokens[1], line, "x coordinate")?,
            parse(&tokens[2], line, "y coordinate")?,
        ));
    }

    // Bars: id, node1, node2, type, property id, material id
    lines.skip_description()?;
    let bar_count = lines.count()?;
    let mut members = Vec::with_capacity(bar_count);
    for _ in 0..bar_count {
        let (line, tokens) = lines.record(6)?;
        let kind = match tokens[3].as_str() {
            "TRUSS" => MemberKind::Truss,
            "FRAME" => MemberKind::Frame,
            other => {
                return Err(AnalysisError::Parse {
                    line,
                    message: format!("unknown member type '{other}'"),
                })
            }
        };
        members.push(Member::new(
            parse(&tokens[0], line, "member id")?,
            parse(&tokens[1], line, "start node id")?,
            parse(&tokens[2], line, "end node id")?,
            kind,
            parse(&tokens[5], line, "material id")?,
            parse(&tokens[4], line, "section id")?,
        ));
    }

    // Materials: id, name, E, Poisson ratio, density
    lines.skip_description()?;
    let material_count = lines.count()?;
    let mut materials = Vec::with_capacity(material_count);
    for _ in 0..material_count {
        let (line, tokens) = lines.record(5)?;
        materials.push(Material::new(
            parse(&tokens[0], line, "material id")?,
            &tokens[1],
            parse(&tokens[2], line, "elastic modulus")?,
            parse(&tokens[3], line, "poisson ratio")?,
            parse(&tokens[4], line, "density")?,
        ));
    }

    // Properties: id, name, A, I
    lines.skip_description()?;
    let section_count = lines.count()?;
    let mut sections = Vec::with_capacity(section_count);
    for _ in 0..section_count {
        let (line, tokens) = lines.record(4)?;
        sections.push(Section::new(
            parse(&tokens[0], line, "section id")?,
            &tokens[1],
            parse(&tokens[2], line, "area")?,
            parse(&tokens[3], line, "second moment of area")?,
        ));
    }

    // Restraints: node, TX, TY, RZ as 1/0 flags
    lines.skip_description()?;
    let restraint_count = lines.count()?;
    let mut supports = Vec::with_capacity(restraint_count);
    for _ in 0..restraint_count {
        let (line, tokens) = lines.record(4)?;
        supports.push(Support::new(
            parse(&tokens[0], line, "node id")?,
            parse::<u8>(&tokens[1], line, "TX flag")? == 1,
            parse::<u8>(&tokens[2], line, "TY flag")? == 1,
            parse::<u8>(&tokens[3], line, "RZ flag")? == 1,
        ));
    }

    // Nodal forces: node, FX, FY, MZ
    lines.skip_description()?;
    let nodal_force_count = lines.count()?;
    let mut node_loads = Vec::with_capacity(nodal_force_count);
    for _ in 0..nodal_force_count {
        let (line, tokens) = lines.record(4)?;
        node_loads.push(NodeLoad::new(
            parse(&tokens[0], line, "node id")?,
            parse(&tokens[1], line, "FX")?,
            parse(&tokens[2], line, "FY")?,
            parse(&tokens[3], line, "MZ")?,
        ));
    }

    // Bar forces: bar, a, wa, b, wb
    lines.skip_description()?;
    let bar_force_count = lines.count()?;
    let mut member_loads = Vec::with_capacity(bar_force_count);
    for _ in 0..bar_force_count {
        let (line, tokens) = lines.record(5)?;
        member_loads.push(DistributedLoad::new(
            parse(&tokens[0], line, "member id")?,
            parse(&tokens[1], line, "span start")?,
            parse(&tokens[3], line, "span end")?,
            parse(&tokens[2], line, "start intensity")?,
            parse(&tokens[4], line, "end intensity")?,
        ));
    }

    debug!(
        "parsed model file: {} nodes, {} members, {} materials, {} sections",
        nodes.len(),
        members.len(),
        materials.len(),
        sections.len()
    );

    // Populate the model in reference order so every builder check passes
    // before anything that depends on it is added.
    let mut model = Model::new();
    for material in materials {
        model.add_material(material)?;
    }
    for section in sections {
        model.add_section(section)?;
    }
    for node in nodes {
        model.add_node(node)?;
    }
    for member in members {
        model.add_member(member)?;
    }
    for support in supports {
        model.add_support(support)?;
    }
    for load in node_loads {
        model.add_node_load(load)?;
    }
    for load in member_loads {
        model.add_member_load(load)?;
    }

    Ok(model)
}

struct LineReader<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self) -> AnalysisResult<String> {
        self.line += 1;
        match self.lines.next() {
            Some(content) => Ok(content?),
            None => Err(AnalysisError::Parse {
                line: self.line,
                message: "unexpected end of file".to_string(),
            }),
        }
    }

    /// Skip the three description lines preceding every section
    fn skip_description(&mut self) -> AnalysisResult<()> {
        for _ in 0..3 {
            self.next_line()?;
        }
        Ok(())
    }

    /// Read a section's record count from the first token of the next line
    fn count(&mut self) -> AnalysisResult<usize> {
        let (line, tokens) = self.record(1)?;
        parse(&tokens[0], line, "record count")
    }

    /// Read a data line and split it into at least `expected` tokens
    fn record(&mut self, expected: usize) -> AnalysisResult<(usize, Vec<String>)> {
        let content = self.next_line()?;
        let tokens: Vec<String> = content.split_whitespace().map(str::to_string).collect();
        if tokens.len() < expected {
            return Err(AnalysisError::Parse {
                line: self.line,
                message: format!("expected {} fields, found {}", expected, tokens.len()),
            });
        }
        Ok((self.line, tokens))
    }
}

fn parse<T: FromStr>(token: &str, line: usize, what: &str) -> AnalysisResult<T> {
    token.parse().map_err(|_| AnalysisError::Parse {
        line,
        message: format!("invalid {what}: '{token}'"),
    })
}
