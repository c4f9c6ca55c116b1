//! Error types for the solver

use thiserror::Error;

/// Main error type for analysis operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("node {0} not found in model")]
    NodeNotFound(u32),

    #[error("member {0} not found in model")]
    MemberNotFound(u32),

    #[error("material {0} not found in model")]
    MaterialNotFound(u32),

    #[error("section {0} not found in model")]
    SectionNotFound(u32),

    #[error("duplicate id {0} already exists")]
    DuplicateId(u32),

    #[error("member {member} has zero length: nodes {i_node} and {j_node} coincide")]
    ZeroLengthMember { member: u32, i_node: u32, j_node: u32 },

    #[error("singular stiffness matrix - model may be unstable or have insufficient supports")]
    SingularMatrix,

    #[error("model not analyzed - run analyze_linear() first")]
    NotAnalyzed,

    #[error("model file parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Invalid span of a distributed member load
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LoadSpanError {
    #[error("span start {start} is not below span end {end}")]
    Reversed { start: f64, end: f64 },

    #[error("span end {end} lies beyond the member length {length}")]
    BeyondMember { end: f64, length: f64 },
}

/// Recoverable modeling problem found during analysis.
///
/// Warnings do not abort the run: the offending load is skipped and the
/// computation continues. They are collected into the solution and logged,
/// never printed from numerical routines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelWarning {
    #[error("distributed load on truss member {member} ignored: member loads apply to frame members only")]
    DistributedLoadOnTruss { member: u32 },

    #[error("distributed load on member {member} ignored: {source}")]
    InvalidLoadSpan {
        member: u32,
        #[source]
        source: LoadSpanError,
    },
}
