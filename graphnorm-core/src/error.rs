use thiserror::Error;

/// Why a `node` or `edge` line could not be turned into a record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseFailure {
    #[error("{record} record is missing its {field} field")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("{field} coordinate '{value}' is not a valid number")]
    InvalidNumber { field: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Parse error on line {line}: {reason}")]
    ParseError { line: usize, reason: ParseFailure },

    #[error("Degenerate scale: every node has {axis} = {value}, the {axis} range is zero")]
    DegenerateScaleError { axis: Axis, value: f64 },

    #[error("No node records to scale")]
    EmptyNodeSet,

    #[error("Node {node} has a non-finite {axis} coordinate ({value})")]
    NonFiniteCoordinate { node: String, axis: Axis, value: f64 },
}

/// Coordinate axis, used to report which side of the bounding box collapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
