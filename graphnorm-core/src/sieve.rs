use crate::error::{GraphError, ParseFailure, Result};
use crate::model::{EdgeRecord, NodeRecord, Record};
use tracing::{debug, info};

pub const NODE_KEYWORD: &str = "node";
pub const EDGE_KEYWORD: &str = "edge";

type FieldResult<T> = std::result::Result<T, ParseFailure>;

/// Node and edge records split out of the input, each in input order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Sieved {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// Parse a single line.
///
/// Returns `Ok(None)` for anything whose first token is not exactly `node` or `edge`,
/// including blank lines and comments. `line_number` is 1-based and only used for errors.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<Record>> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next();
    let at_line = |reason: ParseFailure| GraphError::ParseError {
        line: line_number,
        reason,
    };

    let record = match keyword {
        Some(NODE_KEYWORD) => Record::Node(parse_node(tokens).map_err(at_line)?),
        Some(EDGE_KEYWORD) => Record::Edge(parse_edge(tokens).map_err(at_line)?),
        _ => return Ok(None),
    };

    Ok(Some(record))
}

fn parse_node<'a>(mut tokens: impl Iterator<Item = &'a str>) -> FieldResult<NodeRecord> {
    let name = required(tokens.next(), NODE_KEYWORD, "name")?;
    let x = required(tokens.next(), NODE_KEYWORD, "x")?;
    let y = required(tokens.next(), NODE_KEYWORD, "y")?;

    Ok(NodeRecord::new(name, parse_coordinate(x, "x")?, parse_coordinate(y, "y")?))
}

fn parse_edge<'a>(mut tokens: impl Iterator<Item = &'a str>) -> FieldResult<EdgeRecord> {
    let origin = required(tokens.next(), EDGE_KEYWORD, "origin")?;
    let destination = required(tokens.next(), EDGE_KEYWORD, "destination")?;

    Ok(EdgeRecord::new(origin, destination))
}

fn required<'a>(
    token: Option<&'a str>,
    record: &'static str,
    field: &'static str,
) -> FieldResult<&'a str> {
    token.ok_or(ParseFailure::MissingField { record, field })
}

fn parse_coordinate(value: &str, field: &'static str) -> FieldResult<f64> {
    value.parse::<f64>().map_err(|_| ParseFailure::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Split lines into node and edge records, failing on the first malformed record
pub fn sieve<'a, I>(lines: I) -> Result<Sieved>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sieved = Sieved::default();
    let mut skipped = 0usize;

    for (index, line) in lines.into_iter().enumerate() {
        match parse_line(index + 1, line)? {
            Some(Record::Node(node)) => {
                debug!("line {}: node {} ({}, {})", index + 1, node.name, node.x, node.y);
                sieved.nodes.push(node);
            }
            Some(Record::Edge(edge)) => {
                debug!("line {}: edge {}", index + 1, edge.name);
                sieved.edges.push(edge);
            }
            None => {
                debug!("line {}: skipped", index + 1);
                skipped += 1;
            }
        }
    }

    info!(
        "Sieved {} nodes and {} edges ({} lines skipped)",
        sieved.nodes.len(),
        sieved.edges.len(),
        skipped
    );

    Ok(sieved)
}
