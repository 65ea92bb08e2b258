use crate::model::{EdgeRecord, NodeRecord};
use std::fmt;

// `{:?}` on f64 is the shortest representation that parses back to the same value,
// and keeps a trailing `.0` on integral values.
impl fmt::Display for NodeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "|> addNode (node \"{}\" <| position {:?} {:?})",
            self.name, self.x, self.y
        )
    }
}

impl fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "|> addEdge \"{}\" \"{}\" \"{}\"",
            self.name, self.origin, self.destination
        )
    }
}

/// Render the node block followed by the edge block, one command per line
pub fn render(nodes: &[NodeRecord], edges: &[EdgeRecord]) -> String {
    let mut output = String::new();

    for node in nodes {
        output.push_str(&format!("{}\n", node));
    }
    for edge in edges {
        output.push_str(&format!("{}\n", edge));
    }

    output
}
