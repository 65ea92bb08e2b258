/// A labeled point in 2D space, as read from a `node` line
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl NodeRecord {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}

/// A link between two node names. Endpoints are never checked against the node set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub name: String,
    pub origin: String,
    pub destination: String,
}

impl EdgeRecord {
    /// Build an edge; its name is synthesized as `origin-destination`
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        let origin = origin.into();
        let destination = destination.into();
        Self {
            name: format!("{}-{}", origin, destination),
            origin,
            destination,
        }
    }
}

/// One recognized input line
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Node(NodeRecord),
    Edge(EdgeRecord),
}

/// Min/max of every node coordinate, computed once over the full node set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}
