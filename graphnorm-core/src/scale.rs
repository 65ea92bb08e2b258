use crate::error::{Axis, GraphError, Result};
use crate::model::{BoundingBox, NodeRecord};
use tracing::{info, warn};

/// What to do when the bounding box has zero width on an axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Fail with `DegenerateScaleError`, `NonFiniteCoordinate` or `EmptyNodeSet`
    #[default]
    Reject,
    /// Apply the transform anyway; a collapsed axis or an `inf`/`nan` input comes out as NaN
    Propagate,
}

impl BoundingBox {
    /// Bounding box over every node, or `None` when there are none
    pub fn from_nodes(nodes: &[NodeRecord]) -> Option<Self> {
        let first = nodes.first()?;
        let seed = BoundingBox {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };

        Some(nodes.iter().skip(1).fold(seed, |bbox, node| BoundingBox {
            min_x: bbox.min_x.min(node.x),
            max_x: bbox.max_x.max(node.x),
            min_y: bbox.min_y.min(node.y),
            max_y: bbox.max_y.max(node.y),
        }))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// First axis whose range is zero, with the coordinate every node shares on it
    pub fn degenerate_axis(&self) -> Option<(Axis, f64)> {
        if self.width() == 0.0 {
            Some((Axis::X, self.min_x))
        } else if self.height() == 0.0 {
            Some((Axis::Y, self.min_y))
        } else {
            None
        }
    }

    /// Map a point inside the box onto [-1, 1] x [-1, 1]; axes scale independently
    pub fn normalize(&self, x: f64, y: f64) -> (f64, f64) {
        (
            2.0 * fraction(x, self.min_x, self.max_x) - 1.0,
            2.0 * fraction(y, self.min_y, self.max_y) - 1.0,
        )
    }
}

/// Position of `value` within `[min, max]` as a fraction in [0, 1].
///
/// A span wider than `f64::MAX` is measured in halves so finite input never overflows.
fn fraction(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span.is_finite() {
        (value - min) / span
    } else {
        (value / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
    }
}

/// First node coordinate that is `inf` or `NaN`
fn first_non_finite(nodes: &[NodeRecord]) -> Option<(&NodeRecord, Axis, f64)> {
    nodes.iter().find_map(|node| {
        if !node.x.is_finite() {
            Some((node, Axis::X, node.x))
        } else if !node.y.is_finite() {
            Some((node, Axis::Y, node.y))
        } else {
            None
        }
    })
}

impl NodeRecord {
    /// A new record with the same name and coordinates normalized against `bbox`
    pub fn scale(&self, bbox: &BoundingBox) -> NodeRecord {
        let (x, y) = bbox.normalize(self.x, self.y);
        NodeRecord::new(self.name.clone(), x, y)
    }
}

/// Normalize every node against the bounding box of the whole set, keeping input order
pub fn scale_all(nodes: &[NodeRecord], policy: DegeneratePolicy) -> Result<Vec<NodeRecord>> {
    if let Some((node, axis, value)) = first_non_finite(nodes) {
        match policy {
            DegeneratePolicy::Reject => {
                return Err(GraphError::NonFiniteCoordinate {
                    node: node.name.clone(),
                    axis,
                    value,
                });
            }
            DegeneratePolicy::Propagate => {
                warn!("Node {} has {} = {}, scaled values may be NaN", node.name, axis, value);
            }
        }
    }

    let Some(bbox) = BoundingBox::from_nodes(nodes) else {
        return match policy {
            DegeneratePolicy::Reject => Err(GraphError::EmptyNodeSet),
            DegeneratePolicy::Propagate => Ok(Vec::new()),
        };
    };

    info!(
        "Bounding box x: [{}, {}], y: [{}, {}]",
        bbox.min_x, bbox.max_x, bbox.min_y, bbox.max_y
    );

    if let Some((axis, value)) = bbox.degenerate_axis() {
        match policy {
            DegeneratePolicy::Reject => {
                return Err(GraphError::DegenerateScaleError { axis, value });
            }
            DegeneratePolicy::Propagate => {
                warn!("All nodes share {} = {}, scaled {} values will be NaN", axis, value, axis);
            }
        }
    }

    Ok(nodes.iter().map(|node| node.scale(&bbox)).collect())
}
