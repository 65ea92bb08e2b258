pub mod error;
pub mod format;
pub mod model;
pub mod pipeline;
pub mod scale;
pub mod sieve;

pub use error::{Axis, GraphError, ParseFailure, Result};
pub use model::{BoundingBox, EdgeRecord, NodeRecord, Record};
pub use pipeline::convert;
pub use scale::DegeneratePolicy;
