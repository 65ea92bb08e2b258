use crate::error::Result;
use crate::format::render;
use crate::scale::{DegeneratePolicy, scale_all};
use crate::sieve::sieve;

/// Run the whole conversion over a fully buffered input.
///
/// Nothing is rendered unless every line parses and scaling succeeds, so callers never
/// see partial output.
pub fn convert(input: &str, policy: DegeneratePolicy) -> Result<String> {
    let sieved = sieve(input.lines())?;
    let nodes = scale_all(&sieved.nodes, policy)?;

    Ok(render(&nodes, &sieved.edges))
}
